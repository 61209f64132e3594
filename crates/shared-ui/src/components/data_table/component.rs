use dioxus::prelude::*;

/// Horizontally scrollable table.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-table-wrap",
            table { class: "seira-table",
                {children}
            }
        }
    }
}

/// Header row; children are `DataTableColumn`s.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header. `numeric` right-aligns the column.
#[component]
pub fn DataTableColumn(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        th { "data-numeric": numeric, {children} }
    }
}

#[component]
pub fn DataTableRow(
    #[props(default = false)] muted: bool,
    children: Element,
) -> Element {
    rsx! {
        tr { class: "seira-table-row", "data-muted": muted, {children} }
    }
}

#[component]
pub fn DataTableCell(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        td { "data-numeric": numeric, {children} }
    }
}
