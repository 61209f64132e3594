use dioxus::prelude::*;

/// Section heading with room for actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-page-header",
            {children}
        }
    }
}

#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "seira-page-title", {children} }
    }
}

#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "seira-page-subtitle", {children} }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "seira-page-actions", {children} }
    }
}
