use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal form dialog (create user, edit role).
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "seira-dialog-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("seira-dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "seira-dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "seira-dialog-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Right-aligned row of dialog buttons.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "seira-dialog-footer", {children} }
    }
}
