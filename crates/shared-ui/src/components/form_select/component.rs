use dioxus::prelude::*;

/// Native `<select>` for filters and form fields.
///
/// Children are `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)]
    value: String,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)]
    label: String,
    #[props(default = false)]
    disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-select-field",
            if !label.is_empty() {
                label { class: "seira-select-label", "{label}" }
            }
            select {
                class: "seira-select",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
