use dioxus::prelude::*;

/// Labelled text input with an optional inline error.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    /// Field-level validation message shown under the input.
    #[props(default)]
    error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "seira-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-input-field",
            if !label.is_empty() {
                label { class: "seira-input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                span { class: "seira-input-error", "{message}" }
            }
        }
    }
}

/// Native range slider for integer thresholds.
#[component]
pub fn RangeInput(
    value: u8,
    #[props(default = 0)] min: u8,
    #[props(default = 100)] max: u8,
    #[props(default)] label: String,
    on_change: EventHandler<u8>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-input-field",
            if !label.is_empty() {
                label { class: "seira-input-label", "{label}" }
            }
            input {
                class: "seira-range",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<u8>() {
                        on_change.call(parsed.clamp(min, max));
                    }
                },
            }
        }
    }
}
