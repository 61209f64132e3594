use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Violet,
    Blue,
    Green,
    Amber,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Violet => "violet",
            StatTone::Blue => "blue",
            StatTone::Green => "green",
            StatTone::Amber => "amber",
        }
    }
}

/// KPI tile: label, big value, a hint line and an optional 0-100 meter.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: String,
    #[props(default)] tone: StatTone,
    #[props(default)] meter: Option<f64>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-stat", "data-tone": tone.class(),
            span { class: "seira-stat-label", "{label}" }
            p { class: "seira-stat-value", "{value}" }
            if !hint.is_empty() {
                p { class: "seira-stat-hint", "{hint}" }
            }
            if let Some(percent) = meter {
                div { class: "seira-stat-meter",
                    div {
                        class: "seira-stat-meter-fill",
                        style: "width: {percent.clamp(0.0, 100.0)}%",
                    }
                }
            }
        }
    }
}
