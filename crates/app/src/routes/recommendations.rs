use dioxus::prelude::*;
use shared_types::{
    LevelFilter, Priority, RecommendationFilter, RecommendationLevel, WireValue, ALL_LEVELS,
};
use shared_ui::{BadgeVariant, Card, CardContent, FormSelect, RangeInput};

/// Badge colour for a recommendation level.
pub fn level_variant(level: Option<RecommendationLevel>) -> BadgeVariant {
    match level {
        Some(RecommendationLevel::HighlyRecommended) => BadgeVariant::Success,
        Some(RecommendationLevel::Evaluate) => BadgeVariant::Warning,
        Some(RecommendationLevel::NotRecommended) => BadgeVariant::Destructive,
        None => BadgeVariant::Outline,
    }
}

pub fn level_text(level: Option<RecommendationLevel>) -> &'static str {
    level.map(|l| l.label()).unwrap_or("Sin nivel")
}

/// Chart tone for a level bucket.
pub fn level_tone(level: RecommendationLevel) -> &'static str {
    match level {
        RecommendationLevel::HighlyRecommended => "green",
        RecommendationLevel::Evaluate => "amber",
        RecommendationLevel::NotRecommended => "red",
    }
}

pub fn priority_variant(priority: Option<Priority>) -> BadgeVariant {
    match priority {
        Some(Priority::High) => BadgeVariant::Destructive,
        Some(Priority::Medium) => BadgeVariant::Warning,
        Some(Priority::Low) => BadgeVariant::Success,
        None => BadgeVariant::Outline,
    }
}

pub fn priority_text(priority: Option<Priority>) -> &'static str {
    priority.map(|p| p.as_wire()).unwrap_or("N/D")
}

/// Minimum-IAR slider plus level select, shared by analysis and reports.
#[component]
pub fn RecommendationFilterBar(
    filter: Signal<RecommendationFilter>,
    shown: usize,
    total: usize,
) -> Element {
    let mut filter = filter;
    let current = filter();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./recommendations.css") }

        Card { class: "filter-bar",
            CardContent {
                div { class: "filter-bar-fields",
                    RangeInput {
                        label: format!("IAR mínimo: {}", current.min_iar),
                        value: current.min_iar,
                        on_change: move |min_iar: u8| {
                            let level = filter.peek().level;
                            filter.set(RecommendationFilter::new(min_iar, level));
                        },
                    }
                    FormSelect {
                        label: "Nivel de recomendación",
                        value: current.level.select_value().to_string(),
                        onchange: move |evt: FormEvent| {
                            let min_iar = filter.peek().min_iar;
                            filter.set(RecommendationFilter::new(
                                min_iar,
                                LevelFilter::from_select(&evt.value()),
                            ));
                        },
                        option { value: "ALL", "Todos" }
                        for level in ALL_LEVELS {
                            option { value: level.as_wire(), "{level.label()}" }
                        }
                    }
                }
                p { class: "filter-bar-count", "Mostrando {shown} de {total} categorías" }
            }
        }
    }
}
