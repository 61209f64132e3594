use crate::auth::use_auth;
use crate::format_helpers::{format_count, format_score};
use crate::loading::use_section_data;
use crate::routes::recommendations::{
    level_text, level_variant, priority_text, priority_variant, RecommendationFilterBar,
};
use client::LoadStatus;
use dioxus::prelude::*;
use shared_types::{
    display_category, RecommendationFilter, RecommendationRecord, SectionId,
};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, EmptyPanel, ErrorPanel,
    LoadingPanel, PageHeader, PageSubtitle, PageTitle,
};

/// Per-category analysis cards with the shared recommendation filter.
#[component]
pub fn AnalysisSection() -> Element {
    let state = use_section_data::<Vec<RecommendationRecord>>(SectionId::Analytics);
    let filter = use_signal(RecommendationFilter::default);
    let mut router = use_auth().router;
    let snapshot = state.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./analysis.css") }

        PageHeader {
            div {
                PageTitle { "Análisis detallado" }
                PageSubtitle { "Categorías y recomendaciones de automatización" }
            }
        }

        match snapshot.status {
            LoadStatus::Loading => rsx! { LoadingPanel { label: "Cargando análisis..." } },
            LoadStatus::Error => rsx! {
                ErrorPanel {
                    message: snapshot.error_message.clone().unwrap_or_default(),
                    on_retry: move |_| router.write().refresh(),
                }
            },
            LoadStatus::Ready => {
                let visible = filter().apply(&snapshot.data);
                rsx! {
                    RecommendationFilterBar {
                        filter,
                        shown: visible.len(),
                        total: snapshot.data.len(),
                    }
                    if visible.is_empty() {
                        EmptyPanel { message: "No hay recomendaciones que coincidan con los filtros." }
                    }
                    div { class: "analysis-list",
                        for record in visible {
                            AnalysisCard { key: "{record.id}-{record.category}", record }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AnalysisCard(record: RecommendationRecord) -> Element {
    let title = display_category(&record.category, usize::MAX);

    rsx! {
        Card { class: "analysis-card",
            CardHeader { class: "analysis-card-header",
                CardTitle { "{title}" }
                div { class: "analysis-card-badges",
                    Badge { variant: level_variant(record.recommendation_level),
                        "{level_text(record.recommendation_level)}"
                    }
                    Badge { variant: BadgeVariant::Primary,
                        "IAR: {format_score(record.iar_score)}"
                    }
                }
            }
            CardContent {
                if !record.recommendation_text.is_empty() {
                    p { class: "analysis-text", "{record.recommendation_text}" }
                }
                div { class: "analysis-facts",
                    div { class: "analysis-fact",
                        span { class: "analysis-fact-label", "Razón principal" }
                        span { class: "analysis-fact-value", "{record.main_reason}" }
                    }
                    div { class: "analysis-fact",
                        span { class: "analysis-fact-label", "Prioridad" }
                        Badge { variant: priority_variant(record.priority),
                            "{priority_text(record.priority)}"
                        }
                    }
                    div { class: "analysis-fact",
                        span { class: "analysis-fact-label", "Total de tickets" }
                        span { class: "analysis-fact-value", "{format_count(record.total_tickets)}" }
                    }
                }
                if !record.suggested_actions.is_empty() {
                    div { class: "analysis-actions",
                        p { class: "analysis-fact-label", "Acciones sugeridas" }
                        ul {
                            for (idx, action) in record.suggested_actions.iter().enumerate() {
                                li { key: "{idx}", "{action}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
