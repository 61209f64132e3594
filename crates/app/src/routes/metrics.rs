use crate::auth::use_auth;
use crate::format_helpers::{format_count, format_percent};
use crate::loading::use_section_data;
use client::LoadStatus;
use dioxus::prelude::*;
use shared_types::{display_category, MetricRecord, SectionId};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, EmptyPanel, ErrorPanel,
    LoadingPanel, PageHeader, PageSubtitle, PageTitle,
};

/// One labelled count inside a breakdown.
#[derive(Debug, Clone, PartialEq)]
struct Share {
    label: &'static str,
    tone: &'static str,
    count: u64,
}

/// Percentage of `count` over `total`; zero when there is nothing to divide.
fn share_percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn urgency_shares(metric: &MetricRecord) -> Vec<Share> {
    vec![
        Share { label: "Crítica", tone: "red", count: metric.urgency_critical },
        Share { label: "Alta", tone: "orange", count: metric.urgency_high },
        Share { label: "Media", tone: "amber", count: metric.urgency_medium },
        Share { label: "Baja", tone: "green", count: metric.urgency_low },
    ]
}

fn sentiment_shares(metric: &MetricRecord) -> Vec<Share> {
    vec![
        Share { label: "Positivo", tone: "green", count: metric.sentiment_positive },
        Share { label: "Neutral", tone: "slate", count: metric.sentiment_neutral },
        Share { label: "Negativo", tone: "red", count: metric.sentiment_negative },
    ]
}

/// Ticket metrics: one card per category.
#[component]
pub fn MetricsSection() -> Element {
    let state = use_section_data::<Vec<MetricRecord>>(SectionId::Tickets);
    let mut router = use_auth().router;
    let snapshot = state.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./metrics.css") }

        PageHeader {
            div {
                PageTitle { "Métricas por categoría" }
                PageSubtitle { "Urgencia y sentimiento de los tickets" }
            }
        }

        match snapshot.status {
            LoadStatus::Loading => rsx! { LoadingPanel { label: "Cargando métricas..." } },
            LoadStatus::Error => rsx! {
                ErrorPanel {
                    message: snapshot.error_message.clone().unwrap_or_default(),
                    on_retry: move |_| router.write().refresh(),
                }
            },
            LoadStatus::Ready => rsx! {
                if snapshot.data.is_empty() {
                    EmptyPanel { message: "No hay métricas disponibles." }
                }
                div { class: "metrics-grid",
                    for metric in snapshot.data.iter().cloned() {
                        MetricCard { key: "{metric.id}-{metric.category}", metric }
                    }
                }
            },
        }
    }
}

#[component]
fn MetricCard(metric: MetricRecord) -> Element {
    let urgency_total = metric.urgency_total();
    let sentiment_total = metric.sentiment_total();
    let complexity = format!("{:.1}", metric.average_complexity);

    rsx! {
        Card { class: "metric-card",
            CardHeader { class: "metric-card-header",
                CardTitle { "{display_category(&metric.category, usize::MAX)}" }
                if metric.is_anomaly {
                    Badge { variant: BadgeVariant::Destructive, "Anomalía" }
                }
            }
            CardContent {
                dl { class: "metric-summary",
                    dt { "Total de tickets" }
                    dd { "{format_count(metric.total_tickets)}" }
                    dt { "Complejidad promedio" }
                    dd { "{complexity}" }
                    dt { "Tasa de resolución" }
                    dd { "{format_percent(metric.resolution_rate)}" }
                }
                Breakdown { title: "Urgencia", shares: urgency_shares(&metric), total: urgency_total }
                Breakdown { title: "Sentimiento", shares: sentiment_shares(&metric), total: sentiment_total }
            }
        }
    }
}

#[component]
fn Breakdown(title: String, shares: Vec<Share>, total: u64) -> Element {
    rsx! {
        div { class: "metric-breakdown",
            p { class: "metric-breakdown-title", "{title}" }
            for share in shares {
                {
                    let width = format!("{:.1}", share_percent(share.count, total));
                    rsx! {
                        div { key: "{share.label}", class: "metric-row", "data-tone": share.tone,
                            span { class: "metric-dot" }
                            span { class: "metric-row-label", "{share.label}" }
                            div { class: "metric-row-track",
                                div { class: "metric-row-fill", style: "width: {width}%" }
                            }
                            span { class: "metric-row-count", "{format_count(share.count)}" }
                        }
                    }
                }
            }
        }
    }
}
