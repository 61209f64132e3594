use crate::auth::use_auth;
use crate::format_helpers::{format_count, format_currency, format_score, format_thousands};
use crate::loading::use_section_data;
use crate::routes::recommendations::level_tone;
use client::{DashboardData, LoadStatus};
use dioxus::prelude::*;
use shared_types::{level_distribution, top_by_iar, top_by_roi, ChartPoint, SectionId};
use shared_ui::{
    BarDatum, BarList, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DistributionBar, ErrorPanel, LoadingPanel, PageHeader, PageSubtitle, PageTitle, Segment,
    StatCard, StatTone,
};

/// IAR scores are on a 0-100 scale.
const IAR_SCALE: f64 = 100.0;

fn bars(points: Vec<ChartPoint>, display: fn(f64) -> String) -> Vec<BarDatum> {
    points
        .into_iter()
        .map(|p| BarDatum {
            display: display(p.value),
            label: p.label,
            value: p.value,
        })
        .collect()
}

/// Dashboard overview: KPI cards and the three recommendation charts.
#[component]
pub fn DashboardSection() -> Element {
    let state = use_section_data::<DashboardData>(SectionId::Dashboard);
    let mut router = use_auth().router;
    let snapshot = state.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            div {
                PageTitle { "Dashboard" }
                PageSubtitle { "Resumen del análisis de automatización de tickets" }
            }
        }

        match snapshot.status {
            LoadStatus::Loading => rsx! { LoadingPanel { label: "Cargando dashboard..." } },
            LoadStatus::Error => rsx! {
                ErrorPanel {
                    message: snapshot.error_message.clone().unwrap_or_default(),
                    on_retry: move |_| router.write().refresh(),
                }
            },
            LoadStatus::Ready => rsx! { Overview { data: snapshot.data.clone() } },
        }
    }
}

#[component]
fn Overview(data: DashboardData) -> Element {
    let summary = data.summary.clone().unwrap_or_default();
    let records = &data.recommendations;

    let iar_bars = bars(top_by_iar(records), format_score);
    let roi_bars = bars(top_by_roi(records), format_thousands);
    let segments: Vec<Segment> = level_distribution(records)
        .into_iter()
        .map(|(level, count)| Segment {
            label: level.short_label().to_string(),
            count,
            tone: level_tone(level).to_string(),
        })
        .collect();

    rsx! {
        div { class: "kpi-grid",
            StatCard {
                label: "Total de tickets",
                value: format_count(summary.total_tickets),
                hint: format!("{} categorías analizadas", summary.total_categories),
                tone: StatTone::Violet,
            }
            StatCard {
                label: "Ahorro anual estimado",
                value: format_currency(summary.total_annual_savings),
                hint: format!("ROI promedio {:.1}%", summary.average_roi_percentage),
                tone: StatTone::Green,
            }
            StatCard {
                label: "IAR promedio",
                value: format_score(summary.average_iar),
                hint: "Índice de automatización recomendada",
                tone: StatTone::Blue,
                meter: summary.average_iar,
            }
            StatCard {
                label: "Altamente recomendadas",
                value: summary.highly_recommended_categories.to_string(),
                hint: "Categorías listas para automatizar",
                tone: StatTone::Amber,
            }
        }

        div { class: "chart-grid",
            Card {
                CardHeader {
                    CardTitle { "Top 10 categorías por IAR" }
                    CardDescription { "Índice de 0 a 100" }
                }
                CardContent {
                    BarList { items: iar_bars, max: IAR_SCALE, tone: "violet" }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Distribución de recomendaciones" }
                    CardDescription { "Todas las categorías por nivel" }
                }
                CardContent {
                    DistributionBar { segments }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Top 8 categorías por ROI anual" }
                CardDescription { "Miles de USD" }
            }
            CardContent {
                BarList { items: roi_bars, tone: "green" }
            }
        }
    }
}
