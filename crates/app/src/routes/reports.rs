use crate::auth::use_auth;
use crate::format_helpers::{format_count, format_currency, format_percent, format_score};
use crate::loading::use_section_data;
use crate::routes::recommendations::{level_text, level_variant, RecommendationFilterBar};
use client::LoadStatus;
use dioxus::prelude::*;
use shared_types::{display_category, RecommendationFilter, RecommendationRecord, SectionId};
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, ErrorPanel, LoadingPanel, PageHeader, PageSubtitle, PageTitle,
};

/// Tabular report of the filtered recommendations.
#[component]
pub fn ReportsSection() -> Element {
    let state = use_section_data::<Vec<RecommendationRecord>>(SectionId::Reports);
    let filter = use_signal(RecommendationFilter::default);
    let mut router = use_auth().router;
    let snapshot = state.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        PageHeader {
            div {
                PageTitle { "Reporte de recomendaciones" }
                PageSubtitle { "Tabla detallada y filtrable de las recomendaciones" }
            }
        }

        match snapshot.status {
            LoadStatus::Loading => rsx! { LoadingPanel { label: "Cargando reporte..." } },
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
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Categoría" }
                            DataTableColumn { numeric: true, "IAR" }
                            DataTableColumn { "Nivel" }
                            DataTableColumn { numeric: true, "Tickets" }
                            DataTableColumn { numeric: true, "ROI anual" }
                            DataTableColumn { numeric: true, "ROI %" }
                        }
                        DataTableBody {
                            if visible.is_empty() {
                                tr {
                                    td { class: "reports-empty", colspan: "6",
                                        "No hay recomendaciones que coincidan con los filtros."
                                    }
                                }
                            }
                            for record in visible {
                                ReportRow { key: "{record.id}-{record.category}", record }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportRow(record: RecommendationRecord) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell {
                span { class: "reports-category", "{display_category(&record.category, usize::MAX)}" }
            }
            DataTableCell { numeric: true,
                Badge { variant: BadgeVariant::Primary, "{format_score(record.iar_score)}" }
            }
            DataTableCell {
                Badge { variant: level_variant(record.recommendation_level),
                    "{level_text(record.recommendation_level)}"
                }
            }
            DataTableCell { numeric: true, "{format_count(record.total_tickets)}" }
            DataTableCell { numeric: true,
                span { class: "reports-money", "{format_currency(record.annual_roi_estimate)}" }
            }
            DataTableCell { numeric: true,
                span { class: "reports-percent", "{format_percent(record.roi_percentage)}" }
            }
        }
    }
}
