use dioxus::prelude::*;

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// Text shown at the end of the bar (already formatted).
    pub display: String,
}

/// Width of a bar as a percentage of `max`, clamped to 0..=100.
pub fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Ranked horizontal bar chart drawn with CSS.
///
/// Bars are scaled against `max` when given, otherwise against the largest value.
#[component]
pub fn BarList(
    items: Vec<BarDatum>,
    #[props(default)] max: Option<f64>,
    #[props(default = "violet".to_string())] tone: String,
    #[props(default = "Sin datos".to_string())] empty_label: String,
) -> Element {
    let scale = max.unwrap_or_else(|| items.iter().map(|d| d.value).fold(0.0, f64::max));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-bars", "data-tone": "{tone}",
            if items.is_empty() {
                p { class: "seira-chart-empty", "{empty_label}" }
            }
            for datum in items {
                BarRow { key: "{datum.label}", datum: datum.clone(), scale }
            }
        }
    }
}

#[component]
pub fn BarRow(datum: BarDatum, scale: f64) -> Element {
    let width = bar_width(datum.value, scale);
    rsx! {
        div { class: "seira-bar-row",
            span { class: "seira-bar-label", title: "{datum.label}", "{datum.label}" }
            div { class: "seira-bar-track",
                div { class: "seira-bar-fill", style: "width: {width:.1}%" }
            }
            span { class: "seira-bar-value", "{datum.display}" }
        }
    }
}

/// One slice of a distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub count: usize,
    /// `green`, `amber` or `red`.
    pub tone: String,
}

/// Share of each segment as a percentage of the total. All zeros when empty.
pub fn segment_shares(segments: &[Segment]) -> Vec<f64> {
    let total: usize = segments.iter().map(|s| s.count).sum();
    segments
        .iter()
        .map(|s| {
            if total == 0 {
                0.0
            } else {
                s.count as f64 / total as f64 * 100.0
            }
        })
        .collect()
}

/// Stacked bar plus legend; stands in for a pie chart.
#[component]
pub fn DistributionBar(segments: Vec<Segment>) -> Element {
    let shares = segment_shares(&segments);
    let rows: Vec<(Segment, f64)> = segments.into_iter().zip(shares).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "seira-distribution",
            div { class: "seira-distribution-track",
                for (segment, share) in rows.iter().cloned() {
                    div {
                        key: "{segment.label}",
                        class: "seira-distribution-slice",
                        "data-tone": "{segment.tone}",
                        style: "width: {share:.1}%",
                    }
                }
            }
            ul { class: "seira-distribution-legend",
                for (segment, share) in rows.into_iter() {
                    li { key: "{segment.label}", "data-tone": "{segment.tone}",
                        span { class: "seira-legend-dot" }
                        "{segment.label}: {segment.count} ({share:.0}%)"
                    }
                }
            }
        }
    }
}
