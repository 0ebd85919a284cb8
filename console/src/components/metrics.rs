//! Static sales widgets shown on the dashboard.
//!
//! The figures are fixed placeholders; nothing here talks to the backend.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use leptos::prelude::*;

pub const USERS_SERIES: [f64; 7] = [120.0, 200.0, 150.0, 220.0, 180.0, 250.0, 210.0];
pub const USAGE_SERIES: [f64; 7] = [80.0, 100.0, 90.0, 130.0, 120.0, 140.0, 160.0];

const SPARK_WIDTH: f64 = 240.0;
const SPARK_HEIGHT: f64 = 60.0;

/// One row of the shipped-ranking table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankingRow {
    pub rank: u32,
    pub name: &'static str,
    pub sales: &'static str,
}

pub const SHIPPED_RANKING: [RankingRow; 5] = [
    RankingRow { rank: 1, name: "Ryan Fridley", sales: "$89,000" },
    RankingRow { rank: 2, name: "Ryan Fridley", sales: "$89,000" },
    RankingRow { rank: 3, name: "Ryan Fridley", sales: "$89,000" },
    RankingRow { rank: 4, name: "Ryan Fridley", sales: "$89,000" },
    RankingRow { rank: 5, name: "Ryan Fridley", sales: "$89,000" },
];

/// SVG `points` attribute scaling `data` into a `width` x `height` box, with
/// larger values drawn higher. A flat series sits on the vertical midline.
#[allow(clippy::cast_precision_loss)]
pub fn sparkline_points(data: &[f64], width: f64, height: f64) -> String {
    if data.is_empty() {
        return String::new();
    }
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let step = if data.len() > 1 { width / (data.len() - 1) as f64 } else { 0.0 };

    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let x = step * i as f64;
            let y = if span > 0.0 { height - (value - min) / span * height } else { height / 2.0 };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Top half of the ranking reads as "up", the rest as "down".
pub fn ranking_tone(index: usize, len: usize) -> &'static str {
    if index < len / 2 { "ranking__row--up" } else { "ranking__row--down" }
}

#[component]
fn SparklineCard(title: &'static str, data: &'static [f64], modifier: &'static str) -> impl IntoView {
    let points = sparkline_points(data, SPARK_WIDTH, SPARK_HEIGHT);
    view! {
        <div class=format!("metric-card {modifier}")>
            <h3 class="metric-card__title">{title}</h3>
            <svg
                class="metric-card__sparkline"
                viewBox=format!("0 0 {SPARK_WIDTH} {SPARK_HEIGHT}")
                preserveAspectRatio="none"
            >
                <polyline points=points fill="none" stroke="currentColor" stroke-width="2"/>
            </svg>
        </div>
    }
}

/// The two sparkline cards.
#[component]
pub fn SalesMetrics() -> impl IntoView {
    view! {
        <div class="metrics-grid">
            <SparklineCard title="Users Graph" data=&USERS_SERIES modifier="metric-card--users"/>
            <SparklineCard title="Users Usage" data=&USAGE_SERIES modifier="metric-card--usage"/>
        </div>
    }
}

#[component]
pub fn ShippedRanking() -> impl IntoView {
    let len = SHIPPED_RANKING.len();
    view! {
        <div class="ranking">
            <table class="ranking__table">
                <thead>
                    <tr>
                        <th colspan="4" class="ranking__caption">"SHIPPED"</th>
                    </tr>
                    <tr>
                        <th>"RANK"</th>
                        <th>"SALES PERSON"</th>
                        <th>"MTD"</th>
                        <th>"YTD"</th>
                    </tr>
                </thead>
                <tbody>
                    {SHIPPED_RANKING
                        .iter()
                        .enumerate()
                        .map(|(i, row)| {
                            view! {
                                <tr class=ranking_tone(i, len)>
                                    <td>{row.rank}</td>
                                    <td>{row.name}</td>
                                    <td>{row.sales}</td>
                                    <td>{row.sales}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
