//! Insights tab: charts computed from the seller's fetched properties.

use estately::Insights;
use leptos::*;

use crate::components::{ChartCanvas, ChartDatum, ChartKind};

#[component]
pub fn InsightsPanel(insights: Insights) -> impl IntoView {
    let distribution: Vec<ChartDatum> = insights
        .distribution
        .iter()
        .map(|entry| ChartDatum::new(entry.property_type.plural_label(), entry.count as f64))
        .collect();

    let prices: Vec<ChartDatum> = insights
        .avg_price_by_type
        .iter()
        .map(|entry| ChartDatum::new(entry.property_type.plural_label(), entry.average_price))
        .collect();

    let trend: Vec<ChartDatum> = insights
        .trend
        .iter()
        .map(|point| ChartDatum::new(point.label.clone(), point.price))
        .collect();

    let summary = if insights.is_empty() {
        "No listed properties yet".to_string()
    } else {
        format!("Based on {} listed properties", insights.total())
    };

    view! {
        <div class="seller-insights">
            <h2>"Property Insights"</h2>
            <p class="seller-insights-summary">
                {summary}
            </p>
            <div class="seller-charts">
                <ChartCanvas title="Property Distribution" kind=ChartKind::Pie data=distribution/>
                <ChartCanvas title="Average Property Prices" kind=ChartKind::Bar data=prices/>
                <ChartCanvas title="Price Trend" kind=ChartKind::Line data=trend/>
            </div>
        </div>
    }
}
