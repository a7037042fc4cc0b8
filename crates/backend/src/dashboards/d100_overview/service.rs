use contracts::dashboards::d100_overview::OverviewResponse;
use contracts::shared::dashboard::{MetricCard, Presentation, Section, TabView};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::charts::single_series;
use crate::shared::format::{format_amount, format_count};
use crate::shared::warehouse::QueryRunner;

/// Headline metrics and the sales trend
pub async fn get_overview(db: &DatabaseConnection) -> OverviewResponse {
    let mut runner = QueryRunner::new(db);
    let mut view = render(&mut runner).await;
    view.errors = runner.into_banners();

    tracing::info!(
        "D100 Overview: {} sections, {} errors",
        view.sections.len(),
        view.errors.len()
    );
    view
}

async fn render(runner: &mut QueryRunner<'_>) -> TabView {
    let mut view = TabView::new("Overview Metrics");

    let total_sales = repository::get_total_sales(runner).await.unwrap_or(0.0);
    let total_orders = repository::get_total_orders(runner).await.unwrap_or(0);
    let active_customers = repository::get_active_customers(runner).await.unwrap_or(0);

    view.sections.push(Section::untitled(Presentation::Metrics(vec![
        MetricCard {
            label: "Total Sales (LKR)".to_string(),
            value: format_amount(total_sales),
        },
        MetricCard {
            label: "Total Orders".to_string(),
            value: format_count(total_orders),
        },
        MetricCard {
            label: "Active Customers".to_string(),
            value: format_count(active_customers),
        },
    ])));

    let daily = repository::get_sales_over_time(runner).await;
    let trend = if daily.is_empty() {
        Presentation::Info("No sales data available.".to_string())
    } else {
        Presentation::LineChart(single_series(
            "SALES",
            daily
                .into_iter()
                .map(|d| (d.full_date, d.sales.unwrap_or(0.0))),
        ))
    };
    view.sections.push(Section::new("Sales Over Time", trend));

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing;

    fn metric<'a>(view: &'a TabView, label: &str) -> &'a str {
        match &view.sections[0].presentation {
            Presentation::Metrics(cards) => cards
                .iter()
                .find(|c| c.label == label)
                .map(|c| c.value.as_str())
                .unwrap(),
            other => panic!("expected metrics, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_overview_metrics() {
        let db = testing::warehouse().await;
        let view = get_overview(&db).await;

        assert!(view.errors.is_empty());
        assert_eq!(metric(&view, "Total Sales (LKR)"), "6,100.00");
        assert_eq!(metric(&view, "Total Orders"), "15");
        assert_eq!(metric(&view, "Active Customers"), "4");
    }

    #[tokio::test]
    async fn test_sales_over_time_is_one_daily_series() {
        let db = testing::warehouse().await;
        let view = get_overview(&db).await;

        let Presentation::LineChart(chart) = &view.section("Sales Over Time").unwrap().presentation
        else {
            panic!("expected a line chart");
        };
        assert_eq!(chart.x, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].total(), 6100.0);
    }

    #[tokio::test]
    async fn test_failed_queries_fall_back_to_zero_and_placeholder() {
        let db = testing::empty_warehouse().await;
        let view = get_overview(&db).await;

        assert_eq!(view.errors.len(), 4);
        assert!(view.errors.iter().all(|e| e.contains("no such table")));
        assert_eq!(metric(&view, "Total Sales (LKR)"), "0.00");
        assert_eq!(metric(&view, "Total Orders"), "0");
        assert_eq!(
            view.section("Sales Over Time").unwrap().presentation,
            Presentation::Info("No sales data available.".to_string())
        );
    }
}
