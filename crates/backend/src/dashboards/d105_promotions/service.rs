use contracts::dashboards::d105_promotions::PromotionsResponse;
use contracts::shared::dashboard::{Presentation, Section, TabView};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::charts::{bar_chart, mean_by};
use crate::shared::warehouse::{to_table, QueryRunner};

pub async fn get_promotions(db: &DatabaseConnection) -> PromotionsResponse {
    let mut runner = QueryRunner::new(db);
    let mut view = TabView::new("Promotions Overview");

    let promotions = repository::get_recent_promotions(&mut runner).await;
    if promotions.is_empty() {
        view.sections
            .push(Section::info("No promotion data available."));
    } else {
        // Averaged over the fetched promotions only
        let by_type = mean_by(promotions.iter().filter_map(|p| {
            let promo_type = p.promo_type.clone()?;
            Some((promo_type, p.discount_rate?))
        }));
        view.sections
            .push(Section::untitled(Presentation::Table(to_table(&promotions))));
        view.sections.push(Section::new(
            "Average Discount Rate by Promotion Type",
            Presentation::BarChart(bar_chart("DISCOUNT_RATE", by_type)),
        ));
    }

    view.errors = runner.into_banners();
    tracing::info!(
        "D105 Promotions: {} sections, {} errors",
        view.sections.len(),
        view.errors.len()
    );
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing;
    use contracts::shared::dashboard::CellValue;

    #[tokio::test]
    async fn test_recent_promotions_and_average_discount() {
        let db = testing::warehouse().await;
        let view = get_promotions(&db).await;

        assert!(view.errors.is_empty());
        let Presentation::Table(table) = &view.sections[0].presentation else {
            panic!("expected a table");
        };
        assert_eq!(table.columns.len(), 7);
        assert_eq!(table.rows[0][0], CellValue::Integer(3));
        assert_eq!(table.rows[0][1], CellValue::Text("Sourdough Bread".to_string()));

        let Presentation::BarChart(bars) = &view
            .section("Average Discount Rate by Promotion Type")
            .unwrap()
            .presentation
        else {
            panic!("expected a bar chart");
        };
        assert_eq!(bars.labels, vec!["BOGO", "Discount"]);
        assert_eq!(bars.values[0], 0.5);
        assert!((bars.values[1] - 0.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_failure_shows_banner_and_placeholder() {
        let db = testing::empty_warehouse().await;
        let view = get_promotions(&db).await;

        assert_eq!(view.errors.len(), 1);
        assert!(view.errors[0].contains("FACT_PROMOTION"));
        assert_eq!(
            view.sections,
            vec![Section::info("No promotion data available.")]
        );
    }
}
