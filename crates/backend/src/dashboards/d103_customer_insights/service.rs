use contracts::dashboards::d103_customer_insights::CustomerInsightsResponse;
use contracts::shared::dashboard::{Presentation, Section, TabView};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::charts::{bar_chart, pie_chart};
use crate::shared::filters::FilterSet;
use crate::shared::warehouse::{to_table, QueryRunner};

/// Regional customer counts and tier split for the selected loyalty tiers.
///
/// `selection = None` selects every tier.
pub async fn get_customer_insights(
    db: &DatabaseConnection,
    selection: Option<Vec<String>>,
) -> CustomerInsightsResponse {
    let mut runner = QueryRunner::new(db);
    let mut view = render(&mut runner, selection).await;
    view.errors = runner.into_banners();

    tracing::info!(
        "D103 Customer Insights: {} sections, {} errors",
        view.sections.len(),
        view.errors.len()
    );
    view
}

async fn render(runner: &mut QueryRunner<'_>, selection: Option<Vec<String>>) -> TabView {
    let mut view = TabView::new("Customer Insights");

    let tiers = repository::get_loyalty_tiers(runner).await;
    let selected = FilterSet::resolve(&tiers, selection);
    view.filter = Some(selected.state("Select Loyalty Tiers", &tiers));

    if selected.is_empty() {
        view.sections
            .push(Section::info("Please select at least one loyalty tier."));
        return view;
    }

    let regions = repository::get_region_customers(runner, &selected).await;
    if regions.is_empty() {
        view.sections.push(Section::info("No customer data found."));
        return view;
    }

    let counts = bar_chart(
        "CUSTOMER_COUNT",
        regions.iter().map(|r| {
            (
                r.region.clone().unwrap_or_default(),
                r.customer_count as f64,
            )
        }),
    );
    view.sections
        .push(Section::untitled(Presentation::Table(to_table(&regions))));
    view.sections.push(Section::new(
        "Customer Count by Region",
        Presentation::BarChart(counts),
    ));

    let tier_split = repository::get_tier_customers(runner, &selected).await;
    if !tier_split.is_empty() {
        let pie = pie_chart(
            "CUSTOMER_COUNT",
            tier_split
                .into_iter()
                .map(|t| (t.loyalty_tier, t.customer_count as f64)),
        );
        view.sections.push(Section::new(
            "Loyalty Tier Distribution",
            Presentation::PieChart(pie),
        ));
    }

    view
}
