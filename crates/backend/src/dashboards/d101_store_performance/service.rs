use contracts::dashboards::d101_store_performance::StorePerformanceResponse;
use contracts::shared::dashboard::{Presentation, Section, TabView};
use sea_orm::DatabaseConnection;

use super::repository::{self, StoreDailySales};
use crate::shared::charts::{pie_chart, pivot_series};
use crate::shared::filters::FilterSet;
use crate::shared::warehouse::QueryRunner;

/// Daily sales per store plus each store's share of the total.
///
/// `selection = None` selects every store.
pub async fn get_store_performance(
    db: &DatabaseConnection,
    selection: Option<Vec<String>>,
) -> StorePerformanceResponse {
    let mut runner = QueryRunner::new(db);
    let mut view = render(&mut runner, selection).await;
    view.errors = runner.into_banners();

    tracing::info!(
        "D101 Store Performance: {} stores selected, {} sections, {} errors",
        view.filter.as_ref().map(|f| f.selected.len()).unwrap_or(0),
        view.sections.len(),
        view.errors.len()
    );
    view
}

async fn render(runner: &mut QueryRunner<'_>, selection: Option<Vec<String>>) -> TabView {
    let mut view = TabView::new("Store Sales Performance");

    let stores = repository::get_store_names(runner).await;
    let selected = FilterSet::resolve(&stores, selection);
    view.filter = Some(selected.state("Select Stores", &stores));

    if selected.is_empty() {
        view.sections
            .push(Section::info("Please select at least one store."));
        return view;
    }

    let sales = repository::get_store_sales(runner, &selected).await;
    if sales.is_empty() {
        view.sections
            .push(Section::info("No sales data found for selected stores."));
        return view;
    }

    view.sections.extend(sales_sections(&sales));
    view
}

fn sales_sections(sales: &[StoreDailySales]) -> Vec<Section> {
    let trend = pivot_series(sales.iter().map(|s| {
        (
            s.full_date.clone(),
            s.store_name.clone(),
            s.sales.unwrap_or(0.0),
        )
    }));
    let distribution = pie_chart(
        "SALES",
        sales
            .iter()
            .map(|s| (s.store_name.clone(), s.sales.unwrap_or(0.0))),
    );

    vec![
        Section::untitled(Presentation::LineChart(trend)),
        Section::new(
            "Total Sales Distribution by Store",
            Presentation::PieChart(distribution),
        ),
    ]
}
