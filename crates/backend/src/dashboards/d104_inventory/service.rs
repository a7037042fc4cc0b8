use contracts::dashboards::d104_inventory::InventoryResponse;
use contracts::shared::dashboard::{FilterState, Presentation, Section, TabView};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::dashboards::d101_store_performance::repository::get_store_names;
use crate::shared::charts::bar_chart;
use crate::shared::filters::first_or;
use crate::shared::warehouse::{to_table, QueryRunner};

/// Products shown in the stock level chart
const CHART_PRODUCTS: usize = 20;

/// Stock levels of one store; `store = None` picks the first store
pub async fn get_inventory(db: &DatabaseConnection, store: Option<&str>) -> InventoryResponse {
    let mut runner = QueryRunner::new(db);
    let mut view = render(&mut runner, store).await;
    view.errors = runner.into_banners();

    tracing::info!(
        "D104 Inventory: {} sections, {} errors",
        view.sections.len(),
        view.errors.len()
    );
    view
}

async fn render(runner: &mut QueryRunner<'_>, store: Option<&str>) -> TabView {
    let mut view = TabView::new("Inventory Status");

    let stores = get_store_names(runner).await;
    let selected = first_or(&stores, store);
    view.filter = Some(FilterState {
        label: "Select Store".to_string(),
        options: stores,
        selected: selected.iter().cloned().collect(),
    });

    // No stores means nothing to pick and nothing to show
    let Some(store) = selected else {
        return view;
    };

    let positions = repository::get_stock_positions(runner, &store).await;
    if positions.is_empty() {
        view.sections
            .push(Section::info(format!("No inventory data for {}", store)));
        return view;
    }

    let lowest = bar_chart(
        "STOCK_LEVEL",
        positions
            .iter()
            .take(CHART_PRODUCTS)
            .map(|p| (p.product_name.clone(), p.stock_level.unwrap_or(0) as f64)),
    );
    view.sections
        .push(Section::untitled(Presentation::Table(to_table(&positions))));
    view.sections.push(Section::new(
        "Stock Levels for Top 20 Products",
        Presentation::BarChart(lowest),
    ));

    view
}
