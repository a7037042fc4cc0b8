use contracts::dashboards::d106_search::SearchResponse;
use contracts::shared::dashboard::{Presentation, Section, TabView};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::warehouse::{to_table, QueryRunner};

/// Product name search, plus an order lookup for numeric terms
pub async fn search(db: &DatabaseConnection, term: &str) -> SearchResponse {
    let mut runner = QueryRunner::new(db);
    let mut view = render(&mut runner, term).await;
    view.errors = runner.into_banners();

    tracing::info!(
        "D106 Search: {:?} -> {} sections, {} errors",
        term,
        view.sections.len(),
        view.errors.len()
    );
    view
}

async fn render(runner: &mut QueryRunner<'_>, term: &str) -> TabView {
    let mut view = TabView::new("Search Products & Orders");
    if term.is_empty() {
        return view;
    }

    let products = repository::find_products(runner, term).await;
    view.sections.push(Section::new(
        "Matching Products",
        if products.is_empty() {
            Presentation::Info("No matching products found.".to_string())
        } else {
            Presentation::Table(to_table(&products))
        },
    ));

    if !repository::is_numeric(term) {
        return view;
    }

    // A digit string too long for an order id cannot match any order
    let orders = match repository::order_lookup_query(term) {
        Some(query) => repository::find_order(runner, &query).await,
        None => Vec::new(),
    };
    view.sections.push(Section::new(
        "Order Details",
        if orders.is_empty() {
            Presentation::Info("No order found with that ID.".to_string())
        } else {
            Presentation::Table(to_table(&orders))
        },
    ));

    view
}
