use contracts::dashboards::d102_product_sales::ProductSalesResponse;
use contracts::shared::dashboard::{Presentation, Section, TabView};
use sea_orm::DatabaseConnection;

use super::repository::{self, ProductSales};
use crate::shared::charts::{bar_chart, pie_chart};
use crate::shared::filters::FilterSet;
use crate::shared::warehouse::{to_table, QueryRunner};

/// Top products and revenue split for the selected categories.
///
/// `selection = None` selects every category.
pub async fn get_product_sales(
    db: &DatabaseConnection,
    selection: Option<Vec<String>>,
) -> ProductSalesResponse {
    let mut runner = QueryRunner::new(db);
    let mut view = render(&mut runner, selection).await;
    view.errors = runner.into_banners();

    tracing::info!(
        "D102 Product Sales: {} sections, {} errors",
        view.sections.len(),
        view.errors.len()
    );
    view
}

async fn render(runner: &mut QueryRunner<'_>, selection: Option<Vec<String>>) -> TabView {
    let mut view = TabView::new("Product Sales Analysis");

    let categories = repository::get_categories(runner).await;
    let selected = FilterSet::resolve(&categories, selection);
    view.filter = Some(selected.state("Select Categories", &categories));

    if selected.is_empty() {
        view.sections
            .push(Section::info("Please select at least one category."));
        return view;
    }

    let products = repository::get_product_sales(runner, &selected).await;
    if products.is_empty() {
        view.sections
            .push(Section::info("No sales data for selected categories."));
        return view;
    }

    view.sections.extend(product_sections(&products));
    view
}

fn product_sections(products: &[ProductSales]) -> Vec<Section> {
    let top = bar_chart(
        "REVENUE",
        products
            .iter()
            .map(|p| (p.product_name.clone(), p.revenue.unwrap_or(0.0))),
    );
    // Split over the fetched top products, not the whole category
    let by_category = pie_chart(
        "REVENUE",
        products.iter().filter_map(|p| {
            p.category
                .clone()
                .map(|c| (c, p.revenue.unwrap_or(0.0)))
        }),
    );

    vec![
        Section::untitled(Presentation::Table(to_table(products))),
        Section::new("Top Products by Revenue", Presentation::BarChart(top)),
        Section::new(
            "Revenue Distribution by Category",
            Presentation::PieChart(by_category),
        ),
    ]
}
