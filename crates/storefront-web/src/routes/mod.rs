mod categories;
mod health;
mod products;
mod tags;

pub use categories::category_routes;
pub use health::health_routes;
pub use products::product_routes;
pub use tags::tag_routes;

/// A text field counts as provided when it is present and not blank
fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
