//! Catalog statistics helpers

use super::model::Product;

/// Number of cheapest products returned when no count is requested.
pub const DEFAULT_TOP_CHEAPEST: usize = 3;

/// The `top` cheapest available products, ascending by price.
///
/// Ties keep the catalog's original relative order.
pub fn top_cheapest_available(products: &[Product], top: usize) -> Vec<Product> {
    let mut available: Vec<&Product> = products.iter().filter(|p| p.available).collect();
    available.sort_by(|a, b| a.price.total_cmp(&b.price));
    available.into_iter().take(top).cloned().collect()
}

/// Mean price of available products, rounded to 2 decimal places.
///
/// Returns `0.0` when no product is available.
pub fn average_price_available(products: &[Product]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for p in products.iter().filter(|p| p.available) {
        sum += p.price;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 100.0).round() / 100.0
}
