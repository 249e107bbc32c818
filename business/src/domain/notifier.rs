use crate::domain::product::model::Product;

/// Outbound port for pushing catalog snapshots to connected clients.
///
/// Publishing is fire-and-forget: a failed or dropped delivery must never
/// fail the mutation that triggered it. Each snapshot carries the full
/// current product list, so subscribers can always replace their state.
pub trait CatalogNotifier: Send + Sync {
    fn publish(&self, products: Vec<Product>);
}
