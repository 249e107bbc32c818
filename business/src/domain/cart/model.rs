use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;

/// A line item: weak reference to a product plus a quantity (always >= 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// Shopping cart aggregate. Holds at most one line item per product id;
/// duplicates merge by summing quantities.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_repository(
        id: Uuid,
        items: Vec<CartItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            items,
            created_at,
            updated_at,
        }
    }

    /// Adds one unit of `product_id`: increments the existing line item or
    /// appends a new one with quantity 1.
    pub fn add(&mut self, product_id: Uuid) {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product_id,
                quantity: 1,
            }),
        }
        self.touch();
    }

    /// Removes the line item for `product_id`. Returns false when no such
    /// line item exists.
    pub fn remove(&mut self, product_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        let removed = self.items.len() < before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Sets (does not increment) the quantity for `product_id`, clamping
    /// values below 1 up to 1. Returns false when no such line item exists.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: u32) -> bool {
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity.max(1);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Wholesale replacement of the line-item list. Duplicate product ids in
    /// the input merge by summing; quantities below 1 were already coerced
    /// by [`CartItem::sanitized`].
    pub fn replace_items(&mut self, items: Vec<CartItem>) {
        self.items.clear();
        for incoming in items {
            match self
                .items
                .iter_mut()
                .find(|i| i.product_id == incoming.product_id)
            {
                Some(existing) => existing.quantity += incoming.quantity,
                None => self.items.push(incoming),
            }
        }
        self.touch();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl CartItem {
    /// Builds a line item from untrusted input, coercing quantities below 1
    /// (or absent) to 1 instead of rejecting the whole request.
    pub fn sanitized(product_id: Uuid, quantity: Option<i64>) -> Self {
        let quantity = match quantity {
            Some(q) if q >= 1 => q.min(u32::MAX as i64) as u32,
            _ => 1,
        };
        Self {
            product_id,
            quantity,
        }
    }
}

/// Read-side cart with every product reference resolved against the current
/// catalog. A reference to a deleted product resolves to `None` rather than
/// failing the read.
#[derive(Debug, Clone)]
pub struct ResolvedCart {
    pub id: Uuid,
    pub items: Vec<ResolvedCartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ResolvedCartItem {
    pub product_id: Uuid,
    pub product: Option<Product>,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_merge_repeated_adds_into_one_line_item() {
        let mut cart = Cart::new();
        let pid = Uuid::new_v4();
        cart.add(pid);
        cart.add(pid);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn should_keep_distinct_products_as_separate_items() {
        let mut cart = Cart::new();
        cart.add(Uuid::new_v4());
        cart.add(Uuid::new_v4());
        assert_eq!(cart.items.len(), 2);
    }

    #[test]
    fn should_report_missing_line_item_on_remove() {
        let mut cart = Cart::new();
        let pid = Uuid::new_v4();
        cart.add(pid);
        assert!(cart.remove(pid));
        assert!(cart.items.is_empty());
        assert!(!cart.remove(pid));
    }

    #[test]
    fn should_clamp_quantity_below_one() {
        let mut cart = Cart::new();
        let pid = Uuid::new_v4();
        cart.add(pid);
        assert!(cart.set_quantity(pid, 0));
        assert_eq!(cart.items[0].quantity, 1);
        assert!(cart.set_quantity(pid, 7));
        assert_eq!(cart.items[0].quantity, 7);
    }

    #[test]
    fn should_merge_duplicate_ids_on_replace() {
        let mut cart = Cart::new();
        let pid = Uuid::new_v4();
        cart.replace_items(vec![
            CartItem {
                product_id: pid,
                quantity: 2,
            },
            CartItem {
                product_id: pid,
                quantity: 3,
            },
        ]);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn should_coerce_bad_quantities_to_one() {
        let pid = Uuid::new_v4();
        assert_eq!(CartItem::sanitized(pid, Some(0)).quantity, 1);
        assert_eq!(CartItem::sanitized(pid, Some(-4)).quantity, 1);
        assert_eq!(CartItem::sanitized(pid, None).quantity, 1);
        assert_eq!(CartItem::sanitized(pid, Some(3)).quantity, 3);
    }

    #[test]
    fn should_persist_cart_through_clear() {
        let mut cart = Cart::new();
        cart.add(Uuid::new_v4());
        cart.clear();
        assert!(cart.items.is_empty());
    }
}
