use super::errors::CartError;
use crate::domain::shared::value_objects::ProductId;

/// Display attributes of a catalog product. Carried through the cart untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub title: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: ProductId,
    pub details: ProductDetails,
    pub amount: u32,
}

impl CartItem {
    /// A freshly added cart line always starts with a single unit.
    pub fn new(id: ProductId, details: ProductDetails) -> Self {
        Self {
            id,
            details,
            amount: 1,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ProductId, details: ProductDetails, amount: u32) -> Self {
        Self {
            id,
            details,
            amount,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.details.price * f64::from(self.amount)
    }
}

/// Units of a product currently available for purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub product_id: ProductId,
    pub amount: u32,
}

impl Stock {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }

    pub fn allows(&self, requested: u32) -> bool {
        requested <= self.amount
    }
}

/// Ordered cart lines, unique by product id.
///
/// Every transition returns a new `Cart`; the receiver is left as it was so
/// callers can persist the new value before swapping it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Units held for `id`, zero when the product is not in the cart.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |item| item.amount)
    }

    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Appends a new line with one unit, or increments the existing line.
    pub fn with_added(&self, id: ProductId, details: ProductDetails) -> Cart {
        if self.contains(id) {
            return self.incremented(id);
        }

        let mut items = self.items.clone();
        items.push(CartItem::new(id, details));
        Cart { items }
    }

    pub fn with_incremented(&self, id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(id) {
            return Err(CartError::NotFound);
        }
        Ok(self.incremented(id))
    }

    pub fn without(&self, id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(id) {
            return Err(CartError::NotFound);
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Ok(Cart { items })
    }

    pub fn with_amount(&self, id: ProductId, amount: u32) -> Result<Cart, CartError> {
        if amount == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if !self.contains(id) {
            return Err(CartError::NotFound);
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    CartItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Ok(Cart { items })
    }

    fn incremented(&self, id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    CartItem {
                        amount: item.amount.saturating_add(1),
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }
}

/// Converts a requested amount into a cart amount. Only non-positive values
/// are invalid; anything above `u32::MAX` saturates so that the stock check
/// still classifies it.
pub fn requested_amount(amount: i64) -> Result<u32, CartError> {
    if amount <= 0 {
        return Err(CartError::InvalidQuantity);
    }
    Ok(u32::try_from(amount).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sneakers() -> ProductDetails {
        ProductDetails {
            title: "Running Sneakers".to_string(),
            price: 179.9,
            image: "https://cdn.example.com/sneakers.jpg".to_string(),
        }
    }

    fn boots() -> ProductDetails {
        ProductDetails {
            title: "Leather Boots".to_string(),
            price: 250.0,
            image: "https://cdn.example.com/boots.jpg".to_string(),
        }
    }

    fn cart_with(items: &[(u64, u32)]) -> Cart {
        Cart::from_repository(
            items
                .iter()
                .map(|(id, amount)| CartItem::from_repository(ProductId::new(*id), sneakers(), *amount))
                .collect(),
        )
    }

    #[test]
    fn should_append_new_product_with_single_unit() {
        let cart = Cart::new();

        let updated = cart.with_added(ProductId::new(5), sneakers());

        assert_eq!(updated.len(), 1);
        let item = updated.get(ProductId::new(5)).unwrap();
        assert_eq!(item.amount, 1);
        assert_eq!(item.details.title, "Running Sneakers");
    }

    #[test]
    fn should_increment_when_adding_existing_product() {
        let cart = cart_with(&[(1, 2)]);

        let updated = cart.with_added(ProductId::new(1), boots());

        assert_eq!(updated.len(), 1);
        assert_eq!(updated.amount_of(ProductId::new(1)), 3);
        assert_eq!(updated.items()[0].details.title, "Running Sneakers");
    }

    #[test]
    fn should_leave_original_cart_untouched() {
        let cart = cart_with(&[(1, 2)]);

        let _ = cart.with_incremented(ProductId::new(1)).unwrap();
        let _ = cart.with_amount(ProductId::new(1), 9).unwrap();
        let _ = cart.without(ProductId::new(1)).unwrap();

        assert_eq!(cart, cart_with(&[(1, 2)]));
    }

    #[test]
    fn should_keep_insertion_order() {
        let cart = Cart::new()
            .with_added(ProductId::new(3), sneakers())
            .with_added(ProductId::new(1), boots())
            .with_added(ProductId::new(2), sneakers());

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn should_remove_only_the_target_entry() {
        let cart = cart_with(&[(1, 1), (2, 3), (3, 2)]);

        let updated = cart.without(ProductId::new(2)).unwrap();

        assert_eq!(updated, cart_with(&[(1, 1), (3, 2)]));
    }

    #[test]
    fn should_reject_removing_absent_product() {
        let cart = cart_with(&[(1, 1)]);

        let result = cart.without(ProductId::new(99));

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[test]
    fn should_reject_incrementing_absent_product() {
        let result = Cart::new().with_incremented(ProductId::new(1));

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[test]
    fn should_set_exact_amount() {
        let cart = cart_with(&[(1, 1), (2, 1)]);

        let updated = cart.with_amount(ProductId::new(2), 4).unwrap();

        assert_eq!(updated.amount_of(ProductId::new(1)), 1);
        assert_eq!(updated.amount_of(ProductId::new(2)), 4);
    }

    #[test]
    fn should_reject_zero_amount() {
        let cart = cart_with(&[(1, 1)]);

        let result = cart.with_amount(ProductId::new(1), 0);

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[test]
    fn should_report_zero_amount_for_absent_product() {
        assert_eq!(Cart::new().amount_of(ProductId::new(8)), 0);
    }

    #[test]
    fn should_compute_totals() {
        let cart = Cart::from_repository(vec![
            CartItem::from_repository(ProductId::new(1), sneakers(), 2),
            CartItem::from_repository(ProductId::new(2), boots(), 1),
        ]);

        assert_eq!(cart.total_units(), 3);
        assert!((cart.total() - 609.8).abs() < 1e-9);
    }

    #[test]
    fn should_accept_positive_requested_amount() {
        assert_eq!(requested_amount(3).unwrap(), 3);
    }

    #[test]
    fn should_reject_non_positive_requested_amount() {
        assert!(matches!(requested_amount(0), Err(CartError::InvalidQuantity)));
        assert!(matches!(requested_amount(-2), Err(CartError::InvalidQuantity)));
        assert!(matches!(requested_amount(i64::MIN), Err(CartError::InvalidQuantity)));
    }

    #[test]
    fn should_saturate_requested_amount_above_u32_range() {
        assert_eq!(requested_amount(i64::from(u32::MAX)).unwrap(), u32::MAX);
        assert_eq!(requested_amount(i64::from(u32::MAX) + 1).unwrap(), u32::MAX);
        assert_eq!(requested_amount(5_000_000_000).unwrap(), u32::MAX);
    }

    #[test]
    fn should_allow_amounts_up_to_stock() {
        let stock = Stock::new(ProductId::new(1), 2);

        assert!(stock.allows(2));
        assert!(!stock.allows(3));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        Remove(u64),
        Set(u64, u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u64..5).prop_map(Op::Add),
            (1u64..5).prop_map(Op::Remove),
            ((1u64..5), (0u32..6)).prop_map(|(id, amount)| Op::Set(id, amount)),
        ]
    }

    proptest! {
        #[test]
        fn should_keep_entries_unique_and_positive(ops in prop::collection::vec(op(), 0..40)) {
            let mut cart = Cart::new();
            for op in ops {
                let next = match op {
                    Op::Add(id) => Ok(cart.with_added(ProductId::new(id), sneakers())),
                    Op::Remove(id) => cart.without(ProductId::new(id)),
                    Op::Set(id, amount) => cart.with_amount(ProductId::new(id), amount),
                };
                if let Ok(next) = next {
                    cart = next;
                }
            }

            let mut ids: Vec<u64> = cart.items().iter().map(|i| i.id.value()).collect();
            let len = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), len);
            prop_assert!(cart.items().iter().all(|i| i.amount >= 1));
        }
    }
}
