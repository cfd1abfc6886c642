use crate::catalog::Catalog;
use bistro_api_types::{CartLineItem, CatalogItem, ItemId};
use bistro_storage::{CART_KEY, KeyValueStore, StorageError, load_json, save_json};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("item {0} is not in the catalog")]
    UnknownItem(ItemId),
    #[error("item {0} is not in the cart")]
    NotInCart(ItemId),
    #[error("item {0} has a negative price")]
    InvalidPrice(ItemId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

type Listener = Box<dyn Fn(&[CartLineItem])>;

/// Single source of truth for the cart.
///
/// Every mutation reads the persisted snapshot, applies the change and goes
/// through [`CartStore::save`], which writes the snapshot back and notifies
/// subscribers. All operations take `&self`, so the store can be shared
/// through an `Rc` across async handlers.
pub struct CartStore<S> {
    store: S,
    catalog: Catalog,
    listeners: Vec<Listener>,
}

impl<S> CartStore<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self {
            store,
            catalog,
            listeners: Vec::new(),
        }
    }

    /// Register a callback run with the new line items after each mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&[CartLineItem]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current line items; a missing or corrupt snapshot reads as empty.
    pub fn get(&self) -> Vec<CartLineItem> {
        load_json(&self.store, CART_KEY).unwrap_or_default()
    }

    pub fn save(&self, items: &[CartLineItem]) -> Result<(), CartError> {
        save_json(&self.store, CART_KEY, items)?;
        self.notify(items);
        Ok(())
    }

    /// Add one unit of `item_id`.
    ///
    /// Item data comes from `item_data` when given, else from the catalog;
    /// with neither, nothing is written.
    pub fn add(&self, item_id: ItemId, item_data: Option<&CatalogItem>) -> Result<(), CartError> {
        let source = item_data
            .or_else(|| self.catalog.get(item_id))
            .ok_or(CartError::UnknownItem(item_id))?;
        if source.price.is_sign_negative() {
            return Err(CartError::InvalidPrice(item_id));
        }

        let mut items = self.get();
        match items.iter_mut().find(|item| item.id == item_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => items.push(CartLineItem {
                id: item_id,
                name: source.name.clone(),
                price: source.price,
                image: source.image.clone(),
                quantity: 1,
            }),
        }
        debug!(item = %item_id, "cart add");
        self.save(&items)
    }

    /// Change the quantity of `item_id` by `delta`, dropping the line at zero or below.
    pub fn update_quantity(&self, item_id: ItemId, delta: i64) -> Result<(), CartError> {
        let mut items = self.get();
        let index = items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(CartError::NotInCart(item_id))?;

        let quantity = i64::from(items[index].quantity).saturating_add(delta);
        if quantity <= 0 {
            items.remove(index);
        } else {
            items[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        debug!(item = %item_id, delta, "cart quantity update");
        self.save(&items)
    }

    pub fn remove(&self, item_id: ItemId) -> Result<(), CartError> {
        let mut items = self.get();
        let before = items.len();
        items.retain(|item| item.id != item_id);
        if items.len() == before {
            return Err(CartError::NotInCart(item_id));
        }
        self.save(&items)
    }

    /// Drop the persisted snapshot entirely (after a successful checkout).
    pub fn clear(&self) -> Result<(), CartError> {
        self.store.remove_item(CART_KEY)?;
        self.notify(&[]);
        Ok(())
    }

    /// Sum of line totals, saturating at `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.get()
            .iter()
            .fold(Decimal::ZERO, |total, item| total.saturating_add(item.line_total()))
    }

    pub fn total_quantity(&self) -> u32 {
        self.get()
            .iter()
            .fold(0_u32, |total, item| total.saturating_add(item.quantity))
    }

    fn notify(&self, items: &[CartLineItem]) {
        for listener in &self.listeners {
            listener(items);
        }
    }
}
