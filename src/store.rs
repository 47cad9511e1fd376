//! Global Application State Store
//!
//! Cart and wishlist containers backed by Leptos reactive_stores for
//! fine-grained reactivity. The container logic lives on plain structs
//! so it can be exercised without a reactive runtime; the `cart_*` and
//! `wishlist_*` helpers mutate through the store and write the persisted
//! slices after every mutation.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::{CartItem, WishlistItem};
use crate::persistence;

/// Cart container: ordered items (unique by id) plus sidebar visibility
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub is_open: bool,
}

impl CartState {
    /// Find-or-insert: an existing entry gets its quantity bumped,
    /// otherwise the item is appended with quantity 1.
    pub fn add_item(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity += 1,
            None => self.items.push(CartItem { quantity: 1, ..item }),
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Quantities below 1 are rejected; removal is the only way to drop
    /// an entry entirely.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * i.quantity as f64)
            .sum()
    }
}

/// Wishlist container: same shape as the cart, no quantities, plus an
/// atomic replace used after remote hydration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistState {
    #[serde(default)]
    pub items: Vec<WishlistItem>,
    #[serde(default)]
    pub is_open: bool,
}

impl WishlistState {
    pub fn replace_all(&mut self, items: Vec<WishlistItem>) {
        self.items = items;
    }

    pub fn add_item(&mut self, item: WishlistItem) {
        if !self.items.iter().any(|i| i.id == item.id) {
            self.items.push(item);
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub cart: CartState,
    pub wishlist: WishlistState,
}

impl AppState {
    /// Rehydrate from persisted storage; missing or corrupt slices fall
    /// back to empty defaults.
    pub fn hydrated() -> Self {
        let snapshot = persistence::load(&persistence::PersistConfig::default());
        Self {
            cart: snapshot.cart.unwrap_or_default(),
            wishlist: snapshot.wishlist.unwrap_or_default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Every mutation writes the whitelisted slices back to storage.

fn persist(store: &AppStore) {
    let cart = store.cart().read().clone();
    let wishlist = store.wishlist().read().clone();
    persistence::save(&cart, &wishlist, &persistence::PersistConfig::default());
}

pub fn cart_add(store: &AppStore, item: CartItem) {
    store.cart().write().add_item(item);
    persist(store);
}

pub fn cart_remove(store: &AppStore, id: &str) {
    store.cart().write().remove_item(id);
    persist(store);
}

pub fn cart_set_quantity(store: &AppStore, id: &str, quantity: u32) {
    store.cart().write().set_quantity(id, quantity);
    persist(store);
}

pub fn cart_clear(store: &AppStore) {
    store.cart().write().clear();
    persist(store);
}

pub fn cart_toggle(store: &AppStore) {
    store.cart().write().toggle();
    persist(store);
}

pub fn wishlist_set(store: &AppStore, items: Vec<WishlistItem>) {
    store.wishlist().write().replace_all(items);
    persist(store);
}

pub fn wishlist_add(store: &AppStore, item: WishlistItem) {
    store.wishlist().write().add_item(item);
    persist(store);
}

pub fn wishlist_remove(store: &AppStore, id: &str) {
    store.wishlist().write().remove_item(id);
    persist(store);
}

pub fn wishlist_clear(store: &AppStore) {
    store.wishlist().write().clear();
    persist(store);
}

pub fn wishlist_toggle(store: &AppStore) {
    store.wishlist().write().toggle();
    persist(store);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cart_item(id: &str, price: f64) -> CartItem {
        CartItem {
            id: id.to_string(),
            title: format!("Book {}", id),
            price,
            image: None,
            quantity: 1,
        }
    }

    fn make_wish_item(id: &str) -> WishlistItem {
        WishlistItem {
            id: id.to_string(),
            title: Some(format!("Book {}", id)),
            author: None,
            image: None,
        }
    }

    #[test]
    fn repeated_add_increments_a_single_entry() {
        let mut cart = CartState::default();
        for _ in 0..5 {
            cart.add_item(make_cart_item("b1", 10.0));
        }
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn re_adding_after_removal_starts_fresh() {
        let mut cart = CartState::default();
        cart.add_item(make_cart_item("b1", 10.0));
        cart.add_item(make_cart_item("b1", 10.0));
        cart.remove_item("b1");
        cart.add_item(make_cart_item("b1", 10.0));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn quantity_below_one_is_rejected() {
        let mut cart = CartState::default();
        cart.add_item(make_cart_item("b1", 10.0));
        cart.add_item(make_cart_item("b1", 10.0));
        cart.set_quantity("b1", 0);
        assert_eq!(cart.items[0].quantity, 2);
        cart.set_quantity("b1", 7);
        assert_eq!(cart.items[0].quantity, 7);
    }

    #[test]
    fn set_quantity_on_missing_id_is_a_noop() {
        let mut cart = CartState::default();
        cart.add_item(make_cart_item("b1", 10.0));
        cart.set_quantity("nope", 3);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn clear_empties_items_but_not_visibility() {
        let mut cart = CartState::default();
        cart.toggle();
        cart.add_item(make_cart_item("b1", 10.0));
        cart.clear();
        assert!(cart.items.is_empty());
        assert!(cart.is_open);
    }

    #[test]
    fn subtotal_weights_by_quantity() {
        let mut cart = CartState::default();
        cart.add_item(make_cart_item("b1", 10.0));
        cart.add_item(make_cart_item("b1", 10.0));
        cart.add_item(make_cart_item("b2", 2.5));
        assert_eq!(cart.subtotal(), 22.5);
    }

    #[test]
    fn cart_scenario_from_empty_to_empty() {
        let mut cart = CartState::default();
        cart.add_item(make_cart_item("b1", 10.0));
        assert_eq!(cart.items[0].quantity, 1);
        cart.add_item(make_cart_item("b1", 10.0));
        assert_eq!(cart.items[0].quantity, 2);
        cart.set_quantity("b1", 0);
        assert_eq!(cart.items[0].quantity, 2);
        cart.remove_item("b1");
        assert!(cart.items.is_empty());
    }

    #[test]
    fn wishlist_add_is_find_or_insert() {
        let mut wishlist = WishlistState::default();
        wishlist.add_item(make_wish_item("a"));
        wishlist.add_item(make_wish_item("a"));
        assert_eq!(wishlist.items.len(), 1);
    }

    #[test]
    fn wishlist_remove_matches_normalized_underscore_id() {
        use crate::models::RawWishlistRecord;

        // Record arrives from the backend keyed by `_id`; the serde
        // boundary normalizes it, so removal by the canonical id works.
        let raw: RawWishlistRecord = serde_json::from_str(r#"{"_id":"a"}"#).unwrap();
        let mut wishlist = WishlistState::default();
        wishlist.add_item(WishlistItem::from_remote(raw).unwrap());
        wishlist.remove_item("a");
        assert!(wishlist.items.is_empty());
    }

    #[test]
    fn replace_all_overwrites_previous_items() {
        let mut wishlist = WishlistState::default();
        wishlist.add_item(make_wish_item("a"));
        wishlist.replace_all(vec![make_wish_item("b"), make_wish_item("c")]);
        assert_eq!(
            wishlist.items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c"]
        );
    }
}
