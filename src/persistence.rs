//! Local Storage Persistence
//!
//! Serializes a whitelisted subset of the store to a single namespaced
//! localStorage key on every mutation, and reads it back once at
//! startup. Absent, unreadable, or unparseable payloads fall back to the
//! empty default state; persistence never produces a fatal error.

use serde::{Deserialize, Serialize};

use crate::store::{CartState, WishlistState};

/// Slice names understood by the adapter
pub const CART_SLICE: &str = "cart";
pub const WISHLIST_SLICE: &str = "wishlist";

/// Storage namespace plus the slices that survive across sessions.
///
/// Whether the wishlist should persist is a product decision; the
/// default keeps only the cart, and flipping it is a whitelist edit.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistConfig {
    pub key: &'static str,
    pub whitelist: &'static [&'static str],
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            key: "bookvault:root",
            whitelist: &[CART_SLICE],
        }
    }
}

impl PersistConfig {
    fn persists(&self, slice: &str) -> bool {
        self.whitelist.contains(&slice)
    }
}

/// Persisted payload: whitelisted slices only, absent slices omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<WishlistState>,
}

/// Serialize the whitelisted slices to the stored JSON document
pub fn encode(cart: &CartState, wishlist: &WishlistState, config: &PersistConfig) -> String {
    let snapshot = Snapshot {
        cart: config.persists(CART_SLICE).then(|| cart.clone()),
        wishlist: config.persists(WISHLIST_SLICE).then(|| wishlist.clone()),
    };
    // Snapshot contains only maps, vecs and scalars; serialization over
    // those shapes does not fail.
    serde_json::to_string(&snapshot).unwrap_or_default()
}

/// Parse a stored payload. Corrupt or legacy payloads decode to the
/// empty snapshot instead of erroring.
pub fn decode(raw: &str) -> Snapshot {
    serde_json::from_str(raw).unwrap_or_default()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Write the whitelisted slices to localStorage. Storage failures
/// (quota, disabled storage) are logged and swallowed.
pub fn save(cart: &CartState, wishlist: &WishlistState, config: &PersistConfig) {
    let Some(storage) = storage() else { return };
    let payload = encode(cart, wishlist, config);
    if storage.set_item(config.key, &payload).is_err() {
        web_sys::console::warn_1(&"[persistence] write failed, state not saved".into());
    }
}

/// Read the persisted snapshot once at startup
pub fn load(config: &PersistConfig) -> Snapshot {
    let Some(storage) = storage() else {
        return Snapshot::default();
    };
    match storage.get_item(config.key) {
        Ok(Some(raw)) => decode(&raw),
        _ => Snapshot::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CartItem;

    fn cart_with(id: &str, quantity: u32) -> CartState {
        CartState {
            items: vec![CartItem {
                id: id.to_string(),
                title: "Book".to_string(),
                price: 10.0,
                image: None,
                quantity,
            }],
            is_open: false,
        }
    }

    const BOTH: PersistConfig = PersistConfig {
        key: "bookvault:test",
        whitelist: &[CART_SLICE, WISHLIST_SLICE],
    };

    #[test]
    fn default_whitelist_drops_the_wishlist_slice() {
        let mut wishlist = WishlistState::default();
        wishlist.add_item(crate::models::WishlistItem {
            id: "w1".to_string(),
            title: None,
            author: None,
            image: None,
        });
        let raw = encode(&cart_with("b1", 2), &wishlist, &PersistConfig::default());
        let snapshot = decode(&raw);
        assert_eq!(snapshot.cart.unwrap().items[0].quantity, 2);
        assert!(snapshot.wishlist.is_none());
    }

    #[test]
    fn widened_whitelist_keeps_both_slices() {
        let mut wishlist = WishlistState::default();
        wishlist.add_item(crate::models::WishlistItem {
            id: "w1".to_string(),
            title: None,
            author: None,
            image: None,
        });
        let snapshot = decode(&encode(&cart_with("b1", 1), &wishlist, &BOTH));
        assert_eq!(snapshot.wishlist.unwrap().items[0].id, "w1");
    }

    #[test]
    fn cleared_cart_reads_back_empty() {
        let mut cart = cart_with("b1", 3);
        cart.clear();
        let snapshot = decode(&encode(&cart, &WishlistState::default(), &PersistConfig::default()));
        assert!(snapshot.cart.unwrap().items.is_empty());
    }

    #[test]
    fn corrupt_payload_falls_back_to_defaults() {
        assert_eq!(decode("not json at all"), Snapshot::default());
        assert_eq!(decode(r#"{"cart": 42}"#), Snapshot::default());
        assert_eq!(decode(""), Snapshot::default());
    }

    #[test]
    fn missing_slices_decode_as_none() {
        let snapshot = decode("{}");
        assert!(snapshot.cart.is_none());
        assert!(snapshot.wishlist.is_none());
    }

    #[test]
    fn stored_layout_uses_camel_case_keys() {
        let mut cart = cart_with("b1", 1);
        cart.toggle();
        let raw = encode(&cart, &WishlistState::default(), &PersistConfig::default());
        assert!(raw.contains(r#""isOpen":true"#));
        assert!(raw.contains(r#""items""#));
    }

    #[test]
    fn roundtrip_preserves_visibility_flag() {
        let mut cart = cart_with("b1", 1);
        cart.toggle();
        let snapshot = decode(&encode(&cart, &WishlistState::default(), &PersistConfig::default()));
        assert!(snapshot.cart.unwrap().is_open);
    }
}
