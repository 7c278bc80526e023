//! Per-conversation ephemeral state: the cart and the pending text-input flag.
//!
//! Nothing here is durable. Sessions live in-process, keyed by Discord user
//! id, and are pruned after a fixed idle period so an abandoned flow does not
//! linger for the lifetime of the process.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Sessions untouched for this long are dropped on the next gateway event.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub item_id: i32,
    pub quantity: i64,
}

/// What free-text input the conversation is currently waiting for.
///
/// A single tagged value per session, so a stray message can never be
/// consumed by the wrong flow: at most one flow is ever armed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingInput {
    #[default]
    Idle,
    /// Catalog add, step one: the next message is the new item's name.
    AwaitingItemName,
    /// Catalog add, step two: the next message is the price for `name`.
    AwaitingItemPrice { name: String },
    /// Roster add: the next message names the user to promote.
    AwaitingAdminTarget,
}

#[derive(Debug)]
pub struct Session {
    pub cart: Vec<CartEntry>,
    pub pending: PendingInput,
    last_active: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            cart: Vec::new(),
            pending: PendingInput::Idle,
            last_active: Instant::now(),
        }
    }
}

impl Session {
    /// Merges an item into the cart; a repeated item id sums quantities
    /// rather than producing a second entry.
    pub fn add_to_cart(&mut self, item_id: i32, quantity: i64) {
        if let Some(entry) = self.cart.iter_mut().find(|e| e.item_id == item_id) {
            entry.quantity += quantity;
        } else {
            self.cart.push(CartEntry { item_id, quantity });
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Returns to idle without side effects (the Cancel button from any
    /// text-input flow).
    pub fn cancel_pending(&mut self) {
        self.pending = PendingInput::Idle;
    }
}

/// In-process store of all live sessions.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<u64, Session>>,
}

impl SessionStore {
    /// Runs `f` against the user's session, creating it on first touch and
    /// refreshing its idle clock.
    pub async fn with<R>(&self, user_id: u64, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut map = self.inner.write().await;
        let session = map.entry(user_id).or_default();
        session.last_active = Instant::now();
        f(session)
    }

    /// Snapshot of the user's cart (empty when no session exists).
    pub async fn cart(&self, user_id: u64) -> Vec<CartEntry> {
        let map = self.inner.read().await;
        map.get(&user_id).map(|s| s.cart.clone()).unwrap_or_default()
    }

    /// The user's pending-input flag without creating a session.
    pub async fn pending(&self, user_id: u64) -> PendingInput {
        let map = self.inner.read().await;
        map.get(&user_id).map(|s| s.pending.clone()).unwrap_or_default()
    }

    /// Drops sessions idle past [`SESSION_IDLE_TTL`]. Called opportunistically
    /// from the gateway path; cheap enough to run on every message.
    pub async fn prune_idle(&self) {
        let mut map = self.inner.write().await;
        map.retain(|_, s| s.last_active.elapsed() < SESSION_IDLE_TTL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_merges_repeated_items() {
        let mut s = Session::default();
        s.add_to_cart(1, 2);
        s.add_to_cart(2, 1);
        s.add_to_cart(1, 3);
        assert_eq!(s.cart.len(), 2);
        assert_eq!(s.cart[0], CartEntry { item_id: 1, quantity: 5 });
        assert_eq!(s.cart[1], CartEntry { item_id: 2, quantity: 1 });
    }

    #[test]
    fn cancel_returns_to_idle_without_touching_cart() {
        let mut s = Session::default();
        s.add_to_cart(7, 1);
        s.pending = PendingInput::AwaitingItemPrice { name: "Latte".into() };
        s.cancel_pending();
        assert_eq!(s.pending, PendingInput::Idle);
        assert_eq!(s.cart.len(), 1);
    }
}
