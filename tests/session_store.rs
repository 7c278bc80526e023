//! Behavior of the in-process session store shared by the handlers.

use espresso_bot::session::{PendingInput, SessionStore};

#[tokio::test]
async fn carts_are_isolated_per_user() {
    let store = SessionStore::default();
    store.with(1, |s| s.add_to_cart(10, 2)).await;
    store.with(2, |s| s.add_to_cart(10, 7)).await;

    let cart1 = store.cart(1).await;
    let cart2 = store.cart(2).await;
    assert_eq!(cart1.len(), 1);
    assert_eq!(cart1[0].quantity, 2);
    assert_eq!(cart2[0].quantity, 7);
}

#[tokio::test]
async fn cart_of_unknown_user_is_empty() {
    let store = SessionStore::default();
    assert!(store.cart(999).await.is_empty());
    // Reading must not create a session that pending() would then see armed.
    assert_eq!(store.pending(999).await, PendingInput::Idle);
}

#[tokio::test]
async fn pending_flag_is_single_valued() {
    let store = SessionStore::default();
    store
        .with(1, |s| s.pending = PendingInput::AwaitingItemName)
        .await;
    store
        .with(1, |s| s.pending = PendingInput::AwaitingAdminTarget)
        .await;
    // Arming a second flow replaces the first; at most one flow ever consumes
    // the next message.
    assert_eq!(store.pending(1).await, PendingInput::AwaitingAdminTarget);

    store.with(1, |s| s.cancel_pending()).await;
    assert_eq!(store.pending(1).await, PendingInput::Idle);
}

#[tokio::test]
async fn clearing_cart_leaves_pending_untouched() {
    let store = SessionStore::default();
    store
        .with(1, |s| {
            s.add_to_cart(3, 1);
            s.pending = PendingInput::AwaitingItemPrice {
                name: "Flat white".to_string(),
            };
        })
        .await;
    store.with(1, |s| s.clear_cart()).await;
    assert!(store.cart(1).await.is_empty());
    assert_eq!(
        store.pending(1).await,
        PendingInput::AwaitingItemPrice {
            name: "Flat white".to_string()
        }
    );
}

#[tokio::test]
async fn prune_keeps_fresh_sessions() {
    let store = SessionStore::default();
    store.with(1, |s| s.add_to_cart(1, 1)).await;
    store.prune_idle().await;
    assert_eq!(store.cart(1).await.len(), 1);
}
