use espresso_bot::interactions::ids::{
    self, parse_id_suffix, parse_item_qty, parse_pickup_slot, PickupSlot,
};

#[test]
fn parse_item_qty_ok() {
    let id = format!("{}7_3", ids::SHOP_ITEM_PREFIX);
    let (item, qty) = parse_item_qty(&id, ids::SHOP_ITEM_PREFIX).expect("should parse");
    assert_eq!(item, 7);
    assert_eq!(qty, 3);
}

#[test]
fn parse_item_qty_rejects_garbage() {
    assert!(parse_item_qty("shop_item_", ids::SHOP_ITEM_PREFIX).is_none());
    assert!(parse_item_qty("shop_item_7", ids::SHOP_ITEM_PREFIX).is_none());
    assert!(parse_item_qty("shop_item_7_", ids::SHOP_ITEM_PREFIX).is_none());
    assert!(parse_item_qty("shop_item_x_3", ids::SHOP_ITEM_PREFIX).is_none());
    assert!(parse_item_qty("shop_item_7_x", ids::SHOP_ITEM_PREFIX).is_none());
    // wrong prefix
    assert!(parse_item_qty("shop_inc_7_3", ids::SHOP_ITEM_PREFIX).is_none());
}

#[test]
fn parse_item_qty_rejects_nonpositive_quantity() {
    assert!(parse_item_qty("shop_add_7_0", ids::SHOP_ADD_PREFIX).is_none());
    assert!(parse_item_qty("shop_add_7_-2", ids::SHOP_ADD_PREFIX).is_none());
}

#[test]
fn parse_id_suffix_ok_and_bad() {
    let id = format!("{}42", ids::ADMIN_READY_PREFIX);
    assert_eq!(parse_id_suffix(&id, ids::ADMIN_READY_PREFIX), Some(42));
    assert!(parse_id_suffix("admin_ready_", ids::ADMIN_READY_PREFIX).is_none());
    assert!(parse_id_suffix("admin_ready_x", ids::ADMIN_READY_PREFIX).is_none());
    assert!(parse_id_suffix("catalog_retire_42", ids::ADMIN_READY_PREFIX).is_none());
}

#[test]
fn pickup_slot_keys_round_trip() {
    for slot in PickupSlot::ALL {
        let id = format!("{}{}", ids::CART_TIME_PREFIX, slot.key());
        assert_eq!(parse_pickup_slot(&id), Some(slot));
    }
}

#[test]
fn pickup_slot_rejects_unknown_keys() {
    assert!(parse_pickup_slot("cart_time_90").is_none());
    assert!(parse_pickup_slot("cart_time_").is_none());
    assert!(parse_pickup_slot("cart_checkout").is_none());
}

#[test]
fn pickup_slot_labels_are_distinct() {
    let mut labels: Vec<&str> = PickupSlot::ALL.iter().map(|s| s.label()).collect();
    labels.sort();
    for w in labels.windows(2) {
        assert_ne!(w[0], w[1], "duplicate pickup label: {}", w[0]);
    }
}

#[test]
fn all_custom_ids_route_to_their_family() {
    // handler.rs routes on the segment before the first underscore.
    for (id, family) in [
        (ids::NAV_HOME, "nav"),
        (ids::NAV_ORDERS, "nav"),
        (ids::NAV_ABOUT, "nav"),
        (ids::SHOP_OPEN, "shop"),
        (ids::SHOP_QTY_NOOP, "shop"),
        (ids::CART_VIEW, "cart"),
        (ids::CART_CLEAR, "cart"),
        (ids::CART_CHECKOUT, "cart"),
        (ids::ADMIN_PANEL, "admin"),
        (ids::ADMIN_STATS, "admin"),
        (ids::ADMIN_ORDERS, "admin"),
        (ids::CATALOG_HOME, "catalog"),
        (ids::CATALOG_ADD, "catalog"),
        (ids::CATALOG_LIST, "catalog"),
        (ids::CATALOG_CANCEL, "catalog"),
        (ids::ROSTER_HOME, "roster"),
        (ids::ROSTER_ADD, "roster"),
        (ids::ROSTER_REMOVE, "roster"),
        (ids::ROSTER_CANCEL, "roster"),
    ] {
        assert_eq!(id.split('_').next(), Some(family), "bad family for `{id}`");
    }
    for (prefix, family) in [
        (ids::SHOP_ITEM_PREFIX, "shop"),
        (ids::SHOP_INC_PREFIX, "shop"),
        (ids::SHOP_DEC_PREFIX, "shop"),
        (ids::SHOP_ADD_PREFIX, "shop"),
        (ids::CART_TIME_PREFIX, "cart"),
        (ids::ADMIN_READY_PREFIX, "admin"),
        (ids::CATALOG_RETIRE_PREFIX, "catalog"),
        (ids::ROSTER_DROP_PREFIX, "roster"),
    ] {
        assert_eq!(prefix.split('_').next(), Some(family), "bad family for `{prefix}`");
    }
}
