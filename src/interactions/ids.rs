//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and enables future refactors. The first
//! `_`-separated segment is the routing family used by `handler.rs`.

// Global navigation
pub const NAV_HOME: &str = "nav_home";
pub const NAV_ORDERS: &str = "nav_orders";
pub const NAV_ABOUT: &str = "nav_about";

// Customer shop browsing
pub const SHOP_OPEN: &str = "shop_open";
pub const SHOP_ITEM_PREFIX: &str = "shop_item_"; // followed by item id + _ + quantity
pub const SHOP_INC_PREFIX: &str = "shop_inc_"; // followed by item id + _ + quantity
pub const SHOP_DEC_PREFIX: &str = "shop_dec_"; // followed by item id + _ + quantity
pub const SHOP_ADD_PREFIX: &str = "shop_add_"; // followed by item id + _ + quantity
pub const SHOP_QTY_NOOP: &str = "shop_qty"; // the disabled quantity label between - and +

// Cart and checkout
pub const CART_VIEW: &str = "cart_view";
pub const CART_CLEAR: &str = "cart_clear";
pub const CART_CHECKOUT: &str = "cart_checkout";
pub const CART_TIME_PREFIX: &str = "cart_time_"; // followed by a pickup slot key

// Admin panel
pub const ADMIN_PANEL: &str = "admin_panel";
pub const ADMIN_STATS: &str = "admin_stats";
pub const ADMIN_ORDERS: &str = "admin_orders";
pub const ADMIN_READY_PREFIX: &str = "admin_ready_"; // followed by order id

// Catalog management
pub const CATALOG_HOME: &str = "catalog_home";
pub const CATALOG_ADD: &str = "catalog_add";
pub const CATALOG_LIST: &str = "catalog_list";
pub const CATALOG_RETIRE_PREFIX: &str = "catalog_retire_"; // followed by item id
pub const CATALOG_CANCEL: &str = "catalog_cancel";

// Admin roster management
pub const ROSTER_HOME: &str = "roster_home";
pub const ROSTER_ADD: &str = "roster_add";
pub const ROSTER_REMOVE: &str = "roster_remove";
pub const ROSTER_DROP_PREFIX: &str = "roster_drop_"; // followed by a discord id
pub const ROSTER_CANCEL: &str = "roster_cancel";

/// Parse `<prefix><item_id>_<quantity>` into (item id, quantity).
/// Quantities below 1 never round-trip through valid buttons and are rejected.
pub fn parse_item_qty(id: &str, prefix: &str) -> Option<(i32, i64)> {
    let rest = id.strip_prefix(prefix)?;
    let (item_str, qty_str) = rest.split_once('_')?;
    let item_id = item_str.parse::<i32>().ok()?;
    let quantity = qty_str.parse::<i64>().ok()?;
    if quantity < 1 {
        return None;
    }
    Some((item_id, quantity))
}

/// Parse `<prefix><n>` into a numeric suffix (order ids, item ids).
pub fn parse_id_suffix(id: &str, prefix: &str) -> Option<i64> {
    id.strip_prefix(prefix)?.parse::<i64>().ok()
}

/// The fixed pickup time slots offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupSlot {
    Asap,
    Min15,
    Min30,
    Min45,
    Min60,
}

impl PickupSlot {
    pub const ALL: [PickupSlot; 5] = [
        PickupSlot::Asap,
        PickupSlot::Min15,
        PickupSlot::Min30,
        PickupSlot::Min45,
        PickupSlot::Min60,
    ];

    /// Key stored in the custom id (`cart_time_<key>`).
    pub fn key(&self) -> &'static str {
        match self {
            PickupSlot::Asap => "asap",
            PickupSlot::Min15 => "15",
            PickupSlot::Min30 => "30",
            PickupSlot::Min45 => "45",
            PickupSlot::Min60 => "60",
        }
    }

    /// The free-text label persisted on the order.
    pub fn label(&self) -> &'static str {
        match self {
            PickupSlot::Asap => "As soon as possible",
            PickupSlot::Min15 => "In 15 minutes",
            PickupSlot::Min30 => "In 30 minutes",
            PickupSlot::Min45 => "In 45 minutes",
            PickupSlot::Min60 => "In 1 hour",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        PickupSlot::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Parse a `cart_time_<key>` custom id into its pickup slot.
pub fn parse_pickup_slot(id: &str) -> Option<PickupSlot> {
    PickupSlot::from_key(id.strip_prefix(CART_TIME_PREFIX)?)
}
