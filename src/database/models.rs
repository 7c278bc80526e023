//! Data structures that map to database tables or query results.

use sqlx::types::chrono::{DateTime, Utc};

/// One-way order lifecycle: `Accepted` on creation, `Ready` when an admin
/// marks it fulfilled. Stored as the Postgres enum `order_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    Accepted,
    Ready,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Ready => "Ready",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(dead_code)]
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: i32,
    pub discord_id: i64,
    pub username: Option<String>,
    pub is_admin: bool,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
    pub is_available: bool,
}

/// Flat row from the orders/lines/items join; grouped into [`OrderView`]s in
/// application code. Line columns are nullable because an order may have no
/// lines (every cart entry resolved to a retired item).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct OrderLineRow {
    pub order_id: i32,
    pub discord_id: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub desired_time: Option<String>,
    pub username: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<i64>,
    pub price_cents: Option<i64>,
}

/// One line of an assembled order: quantity and the price snapshot taken at
/// order time (later catalog edits never change it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: i64,
    pub price_cents: i64,
}

impl OrderLineView {
    pub fn subtotal_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }
}

/// Read-only projection of an order with its lines; the total is computed at
/// read time and never stored.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: i32,
    pub discord_id: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub desired_time: Option<String>,
    pub username: Option<String>,
    pub lines: Vec<OrderLineView>,
}

impl OrderView {
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(OrderLineView::subtotal_cents).sum()
    }
}

/// Per-order aggregate used by the statistics view.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct OrderTotalRow {
    pub id: i32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub total_cents: i64,
}

/// Aggregate statistics over a time window.
#[derive(Debug, Clone, Default)]
pub struct OrderStats {
    pub total_orders: i64,
    pub revenue_cents: i64,
    pub accepted: i64,
    pub ready: i64,
    /// The five most recent matching orders, newest first.
    pub recent: Vec<OrderTotalRow>,
}
