//! Database functions for orders: placement, status updates, read-side
//! projections, and window statistics.

use super::models::{OrderLineRow, OrderLineView, OrderStats, OrderStatus, OrderTotalRow, OrderView};
use crate::session::CartEntry;
use chrono::{DateTime, Duration, Utc};
use serenity::model::id::UserId;
use sqlx::PgPool;

const ORDER_VIEW_SELECT: &str = r#"
    SELECT o.id AS order_id, o.discord_id, o.status, o.created_at, o.desired_time,
           u.username, mi.name AS item_name, oi.quantity, oi.price_cents
    FROM orders o
    LEFT JOIN users u ON u.discord_id = o.discord_id
    LEFT JOIN order_items oi ON oi.order_id = o.id
    LEFT JOIN menu_items mi ON mi.id = oi.menu_item_id
"#;

/// Creates an order from the cart in a single transaction.
///
/// Each cart entry whose item still exists and is available becomes a line
/// with the item's *current* price snapshotted; entries referencing missing
/// or retired items are silently skipped. A cart resolving to nothing still
/// yields an order with zero lines. Any error rolls the whole order back —
/// partial orders never persist.
pub async fn place_order(
    pool: &PgPool,
    user_id: UserId,
    cart: &[CartEntry],
    desired_time: Option<&str>,
) -> Result<i32, sqlx::Error> {
    let discord_id = user_id.get() as i64;
    let mut tx = pool.begin().await?;
    let order_id: i32 = sqlx::query_scalar(
        "INSERT INTO orders (discord_id, status, desired_time) VALUES ($1, 'Accepted', $2) RETURNING id",
    )
    .bind(discord_id)
    .bind(desired_time)
    .fetch_one(&mut *tx)
    .await?;

    for entry in cart {
        let price: Option<i64> = sqlx::query_scalar(
            "SELECT price_cents FROM menu_items WHERE id = $1 AND is_available = TRUE",
        )
        .bind(entry.item_id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(price_cents) = price else {
            continue;
        };
        sqlx::query(
            "INSERT INTO order_items (order_id, menu_item_id, quantity, price_cents) VALUES ($1, $2, $3, $4)",
        )
        .bind(order_id)
        .bind(entry.item_id)
        .bind(entry.quantity)
        .bind(price_cents)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(order_id)
}

/// Marks an order fulfilled. Idempotent in effect: re-applying `Ready`
/// changes nothing further. Returns `false` for an unknown order id.
pub async fn mark_ready(pool: &PgPool, order_id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE orders SET status = 'Ready' WHERE id = $1")
        .bind(order_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

/// All orders placed by one user, newest first.
pub async fn user_orders(pool: &PgPool, user_id: UserId) -> Result<Vec<OrderView>, sqlx::Error> {
    let discord_id = user_id.get() as i64;
    let rows = sqlx::query_as::<_, OrderLineRow>(&format!(
        "{ORDER_VIEW_SELECT} WHERE o.discord_id = $1 ORDER BY o.created_at DESC, o.id DESC, oi.id"
    ))
    .bind(discord_id)
    .fetch_all(pool)
    .await?;
    Ok(group_orders(rows))
}

/// All orders still awaiting fulfillment, newest first (the admin queue).
pub async fn active_orders(pool: &PgPool) -> Result<Vec<OrderView>, sqlx::Error> {
    let rows = sqlx::query_as::<_, OrderLineRow>(&format!(
        "{ORDER_VIEW_SELECT} WHERE o.status = 'Accepted' ORDER BY o.created_at DESC, o.id DESC, oi.id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(group_orders(rows))
}

/// Full detail for one order, or `None` when the id is unknown.
pub async fn order_details(pool: &PgPool, order_id: i32) -> Result<Option<OrderView>, sqlx::Error> {
    let rows = sqlx::query_as::<_, OrderLineRow>(&format!(
        "{ORDER_VIEW_SELECT} WHERE o.id = $1 ORDER BY oi.id"
    ))
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(group_orders(rows).into_iter().next())
}

/// Folds flat join rows into per-order views, preserving row order. Orders
/// with no lines (all cart entries skipped) come through with `lines` empty.
pub fn group_orders(rows: Vec<OrderLineRow>) -> Vec<OrderView> {
    let mut orders: Vec<OrderView> = Vec::new();
    for row in rows {
        if orders.last().map(|o| o.id) != Some(row.order_id) {
            orders.push(OrderView {
                id: row.order_id,
                discord_id: row.discord_id,
                status: row.status,
                created_at: row.created_at,
                desired_time: row.desired_time.clone(),
                username: row.username.clone(),
                lines: Vec::new(),
            });
        }
        if let (Some(name), Some(quantity), Some(price_cents)) =
            (row.item_name, row.quantity, row.price_cents)
        {
            if let Some(order) = orders.last_mut() {
                order.lines.push(OrderLineView {
                    name,
                    quantity,
                    price_cents,
                });
            }
        }
    }
    orders
}

/// Fixed statistics windows offered to admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPeriod {
    AllTime,
    Day,
    Week,
    Month,
}

impl StatsPeriod {
    /// Lower bound on `created_at`, or `None` for the unbounded window.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            StatsPeriod::AllTime => None,
            StatsPeriod::Day => Some(now - Duration::days(1)),
            StatsPeriod::Week => Some(now - Duration::weeks(1)),
            StatsPeriod::Month => Some(now - Duration::days(30)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatsPeriod::AllTime => "All time",
            StatsPeriod::Day => "Last 24 hours",
            StatsPeriod::Week => "Last week",
            StatsPeriod::Month => "Last 30 days",
        }
    }
}

/// Aggregate statistics over a creation-time window: order count, revenue
/// (sum of all line subtotals), current Accepted/Ready counts, and the five
/// most recent matching orders.
pub async fn order_stats(pool: &PgPool, period: StatsPeriod) -> Result<OrderStats, sqlx::Error> {
    let since = period.since(Utc::now());
    let rows = sqlx::query_as::<_, OrderTotalRow>(
        r#"SELECT o.id, o.status, o.created_at,
                  COALESCE(SUM(oi.price_cents * oi.quantity), 0)::BIGINT AS total_cents
           FROM orders o
           LEFT JOIN order_items oi ON oi.order_id = o.id
           WHERE $1::timestamptz IS NULL OR o.created_at >= $1
           GROUP BY o.id, o.status, o.created_at
           ORDER BY o.created_at DESC, o.id DESC"#,
    )
    .bind(since)
    .fetch_all(pool)
    .await?;
    Ok(fold_stats(rows))
}

/// Reduces per-order totals into the aggregate view. Rows are expected
/// newest first; the first five become the "recent" list.
pub fn fold_stats(rows: Vec<OrderTotalRow>) -> OrderStats {
    let mut stats = OrderStats::default();
    for row in rows {
        stats.total_orders += 1;
        stats.revenue_cents += row.total_cents;
        match row.status {
            OrderStatus::Accepted => stats.accepted += 1,
            OrderStatus::Ready => stats.ready += 1,
        }
        if stats.recent.len() < 5 {
            stats.recent.push(row);
        }
    }
    stats
}
