//! Pure-logic tests for order grouping and window statistics.

use chrono::{Duration, TimeZone, Utc};
use espresso_bot::database::models::{OrderLineRow, OrderStatus, OrderTotalRow};
use espresso_bot::database::orders::{fold_stats, group_orders, StatsPeriod};

fn line_row(order_id: i32, item: Option<(&str, i64, i64)>) -> OrderLineRow {
    OrderLineRow {
        order_id,
        discord_id: 1000 + order_id as i64,
        status: OrderStatus::Accepted,
        created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        desired_time: Some("In 15 minutes".to_string()),
        username: Some("alice".to_string()),
        item_name: item.map(|(n, _, _)| n.to_string()),
        quantity: item.map(|(_, q, _)| q),
        price_cents: item.map(|(_, _, p)| p),
    }
}

#[test]
fn group_orders_folds_adjacent_rows() {
    let rows = vec![
        line_row(2, Some(("Latte", 2, 25000))),
        line_row(2, Some(("Espresso", 1, 15000))),
        line_row(1, Some(("Raf", 3, 30000))),
    ];
    let orders = group_orders(rows);
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, 2);
    assert_eq!(orders[0].lines.len(), 2);
    assert_eq!(orders[0].total_cents(), 2 * 25000 + 15000);
    assert_eq!(orders[1].id, 1);
    assert_eq!(orders[1].total_cents(), 3 * 30000);
}

#[test]
fn group_orders_keeps_lineless_orders() {
    // An order whose cart entries all resolved to retired items joins with
    // NULL line columns; it must still appear, with an empty total.
    let rows = vec![line_row(5, None), line_row(4, Some(("Latte", 1, 25000)))];
    let orders = group_orders(rows);
    assert_eq!(orders.len(), 2);
    assert!(orders[0].lines.is_empty());
    assert_eq!(orders[0].total_cents(), 0);
    assert_eq!(orders[1].lines.len(), 1);
}

#[test]
fn group_orders_empty_input() {
    assert!(group_orders(Vec::new()).is_empty());
}

fn total_row(id: i32, status: OrderStatus, total_cents: i64) -> OrderTotalRow {
    OrderTotalRow {
        id,
        status,
        created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        total_cents,
    }
}

#[test]
fn fold_stats_counts_and_revenue() {
    let rows = vec![
        total_row(3, OrderStatus::Accepted, 40000),
        total_row(2, OrderStatus::Ready, 15000),
        total_row(1, OrderStatus::Ready, 25000),
    ];
    let stats = fold_stats(rows);
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.revenue_cents, 80000);
    assert_eq!(stats.accepted, 1);
    assert_eq!(stats.ready, 2);
    assert_eq!(stats.recent.len(), 3);
    assert_eq!(stats.recent[0].id, 3);
}

#[test]
fn fold_stats_recent_is_capped_at_five() {
    let rows: Vec<OrderTotalRow> = (0..8)
        .map(|i| total_row(100 - i, OrderStatus::Accepted, 10000))
        .collect();
    let stats = fold_stats(rows);
    assert_eq!(stats.total_orders, 8);
    assert_eq!(stats.recent.len(), 5);
    // Newest-first input order is preserved.
    let ids: Vec<i32> = stats.recent.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![100, 99, 98, 97, 96]);
}

#[test]
fn fold_stats_empty() {
    let stats = fold_stats(Vec::new());
    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.revenue_cents, 0);
    assert!(stats.recent.is_empty());
}

#[test]
fn stats_period_bounds() {
    let now = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
    assert_eq!(StatsPeriod::AllTime.since(now), None);
    assert_eq!(StatsPeriod::Day.since(now), Some(now - Duration::days(1)));
    assert_eq!(StatsPeriod::Week.since(now), Some(now - Duration::weeks(1)));
    assert_eq!(StatsPeriod::Month.since(now), Some(now - Duration::days(30)));
}

#[test]
fn stats_period_labels_are_distinct() {
    let mut labels = [
        StatsPeriod::AllTime.label(),
        StatsPeriod::Day.label(),
        StatsPeriod::Week.label(),
        StatsPeriod::Month.label(),
    ];
    labels.sort();
    for w in labels.windows(2) {
        assert_ne!(w[0], w[1]);
    }
}
