//! Embed and component rendering for the customer-facing flows.
//! Admin-only views are built next to their handlers in `interactions/`.

use crate::database::models::{MenuItem, OrderView};
use crate::interactions::ids;
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_MAIN, COLOR_SUCCESS};
use crate::util::format_price;
use serenity::builder::{CreateActionRow, CreateEmbed};

pub const SHOP_NAME: &str = "K-89 Coffee";

/// The main menu shown by `/start` and every "back to main" button.
pub fn main_menu(first_name: &str, is_admin: bool) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title(format!("✨ Welcome to {SHOP_NAME}, {first_name}! ✨"))
        .description("Pick an action below 👇")
        .color(COLOR_MAIN);
    let mut rows = vec![
        CreateActionRow::Buttons(vec![Btn::primary(ids::SHOP_OPEN, "🍵 Menu")]),
        CreateActionRow::Buttons(vec![
            Btn::secondary(ids::CART_VIEW, "🛒 Cart"),
            Btn::secondary(ids::NAV_ORDERS, "📝 My orders"),
        ]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::NAV_ABOUT, "ℹ️ About us")]),
    ];
    if is_admin {
        rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
            ids::ADMIN_PANEL,
            "👑 Admin panel",
        )]));
    }
    (embed, rows)
}

/// The drink listing: one button per available item.
pub fn menu_view(items: &[MenuItem]) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("☕ Our menu")
        .description(if items.is_empty() {
            "The menu is empty right now. Check back soon!"
        } else {
            "Pick a drink to order 👇"
        })
        .color(COLOR_MAIN);

    let buttons: Vec<_> = items
        .iter()
        .map(|item| {
            let id = format!("{}{}_1", ids::SHOP_ITEM_PREFIX, item.id);
            Btn::secondary(&id, &format!("{} — {}", item.name, format_price(item.price_cents)))
        })
        .collect();

    // Discord caps a message at five action rows; the last one is navigation.
    let mut rows: Vec<CreateActionRow> = buttons
        .chunks(4)
        .take(4)
        .map(|chunk| CreateActionRow::Buttons(chunk.to_vec()))
        .collect();
    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::NAV_HOME,
        "🔙 Back",
    )]));
    (embed, rows)
}

/// A single item with a quantity stepper.
pub fn item_view(item: &MenuItem, quantity: i64) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title(format!("✨ {}", item.name))
        .description(format!(
            "💰 Price: {}\n\nChoose a quantity 👇",
            format_price(item.price_cents)
        ))
        .color(COLOR_MAIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![
            Btn::secondary(&format!("{}{}_{}", ids::SHOP_DEC_PREFIX, item.id, quantity), "➖")
                .disabled(quantity <= 1),
            Btn::secondary(ids::SHOP_QTY_NOOP, &quantity.to_string()).disabled(true),
            Btn::secondary(&format!("{}{}_{}", ids::SHOP_INC_PREFIX, item.id, quantity), "➕"),
        ]),
        CreateActionRow::Buttons(vec![Btn::success(
            &format!("{}{}_{}", ids::SHOP_ADD_PREFIX, item.id, quantity),
            "🛒 Add to cart",
        )]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::SHOP_OPEN, "🔙 Back to menu")]),
    ];
    (embed, rows)
}

/// Confirmation after an item lands in the cart.
pub fn added_to_cart_view(item_name: &str) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .description(format!("✅ {item_name} added to your cart"))
        .color(COLOR_SUCCESS);
    let rows = vec![CreateActionRow::Buttons(vec![
        Btn::primary(ids::CART_VIEW, "🛒 Go to cart"),
        Btn::secondary(ids::SHOP_OPEN, "🔙 Back to menu"),
    ])];
    (embed, rows)
}

/// The cart, priced against the current catalog (retired items are already
/// filtered out by the caller).
pub fn cart_view(lines: &[(MenuItem, i64)]) -> (CreateEmbed, Vec<CreateActionRow>) {
    if lines.is_empty() {
        let embed = CreateEmbed::new()
            .description("Your cart is empty!")
            .color(COLOR_MAIN);
        let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
            ids::SHOP_OPEN,
            "🔙 To the menu",
        )])];
        return (embed, rows);
    }

    let mut text = String::new();
    let mut total = 0i64;
    for (item, quantity) in lines {
        let subtotal = item.price_cents * quantity;
        total += subtotal;
        text.push_str(&format!(
            "• {}\n  {} × {} = {}\n",
            item.name,
            quantity,
            format_price(item.price_cents),
            format_price(subtotal)
        ));
    }
    text.push_str(&format!("\n**Total: {}**", format_price(total)));

    let embed = CreateEmbed::new()
        .title("🛒 Your cart")
        .description(text)
        .color(COLOR_MAIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::success(ids::CART_CHECKOUT, "✅ Checkout")]),
        CreateActionRow::Buttons(vec![Btn::danger(ids::CART_CLEAR, "🗑 Clear cart")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::SHOP_OPEN, "🔙 To the menu")]),
    ];
    (embed, rows)
}

/// Pickup-time selection shown after Checkout.
pub fn pickup_view() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("🕒 When should your order be ready?")
        .color(COLOR_MAIN);
    let mut rows: Vec<CreateActionRow> = Vec::new();
    rows.push(CreateActionRow::Buttons(vec![Btn::primary(
        &format!("{}{}", ids::CART_TIME_PREFIX, ids::PickupSlot::Asap.key()),
        "⚡ As soon as possible",
    )]));
    rows.push(CreateActionRow::Buttons(
        [ids::PickupSlot::Min15, ids::PickupSlot::Min30]
            .iter()
            .map(|s| {
                Btn::secondary(
                    &format!("{}{}", ids::CART_TIME_PREFIX, s.key()),
                    &format!("⏰ {}", s.label()),
                )
            })
            .collect(),
    ));
    rows.push(CreateActionRow::Buttons(
        [ids::PickupSlot::Min45, ids::PickupSlot::Min60]
            .iter()
            .map(|s| {
                Btn::secondary(
                    &format!("{}{}", ids::CART_TIME_PREFIX, s.key()),
                    &format!("⏰ {}", s.label()),
                )
            })
            .collect(),
    ));
    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::CART_VIEW,
        "🔙 Back",
    )]));
    (embed, rows)
}

/// Confirmation after the order is committed.
pub fn order_placed_view(order_id: i32, slot_label: &str) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("✅ Order placed!")
        .description(format!(
            "Order number: #{order_id}\nPickup time: {slot_label}\nStatus: Accepted\n\n\
             We'll let you know as soon as it's ready.\nThank you for your order! ☕"
        ))
        .color(COLOR_SUCCESS);
    let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
        ids::NAV_HOME,
        "🔙 Main menu",
    )])];
    (embed, rows)
}

/// Formats an order's lines with subtotals, shared by listings and
/// notifications.
pub fn order_lines_block(order: &OrderView) -> String {
    let mut text = String::new();
    for line in &order.lines {
        text.push_str(&format!(
            "• {} × {} = {}\n",
            line.name,
            line.quantity,
            format_price(line.subtotal_cents())
        ));
    }
    text
}

/// The purchaser's order history.
pub fn orders_view(orders: &[OrderView]) -> (CreateEmbed, Vec<CreateActionRow>) {
    let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
        ids::NAV_HOME,
        "🔙 Back",
    )])];
    if orders.is_empty() {
        let embed = CreateEmbed::new()
            .description("You have no orders yet.")
            .color(COLOR_MAIN);
        return (embed, rows);
    }
    let mut text = String::new();
    for order in orders {
        text.push_str(&format!(
            "🔸 **Order #{}**\n📌 Status: {}\n",
            order.id, order.status
        ));
        text.push_str(&order_lines_block(order));
        text.push_str(&format!("💰 Total: {}\n\n", format_price(order.total_cents())));
    }
    let embed = CreateEmbed::new()
        .title("📋 Your orders")
        .description(text)
        .color(COLOR_MAIN);
    (embed, rows)
}

/// Static shop info with link buttons.
pub fn about_view() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title(format!("✨ {SHOP_NAME} — your favorite coffee spot! ✨"))
        .description(
            "🕐 **Opening hours**\nMon–Sun: 9:00 – 21:00\n\n\
             📍 **Address**\n3 Optimistov, bldg. 1, Novy Urengoy\n\n\
             ✨ **Current offer**\nBuy two packs of tea and get 15% off both!\n\n\
             We brew every cup with care. See you soon! 💝",
        )
        .color(COLOR_MAIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::link(
            "https://yandex.ru/maps/-/CHaBEOmM",
            "📍 Show on the map",
        )]),
        CreateActionRow::Buttons(vec![Btn::link("https://t.me/CoffeeNur89", "🛟 Support")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::NAV_HOME, "🔙 Back")]),
    ];
    (embed, rows)
}
