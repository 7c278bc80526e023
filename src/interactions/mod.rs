//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file delegates here based on the component's
//! custom-id "family" (the first `_`-separated segment), so each button tree
//! lives in its own specialized handler.

pub mod admin_handler;
pub mod cart_handler;
pub mod catalog_handler;
pub mod ids;
pub mod nav_handler;
pub mod roster_handler;
pub mod shop_handler;
pub mod util;
