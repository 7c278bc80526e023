pub mod buttons;
pub mod style;
pub mod views;
