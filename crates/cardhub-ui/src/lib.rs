//! Card Hub UI Components
//!
//! Dioxus components for the hub page: the category tab bar, the card tile
//! and the toast overlay. State lives in `cardhub_core::Page`; these
//! components only turn it into markup with the class names the stylesheet
//! expects:
//!
//! - `.category-tab` / `.category-tab.active`
//! - `.card` / `.card.card-disabled`
//! - `.notification`

pub mod components;

pub use components::*;
