//! App-level components for Card Hub.
//!
//! Reusable pieces (tabs, card tiles, toasts) live in `cardhub-ui`.

mod hub_header;

pub use hub_header::{surface_style, HubHeader};
