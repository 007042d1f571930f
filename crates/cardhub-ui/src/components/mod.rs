//! Reusable components for the hub page.
//!
//! Each component renders core state and reports interactions upward by
//! index; none of them hold interaction logic.

mod card_tile;
mod category_tabs;
mod toast;

pub use card_tile::*;
pub use category_tabs::*;
pub use toast::*;
