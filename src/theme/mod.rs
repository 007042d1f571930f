//! Theme for Card Hub.

mod styles;

pub use styles::GLOBAL_STYLES;
