//! Page components for Card Hub.

mod hub;

pub use hub::Hub;
