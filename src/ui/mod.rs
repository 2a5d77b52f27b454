//! Presentation state for the product list, independent of any renderer.

pub mod mvi;
pub mod products;
