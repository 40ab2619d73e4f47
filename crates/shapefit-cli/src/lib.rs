//! CLI library components for ShapeFit.

pub mod config;
pub mod logging;
pub mod session;
pub mod summary;
