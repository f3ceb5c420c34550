//! UI panels for the inspect drawer.

pub mod data_tab;
pub mod drawer;
pub mod json_tab;
pub mod query_tab;
pub mod stats_tab;

pub use drawer::*;
