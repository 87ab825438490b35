//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and charts. They read shared state
//! from the [`crate::state::AppState`] context provided to every mounted page
//! and never touch the router directly.

pub mod area_chart;
pub mod donut_chart;
pub mod result_table;
pub mod shell;
