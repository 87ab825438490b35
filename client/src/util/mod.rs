//! Pure helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain data in, plain data out, so it is tested natively
//! without a browser or reactive owner.

pub mod chart_geometry;
pub mod result_view;
pub mod task_summary;
pub mod validation;
