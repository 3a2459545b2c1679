//! Stock adjustment dialog
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: the modal

mod view;
mod view_model;

pub use view::StockAdjustmentDialog;
pub use view_model::{parse_adjustment, StockAdjustmentViewModel, ADJUSTMENT_REASONS};
