//! New purchase request dialog

mod view;
mod view_model;

pub use view::CreatePurchaseRequestDialog;
pub use view_model::{build_request, CreatePurchaseRequestViewModel};
