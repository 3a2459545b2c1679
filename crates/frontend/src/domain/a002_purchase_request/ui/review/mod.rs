//! Admin review of a pending request: approve directly, reject with a reason

mod view;
mod view_model;

pub use view::RejectRequestDialog;
pub use view_model::{approve_command, RejectRequestViewModel};
