//! Organization provisioning/edit form

mod view;
mod view_model;

pub use view::OrganizationDetails;
pub use view_model::OrganizationDetailsViewModel;
