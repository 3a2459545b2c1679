mod view;
mod view_model;

pub use view::DealerSlotDetails;
pub use view_model::DealerSlotDetailsViewModel;
