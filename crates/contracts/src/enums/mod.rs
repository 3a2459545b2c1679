pub mod entity_status;
pub mod role;

pub use entity_status::EntityStatus;
pub use role::Role;
