pub mod aggregate;

pub use aggregate::{Organization, OrganizationDto, OrganizationStats};
