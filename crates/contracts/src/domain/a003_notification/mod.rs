pub mod aggregate;

pub use aggregate::{extract_rejection_reason, Notification, NotificationType};
