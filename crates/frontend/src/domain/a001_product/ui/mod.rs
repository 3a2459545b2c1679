pub mod adjust;
pub mod details;
pub mod list;
