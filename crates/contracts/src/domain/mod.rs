pub mod a001_product;
pub mod a002_purchase_request;
pub mod a003_notification;
pub mod a004_client;
pub mod a005_organization;
pub mod a006_dealer_slot;
pub mod a007_order;
pub mod common;
