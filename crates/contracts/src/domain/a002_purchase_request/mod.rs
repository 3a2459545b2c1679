pub mod aggregate;
pub mod enrichment;

pub use aggregate::{
    CreatePurchaseRequestDto, PurchaseRequest, PurchaseRequestStatus, RejectPurchaseRequestDto,
};
pub use enrichment::{enrich_in_place, enrich_with_notifications};
