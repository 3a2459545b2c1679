pub mod aggregate;

pub use aggregate::{
    derive_status, InventoryStatus, Product, ProductDto, StockAdjustmentDto,
};
