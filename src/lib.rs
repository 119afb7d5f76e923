// Varasto - Warehouse Inventory
// Core library: stock accumulator, warehouse registry and form parsing.
// The web server lives behind the `server` feature.

pub mod varasto;
pub mod store;
pub mod forms;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use varasto::Varasto;
pub use store::{Warehouse, WarehouseStore, DEFAULT_NAME};
pub use forms::{
    safe_float, AmountForm, CreateWarehouseForm, EditWarehouseForm, DEFAULT_CAPACITY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
