pub mod airports;
pub mod inventory;
pub mod pricing;

pub use airports::{airport_directory, search_airports};
pub use inventory::FlightCatalog;
pub use pricing::{Quote, TAX_RATE};
