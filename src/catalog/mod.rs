pub mod markers;
pub mod registry;
pub mod schema;

pub use registry::MarkerCatalog;
pub use schema::{GeneGroup, SnpDefinition, ThemeColor};
