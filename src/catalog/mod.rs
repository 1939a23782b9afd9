pub mod error;
pub mod prefix;
pub mod types;
pub mod units;

pub use error::CatalogError;
pub use prefix::{Prefix, METRIC_PREFIXES};
pub use types::{QuantityKind, SystemType, UnknownSystemError};
pub use units::{Unit, UnitCatalog};
