pub mod boroughs;
pub mod estimator;
pub mod format;
pub mod loader;
pub mod table;

pub use crate::domain::model::{Estimate, Projection, PropertyFilter, PropertyRecord, Variant};
pub use crate::domain::ports::{ConfigProvider, TableSource};
pub use crate::utils::error::Result;
