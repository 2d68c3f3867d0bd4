// Adapters layer: concrete table sources (local file, http).

pub mod source;

pub use source::{DataSource, HttpSource, LocalSource};
