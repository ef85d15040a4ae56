//! Pipeline module - loading, feature derivation, and table statistics

pub mod crosstab;
pub mod error;
pub mod features;
pub mod loader;
pub mod schema;
pub mod stats;
pub mod subset;

pub use crosstab::*;
pub use error::*;
pub use features::*;
pub use loader::*;
pub use stats::*;
pub use subset::*;
