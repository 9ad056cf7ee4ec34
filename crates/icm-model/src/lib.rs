pub mod catalog;
pub mod entry;
pub mod error;
pub mod subset;

pub use catalog::Catalog;
pub use entry::{CodeEntry, normalize_code};
pub use error::{LookupError, Result};
pub use subset::SubsetId;
