pub mod json;
pub mod memory;
pub mod traits;

pub use json::JsonFileSource;
pub use memory::{bundled, StaticSource, BUNDLED_DATASET};
pub use traits::ListingSource;
