mod error;
mod keys;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{key_in_path, page_key, page_key_path};
pub use traits::Cache;
