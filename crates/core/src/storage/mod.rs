mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{CustomerRepository, InvoiceRepository, UserRepository};
pub use types::{search_pattern, total_pages, CardData, Page, ITEMS_PER_PAGE};
