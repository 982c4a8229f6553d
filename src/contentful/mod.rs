pub mod api_types;
pub mod cached_client;
pub mod client;
pub mod error;
pub mod resolve;
pub mod types;

pub use api_types::PageEntry;
pub use cached_client::ContentClient;
pub use client::EntryQuery;
pub use error::{ContentError, ContentResult};
