pub mod client;
pub mod error;
pub mod paginate;
pub mod query;
pub mod types;

pub use client::{CatalogQuery, InventoryClient, StoreQuery};
pub use error::ApiError;
pub use paginate::{
    run_to_completion, FetchOutcome, FetchPages, Page, PageCursor, QueryGeneration,
};
pub use query::page_url_param;
pub use types::{ProductRecord, ProductsPage, StoreRecord, StoresPage};
