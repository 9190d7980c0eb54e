//! Inventory API response types.
//!
//! ## Observed shape
//!
//! Both endpoints wrap results in the same envelope: a `pager` object whose
//! `total_pages` drives the fetch-merge loop, and a `result` array of
//! records. Optional record fields (`image_thumb_url`, `varietal`, `style`,
//! `tasting_note`, store address parts) are `null` or absent depending on
//! the record; `#[serde(default)]` handles both. `alcohol_content` is an
//! integer in hundredths of a percent (`550` = 5.5%), never a float.

use serde::Deserialize;

use taplist_core::{Beer, Store};

/// Pagination envelope common to both endpoints. Only `total_pages` is
/// consumed; the first response's value bounds the whole query.
#[derive(Debug, Deserialize)]
pub struct Pager {
    pub total_pages: u32,
}

/// Top-level response from `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    pub pager: Pager,
    pub result: Vec<ProductRecord>,
}

/// A single product from the catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_thumb_url: Option<String>,
    /// Hundredths of a percent.
    pub alcohol_content: i32,
    #[serde(default)]
    pub varietal: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tasting_note: Option<String>,
}

impl From<ProductRecord> for Beer {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image_thumb_url: record.image_thumb_url,
            alcohol_content: record.alcohol_content,
            varietal: record.varietal,
            style: record.style,
            tasting_note: record.tasting_note,
        }
    }
}

/// Top-level response from `GET /stores`.
#[derive(Debug, Deserialize)]
pub struct StoresPage {
    pub pager: Pager,
    pub result: Vec<StoreRecord>,
}

/// A single retail location from the store-lookup endpoint.
///
/// Address parts may be absent on some records; they default to empty
/// strings rather than failing the page (the renderer treats them as plain
/// text either way).
#[derive(Debug, Deserialize)]
pub struct StoreRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address_line_1: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
}

impl From<StoreRecord> for Store {
    fn from(record: StoreRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            address_line_1: record.address_line_1,
            city: record.city,
            postal_code: record.postal_code,
        }
    }
}
