//! # vitrina-catalog
//!
//! Product catalog domain for the Vitrina REST service.
//!
//! This crate implements the catalog domain, providing:
//!
//! - **Catalog Store**: A fixed, in-memory sequence of product records,
//!   seeded once at startup and never mutated
//! - **Query Engine**: Pure filtering, search, pagination, and statistics
//!   over a product sequence
//! - **Validation**: Normalization and range checks for caller-supplied
//!   parameters, failing fast with stable error codes
//! - **Service**: Per-operation orchestration composing validation, queries,
//!   and result analysis
//!
//! ## Architecture
//!
//! The catalog is read-only after construction, so every operation is a
//! stateless request/response transform:
//!
//! ```text
//! raw parameters -> validate -> query engine -> result shaping
//! ```
//!
//! Concurrent reads need no coordination; the store is never locked because
//! it is never written after seeding.
//!
//! ## Example
//!
//! ```rust
//! use vitrina_catalog::service;
//! use vitrina_catalog::ProductCatalog;
//!
//! let catalog = ProductCatalog::seed();
//! let page = service::list_products(&catalog, Some("1"), Some("5"), None)?;
//! assert_eq!(page.products.len(), 5);
//! # Ok::<(), vitrina_catalog::CatalogError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod error;
pub mod observability;
pub mod product;
pub mod query;
pub mod service;
pub mod stats;
pub mod store;
pub mod validate;

pub use error::{CatalogError, CatalogResult};
pub use product::Product;
pub use query::{PageInfo, Paginated};
pub use stats::{CatalogStats, StatsReport};
pub use store::ProductCatalog;
