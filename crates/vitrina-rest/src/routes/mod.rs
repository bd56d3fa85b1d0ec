//! Route handlers for the catalog REST API.

pub mod openapi;
pub mod products;
pub mod stats;
