//! Request and response wire types for the catalog REST API.

mod queries;
mod responses;

pub use queries::*;
pub use responses::*;
