//! # vitrina-api
//!
//! Server binary for the Vitrina product catalog API.
//!
//! Assembles the REST router from [`vitrina_rest`] over the seed catalog,
//! adds health/ready/welcome endpoints, CORS, and the `/metrics` exporter,
//! and serves the result over HTTP. Configuration comes from environment
//! variables; see [`config::Config`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod server;
