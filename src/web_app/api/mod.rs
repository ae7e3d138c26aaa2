// web_app/api/mod.rs - API module for catalog access
//
// This module contains the HTTP client for the remote catalog
// and its error type. It compiles for both the server and WASM.

pub mod catalog;
pub mod error;

pub use catalog::{CatalogClient, CatalogEndpoint};
pub use error::CatalogError;
