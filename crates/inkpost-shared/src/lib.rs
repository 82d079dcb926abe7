//! # Inkpost Shared
//!
//! Request/response types shared by the REST and JSON-RPC surfaces.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
