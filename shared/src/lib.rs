//! Shared types for the Weaviate admin dashboard
//!
//! This crate contains the wire models exchanged with the dashboard backend:
//! - Schema and object payloads (collections, properties, objects, search)
//! - Projection payloads for the vector visualization
//! - Runtime configuration snapshots (database URL/port, Docker network, keys)

pub mod api;
pub mod config;

pub use api::*;
pub use config::*;
