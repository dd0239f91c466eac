//! Weaviate Admin UI Library
//!
//! This crate provides the administrative dashboard for a Weaviate vector
//! database: health monitoring, collection management, object browsing and
//! search, and a 3D projection of the vector space.
//!
//! All business logic lives in the REST backend; the dashboard collects form
//! input, issues HTTP requests, and renders the responses.
//!
//! # Modules
//!
//! - [`app`]: Root application component and tab routing
//! - [`client`]: Typed HTTP client for the backend REST surface
//! - [`components`]: Tab components and shared dialogs
//! - [`state`]: Fetch-state machine and stale-response suppression

pub mod app;
pub mod client;
pub mod components;
pub mod state;

pub use app::App;
