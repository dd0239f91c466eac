//! UI Components
//!
//! All components, organized by feature:
//! - `layout`: top bar with the four main tabs
//! - `database`: health/meta overview tab
//! - `collections`: collection list, schema details, delete confirmation
//! - `objects`: browse, text search, and near-object search
//! - `projection`: 2D/3D vector projection view
//! - `dialogs`: shared configuration dialogs (database, Docker network, keys)
//! - `common`: reusable pieces (icons, alerts, modal shell)

pub mod collections;
pub mod common;
pub mod database;
pub mod dialogs;
pub mod layout;
pub mod objects;
pub mod projection;
