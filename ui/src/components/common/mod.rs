//! Common/Shared UI Components
//!
//! Reusable components used throughout the application.

mod alerts;
mod icons;
mod modal;

pub use alerts::{ErrorAlert, Spinner, SuccessAlert};
pub use icons::*;
pub use modal::Modal;
