//! Shared Configuration Dialogs
//!
//! Each dialog fetches current remote state when it opens, validates locally
//! on save, writes through the API client, shows a transient success alert,
//! and after 1.5 seconds closes itself by emitting a [`DialogOutcome`]. The
//! parent owns all reload decisions; dialogs never reach back into tab state.

mod configure;
mod docker_network;
mod keys;

pub use configure::ConfigureDialog;
pub use docker_network::DockerNetworkDialog;
pub use keys::KeysDialog;

/// Completion value emitted when a dialog closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Closed without changing anything remote.
    Cancelled,
    /// At least one write succeeded; the parent may want to refresh.
    Saved,
}

/// Delay between showing the success alert and auto-closing, milliseconds.
pub(crate) const CLOSE_DELAY_MS: u32 = 1_500;
