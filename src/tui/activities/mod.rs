//! Activity modules for the TUI.

pub mod main;
pub mod references;

pub use main::MainActivity;
pub use main::Msg;
pub use references::ReferencesActivity;
