// SPDX-License-Identifier: MPL-2.0
//! Notification dropdown for the portal header.
//!
//! # Components
//!
//! - [`dropdown`] - `DropdownView` built from a feed snapshot, plus the
//!   `Message`s a click produces
//! - [`time_ago`] - Relative age labels
//!
//! # Usage
//!
//! ```ignore
//! let view = handle.dropdown()?;
//! for entry in &view.entries {
//!     render_row(entry);
//! }
//! // On click:
//! handle.handle_message(&entry.on_click())?;
//! ```

mod dropdown;
mod time_ago;

pub use dropdown::{DropdownEntry, DropdownView, Icon, Message, Tone};
pub use time_ago::format_time_ago;
