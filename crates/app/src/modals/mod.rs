//! Modal dialogs for the application.
//!
//! Provides the blocking message dialogs used for errors and the About box.

pub mod message_dialog;

pub use message_dialog::{MessageDialog, Severity};

use egui::Context;

/// Trait for modal dialogs.
pub trait Modal {
    /// Update and render the modal. Returns true if the modal closed this frame.
    fn update(&mut self, ctx: &Context) -> bool;

    /// Returns true if the modal is currently open.
    fn is_open(&self) -> bool;

    /// Close the modal.
    fn close(&mut self);
}
