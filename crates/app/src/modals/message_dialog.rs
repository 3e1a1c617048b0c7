//! Single-message dialog with an OK button.
//!
//! While open it dims the window behind it; the panels also disable
//! themselves, so the dialog has to be dismissed before anything else
//! can be clicked.

use super::Modal;
use egui::{Align2, Area, Context, Id, Key, RichText, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

pub struct MessageDialog {
    is_open: bool,
    title: String,
    message: String,
    severity: Severity,
    id: Id,
}

impl MessageDialog {
    pub fn new(id: impl std::hash::Hash, severity: Severity) -> Self {
        Self {
            is_open: false,
            title: String::new(),
            message: String::new(),
            severity,
            id: Id::new(id),
        }
    }

    /// Open with new content, replacing whatever was shown before.
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.is_open = true;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Modal for MessageDialog {
    fn update(&mut self, ctx: &Context) -> bool {
        if !self.is_open {
            return false;
        }

        let mut should_close = false;

        Area::new(self.id.with("overlay"))
            .anchor(Align2::LEFT_TOP, Vec2::ZERO)
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.allocate_response(screen_rect.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(140));
            });

        let heading = match self.severity {
            Severity::Info => RichText::new(&self.title),
            Severity::Error => RichText::new(&self.title).color(egui::Color32::from_rgb(220, 90, 90)),
        };

        egui::Window::new(heading)
            .id(self.id.with("window"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.add_space(8.0);
                ui.label(&self.message);
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(Key::Escape) || i.key_pressed(Key::Enter)) {
            should_close = true;
        }

        if should_close {
            self.is_open = false;
        }

        should_close
    }

    fn is_open(&self) -> bool {
        self.is_open
    }

    fn close(&mut self) {
        self.is_open = false;
    }
}
