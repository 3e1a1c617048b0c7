//! Main window: status line, workspace tabs on the left, chat on the right.

use crate::bootstrap::{BootstrapError, Launcher};
use crate::modals::Modal;
use crate::state::ShellState;
use crate::types::*;
use crate::widgets::NativeFilePicker;
use agent_host::EchoDelegate;
use eframe::egui;
use shared::settings::{AppConfig, Theme};
use shared::transcript::Speaker;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How often the window wakes up to look for Ctrl-C while idle.
const INTERRUPT_POLL: Duration = Duration::from_millis(250);

/// Opens the native window and blocks until it closes.
pub struct NativeLauncher {
    working_dir: PathBuf,
}

impl NativeLauncher {
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }
}

impl Launcher for NativeLauncher {
    fn launch(
        &mut self,
        config: &AppConfig,
        interrupt: Arc<AtomicBool>,
    ) -> Result<(), BootstrapError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(config.app_name.clone())
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([800.0, 600.0]),
            vsync: true,
            ..Default::default()
        };

        let state = ShellState::new(
            config.clone(),
            self.working_dir.clone(),
            Box::new(EchoDelegate),
            Box::new(NativeFilePicker::new()),
        );
        let theme = config.theme();
        let app_name = config.app_name.clone();
        let stop = Arc::clone(&interrupt);

        eframe::run_native(
            &config.app_name,
            options,
            Box::new(move |cc| {
                apply_theme(&cc.egui_ctx, theme);
                println!("{} launched successfully!", app_name);
                Box::new(ShellApp { state, interrupt: stop })
            }),
        )
        .map_err(|e| BootstrapError::Window(e.to_string()))?;

        tracing::info!("window closed");
        Ok(())
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let mut style = (*ctx.style()).clone();
    style.visuals = match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    };
    style.visuals.window_rounding = egui::Rounding::same(8.0);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

struct ShellApp {
    state: ShellState,
    interrupt: Arc<AtomicBool>,
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.interrupt.load(Ordering::SeqCst) {
            tracing::info!("interrupt received, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        ctx.request_repaint_after(INTERRUPT_POLL);

        let s = &mut self.state;
        let blocked = s.is_blocked();

        render_status_bar(s, ctx, blocked);
        render_workspace_panel(s, ctx, blocked);
        render_chat_panel(s, ctx, blocked);

        s.error_dialog.update(ctx);
        s.about_dialog.update(ctx);
    }
}

fn render_status_bar(s: &mut ShellState, ctx: &egui::Context, blocked: bool) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.set_enabled(!blocked);
        ui.horizontal(|ui| {
            ui.label(&s.status);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("About").clicked() {
                    s.show_about();
                }
            });
        });
    });
}

enum FileAction {
    Refresh,
    Open,
    Attach,
}

fn render_workspace_panel(s: &mut ShellState, ctx: &egui::Context, blocked: bool) {
    egui::SidePanel::left("workspace")
        .resizable(true)
        .default_width(400.0)
        .min_width(220.0)
        .show(ctx, |ui| {
            ui.set_enabled(!blocked);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for tab in [WorkspaceTab::Files, WorkspaceTab::Plugins] {
                    ui.selectable_value(&mut s.active_tab, tab, tab.label());
                }
            });
            ui.separator();

            match s.active_tab {
                WorkspaceTab::Files => {
                    if let Some(action) = render_files_tab(s, ui) {
                        match action {
                            FileAction::Refresh => s.refresh_files(),
                            FileAction::Open => s.open_file(),
                            FileAction::Attach => s.attach_file(),
                        }
                    }
                }
                WorkspaceTab::Plugins => {
                    ui.label(PLUGINS_PLACEHOLDER);
                }
            }
        });
}

fn render_files_tab(s: &mut ShellState, ui: &mut egui::Ui) -> Option<FileAction> {
    ui.label(egui::RichText::new("File Explorer").strong());

    let mut clicked: Option<usize> = None;
    egui::ScrollArea::vertical()
        .id_source("file_list")
        .auto_shrink([false; 2])
        .max_height((ui.available_height() - 40.0).max(80.0))
        .show(ui, |ui| {
            for (idx, name) in s.file_entries.iter().enumerate() {
                if ui
                    .selectable_label(s.selected_file == Some(idx), name)
                    .clicked()
                {
                    clicked = Some(idx);
                }
            }
        });
    if clicked.is_some() {
        s.selected_file = clicked;
    }

    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Refresh").clicked() {
            action = Some(FileAction::Refresh);
        }
        if ui.button("Open").clicked() {
            action = Some(FileAction::Open);
        }
        if ui.button("Attach").clicked() {
            action = Some(FileAction::Attach);
        }
    });
    action
}

fn speaker_color(speaker: Speaker, dark: bool) -> egui::Color32 {
    match (speaker, dark) {
        (Speaker::User, true) => egui::Color32::from_rgb(130, 180, 255),
        (Speaker::User, false) => egui::Color32::from_rgb(40, 90, 170),
        (Speaker::Agent, true) => egui::Color32::from_rgb(220, 220, 230),
        (Speaker::Agent, false) => egui::Color32::from_rgb(40, 40, 50),
        (Speaker::Error, _) => egui::Color32::from_rgb(220, 100, 100),
        (Speaker::System, true) => egui::Color32::from_rgb(160, 160, 170),
        (Speaker::System, false) => egui::Color32::from_rgb(100, 100, 110),
    }
}

fn render_chat_panel(s: &mut ShellState, ctx: &egui::Context, blocked: bool) {
    let dark = ctx.style().visuals.dark_mode;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.set_enabled(!blocked);
        ui.heading("Chat");
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("transcript")
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .max_height((ui.available_height() - 48.0).max(80.0))
            .show(ui, |ui| {
                for entry in &s.transcript {
                    ui.label(
                        egui::RichText::new(entry.to_string())
                            .color(speaker_color(entry.speaker, dark)),
                    );
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [(ui.available_width() - 80.0).max(120.0), 32.0],
                egui::TextEdit::singleline(&mut s.input_text).hint_text(INPUT_HINT),
            );

            let mut submit = false;
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
                response.request_focus();
            }
            if ui.add_sized([70.0, 32.0], egui::Button::new("Send")).clicked() {
                submit = true;
            }
            if submit {
                s.send();
            }
        });
    });
}
