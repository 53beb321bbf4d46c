use crate::config::Config;
use eframe::egui;

#[derive(Debug)]
pub enum SettingsDialogEvent {
    UseProfile(usize),
    Edit(usize),
    Delete(usize),
    NewProfile,
    Close,
}

pub struct SettingsDialog;

impl SettingsDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ctx: &egui::Context, config: &Config) -> Option<SettingsDialogEvent> {
        let mut event = None;

        egui::Window::new("API Settings")
            .default_width(520.0)
            .show(ctx, |ui| {
                ui.heading("Server Profiles");
                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(280.0)
                    .show(ui, |ui| {
                        for (idx, profile) in config.profiles.iter().enumerate() {
                            ui.horizontal(|ui| {
                                let is_active = config.last_profile_index == Some(idx);
                                if is_active {
                                    ui.strong(&profile.name);
                                } else {
                                    ui.label(&profile.name);
                                }
                                ui.label(&profile.base_url);

                                if ui.button("Use").clicked() {
                                    event = Some(SettingsDialogEvent::UseProfile(idx));
                                }
                                if ui.button("Edit").clicked() {
                                    event = Some(SettingsDialogEvent::Edit(idx));
                                }
                                if ui.button("Delete").clicked() {
                                    event = Some(SettingsDialogEvent::Delete(idx));
                                }
                            });
                            ui.separator();
                        }

                        if config.profiles.is_empty() {
                            ui.label("No profiles yet; the built-in default server is used.");
                        }
                    });

                ui.separator();

                if ui.button("+ New Profile").clicked() {
                    event = Some(SettingsDialogEvent::NewProfile);
                }

                ui.separator();

                if ui.button("Close").clicked() {
                    event = Some(SettingsDialogEvent::Close);
                }
            });

        event
    }
}
