use crate::config::ApiProfile;
use eframe::egui;

#[derive(Debug)]
pub enum ProfileEditorEvent {
    Save,
    Cancel,
}

pub struct ProfileEditor;

impl ProfileEditor {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ctx: &egui::Context, profile: &mut ApiProfile) -> Option<ProfileEditorEvent> {
        let mut event = None;

        egui::Window::new("Profile Details")
            .default_width(400.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut profile.name);
                });

                ui.horizontal(|ui| {
                    ui.label("Base URL:");
                    ui.text_edit_singleline(&mut profile.base_url);
                });

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        event = Some(ProfileEditorEvent::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        event = Some(ProfileEditorEvent::Cancel);
                    }
                });
            });

        event
    }
}
