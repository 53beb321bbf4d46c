use crate::api::CategoryDraft;
use crate::ui::INACTIVE_RED;
use eframe::egui;

#[derive(Debug)]
pub enum CategoryEditorEvent {
    Save,
    Cancel,
}

pub struct CategoryEditor {
    error: Option<String>,
}

impl CategoryEditor {
    pub fn new() -> Self {
        Self { error: None }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        draft: &mut CategoryDraft,
    ) -> Option<CategoryEditorEvent> {
        let mut event = None;
        let title = if draft.is_edit() {
            "Edit Category"
        } else {
            "Create Category"
        };

        egui::Window::new(title)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut draft.name);
                });

                ui.horizontal(|ui| {
                    ui.label("Slug:");
                    ui.text_edit_singleline(&mut draft.slug);
                });

                ui.checkbox(&mut draft.is_active, "Active");

                if let Some(error) = &self.error {
                    ui.colored_label(INACTIVE_RED, error);
                }

                ui.separator();

                ui.horizontal(|ui| {
                    let save_label = if draft.is_edit() { "Update" } else { "Create" };
                    if ui.button(save_label).clicked() {
                        if draft.name.trim().is_empty() || draft.slug.trim().is_empty() {
                            self.error = Some("Name and slug are required".to_string());
                        } else {
                            self.error = None;
                            event = Some(CategoryEditorEvent::Save);
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        self.error = None;
                        event = Some(CategoryEditorEvent::Cancel);
                    }
                });
            });

        event
    }
}
