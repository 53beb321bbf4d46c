use crate::api::{Category, ItemDraft};
use crate::ui::INACTIVE_RED;
use eframe::egui;

#[derive(Debug)]
pub enum ItemEditorEvent {
    Save,
    Cancel,
}

/// Create/edit dialog for category items. The category dropdown is fed from
/// choices fetched when the dialog opens, not from any table state.
pub struct ItemEditor {
    error: Option<String>,
}

impl ItemEditor {
    pub fn new() -> Self {
        Self { error: None }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        draft: &mut ItemDraft,
        choices: &[Category],
        choices_loading: bool,
    ) -> Option<ItemEditorEvent> {
        let mut event = None;
        let title = if draft.is_edit() {
            "Edit Category Item"
        } else {
            "Create Category Item"
        };

        egui::Window::new(title)
            .collapsible(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Category:");
                    let selected = choices
                        .iter()
                        .find(|c| c.id == draft.category_id)
                        .map(|c| c.name.as_str())
                        .unwrap_or(if choices_loading {
                            "Loading…"
                        } else {
                            "Select category"
                        });

                    egui::ComboBox::from_id_source("item_category")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for category in choices {
                                ui.selectable_value(
                                    &mut draft.category_id,
                                    category.id.clone(),
                                    &category.name,
                                );
                            }
                        });
                });

                ui.horizontal(|ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut draft.name);
                });

                ui.horizontal(|ui| {
                    ui.label("Description:");
                    ui.text_edit_singleline(&mut draft.description);
                });

                ui.horizontal(|ui| {
                    ui.label("Stock symbol:");
                    ui.text_edit_singleline(&mut draft.stock_symbol);
                });

                ui.horizontal(|ui| {
                    ui.label("Price:");
                    ui.add(
                        egui::DragValue::new(&mut draft.price)
                            .speed(0.1)
                            .clamp_range(0.0..=f64::MAX),
                    );
                    ui.label("Reward rate:");
                    ui.add(
                        egui::DragValue::new(&mut draft.reward_rate)
                            .speed(0.1)
                            .clamp_range(0.0..=100.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Sort order:");
                    ui.add(egui::DragValue::new(&mut draft.sort_order));
                });

                ui.horizontal(|ui| {
                    ui.label("Image URL:");
                    ui.text_edit_singleline(&mut draft.image_url);
                });

                ui.horizontal(|ui| {
                    ui.checkbox(&mut draft.is_active, "Active");
                    ui.checkbox(&mut draft.is_featured, "Featured");
                });

                if let Some(error) = &self.error {
                    ui.colored_label(INACTIVE_RED, error);
                }

                ui.separator();

                ui.horizontal(|ui| {
                    let save_label = if draft.is_edit() { "Update" } else { "Create" };
                    if ui.button(save_label).clicked() {
                        if draft.category_id.is_empty() {
                            self.error = Some("Please select a category".to_string());
                        } else {
                            self.error = None;
                            event = Some(ItemEditorEvent::Save);
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        self.error = None;
                        event = Some(ItemEditorEvent::Cancel);
                    }
                });
            });

        event
    }
}
