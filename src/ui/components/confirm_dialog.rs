use eframe::egui;

#[derive(Debug)]
pub enum ConfirmDialogEvent {
    Confirm,
    Cancel,
}

/// Blocking confirmation window, the only guard in front of a delete.
pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        title: &str,
        message: &str,
    ) -> Option<ConfirmDialogEvent> {
        let mut event = None;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        event = Some(ConfirmDialogEvent::Confirm);
                    }
                    if ui.button("Cancel").clicked() {
                        event = Some(ConfirmDialogEvent::Cancel);
                    }
                });
            });

        event
    }
}
