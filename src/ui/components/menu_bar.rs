use eframe::egui;

#[derive(Debug)]
pub enum MenuBarEvent {
    ShowSettings,
    LogOut,
    Quit,
    Refresh,
}

pub struct MenuBar;

impl MenuBar {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session_label: &str) -> Option<MenuBarEvent> {
        let mut event = None;

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("API Settings...").clicked() {
                    event = Some(MenuBarEvent::ShowSettings);
                    ui.close_menu();
                }
                if ui.button("Log Out").clicked() {
                    event = Some(MenuBarEvent::LogOut);
                    ui.close_menu();
                }
                if ui.button("Quit").clicked() {
                    event = Some(MenuBarEvent::Quit);
                }
            });

            ui.separator();

            if ui.button("🔄 Refresh").clicked() {
                event = Some(MenuBarEvent::Refresh);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(session_label);
            });
        });

        event
    }
}
