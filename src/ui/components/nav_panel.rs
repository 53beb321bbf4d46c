use crate::models::Screen;
use eframe::egui;

#[derive(Debug)]
pub enum NavPanelEvent {
    ScreenSelected(Screen),
}

pub struct NavPanel;

impl NavPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, active: Screen) -> Option<NavPanelEvent> {
        let mut event = None;

        for screen in Screen::ALL {
            let is_active = screen == active;
            if ui.selectable_label(is_active, screen.title()).clicked() && !is_active {
                event = Some(NavPanelEvent::ScreenSelected(screen));
            }
        }

        event
    }
}
