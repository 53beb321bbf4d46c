use eframe::egui;

#[derive(Debug)]
pub enum SearchBoxEvent {
    /// Text edited; the caller resets to page 1 and arms the debouncer.
    Changed,
}

pub struct SearchBox;

impl SearchBox {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        text: &mut String,
        hint: &str,
    ) -> Option<SearchBoxEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(text)
                    .hint_text(hint)
                    .desired_width(220.0),
            );
            if response.changed() {
                event = Some(SearchBoxEvent::Changed);
            }

            if !text.is_empty() && ui.small_button("✕").clicked() {
                text.clear();
                event = Some(SearchBoxEvent::Changed);
            }
        });

        event
    }
}
