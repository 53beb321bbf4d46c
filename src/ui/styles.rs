use eframe::egui;

/// Setup proportional text styles sized for form-and-table screens
pub fn setup_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(13.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(18.0, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::new(10.0, egui::FontFamily::Proportional),
    );

    ctx.set_style(style);
}

pub const ACTIVE_GREEN: egui::Color32 = egui::Color32::from_rgb(60, 160, 90);
pub const INACTIVE_RED: egui::Color32 = egui::Color32::from_rgb(200, 70, 70);

/// Active/Inactive badge text shared by the status cells.
pub fn status_text(active: bool) -> egui::RichText {
    if active {
        egui::RichText::new("Active").color(ACTIVE_GREEN)
    } else {
        egui::RichText::new("Inactive").color(INACTIVE_RED)
    }
}
