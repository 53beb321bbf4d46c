use crate::api::Credentials;
use crate::ui::INACTIVE_RED;
use eframe::egui;

#[derive(Debug)]
pub enum LoginPanelEvent {
    /// Emitted only once the form passes validation.
    Submit,
}

pub struct LoginPanel {
    show_password: bool,
    attempted: bool,
}

impl LoginPanel {
    pub fn new() -> Self {
        Self {
            show_password: false,
            attempted: false,
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        credentials: &mut Credentials,
        signing_in: bool,
        error: Option<&str>,
    ) -> Option<LoginPanelEvent> {
        let mut event = None;

        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() * 0.2).max(24.0));
            ui.set_max_width(340.0);

            ui.heading("Welcome to ARRC");
            ui.label("Admin sign in");
            ui.add_space(16.0);

            ui.group(|ui| {
                ui.set_width(320.0);

                ui.label("Email");
                let email_edit = ui.add(
                    egui::TextEdit::singleline(&mut credentials.email)
                        .hint_text("admin@example.com")
                        .desired_width(f32::INFINITY),
                );
                if self.attempted && !email_looks_valid(&credentials.email) {
                    ui.colored_label(INACTIVE_RED, "Enter a valid email");
                }

                ui.add_space(8.0);

                ui.label("Password");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut credentials.password)
                            .password(!self.show_password)
                            .desired_width(ui.available_width() - 32.0),
                    );
                    let eye = if self.show_password { "🙈" } else { "👁" };
                    if ui.small_button(eye).clicked() {
                        self.show_password = !self.show_password;
                    }
                });
                if self.attempted && credentials.password.is_empty() {
                    ui.colored_label(INACTIVE_RED, "Password is required");
                }

                ui.add_space(12.0);

                let label = if signing_in { "Signing in…" } else { "Sign In" };
                let submit = ui.add_enabled(
                    !signing_in,
                    egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 28.0)),
                );
                let submitted = submit.clicked()
                    || (email_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));

                if submitted && !signing_in {
                    self.attempted = true;
                    if email_looks_valid(&credentials.email) && !credentials.password.is_empty() {
                        event = Some(LoginPanelEvent::Submit);
                    }
                }

                if let Some(error) = error {
                    ui.add_space(8.0);
                    ui.colored_label(INACTIVE_RED, error);
                }
            });
        });

        event
    }
}

/// Enough of an email shape to catch typos before bothering the server:
/// non-empty local part and a dot somewhere in the domain.
fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(email_looks_valid("admin@example.com"));
        assert!(email_looks_valid("a.b+tag@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!email_looks_valid(""));
        assert!(!email_looks_valid("admin"));
        assert!(!email_looks_valid("@example.com"));
        assert!(!email_looks_valid("admin@example"));
        assert!(!email_looks_valid("admin@.com"));
        assert!(!email_looks_valid("admin@example."));
    }
}
