pub mod components;
mod styles;

pub use styles::{setup_styles, status_text, ACTIVE_GREEN, INACTIVE_RED};
