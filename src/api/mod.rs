pub mod endpoints;
mod client;
mod models;
mod operations;

pub use client::{ApiClient, ApiError};
pub use models::{
    date_label, AdminSession, Category, CategoryDraft, CategoryItem, CategoryRef, Credentials,
    ItemDraft, RecordPage, User,
};
pub use operations::ApiTask;
