use crate::api::{AdminSession, ApiError, Category, CategoryItem, RecordPage, User};
use crate::models::FetchTicket;
use poll_promise::Promise;

/// In-flight API work, polled every frame. List fetches carry the ticket
/// issued by their table so stale responses can be dropped on arrival;
/// `SetUserStatus` carries the row id so its busy marker can be cleared.
pub enum ApiTask {
    SignIn(Promise<Result<AdminSession, ApiError>>),
    SignOut(Promise<Result<(), ApiError>>),
    LoadCategories(FetchTicket, Promise<Result<RecordPage<Category>, ApiError>>),
    LoadItems(FetchTicket, Promise<Result<RecordPage<CategoryItem>, ApiError>>),
    LoadUsers(FetchTicket, Promise<Result<RecordPage<User>, ApiError>>),
    LoadCategoryChoices(Promise<Result<RecordPage<Category>, ApiError>>),
    SaveCategory(Promise<Result<(), ApiError>>),
    DeleteCategory(Promise<Result<(), ApiError>>),
    SaveItem(Promise<Result<(), ApiError>>),
    DeleteItem(Promise<Result<(), ApiError>>),
    SetUserStatus(String, Promise<Result<(), ApiError>>),
}
