//! Fixed paths on the ARRC admin API, relative to the profile's base URL.

pub const ADMIN_LOGIN: &str = "/admin/auth/login";
pub const ADMIN_LOGOUT: &str = "/admin/auth/logout";

pub const CATEGORY_LIST: &str = "/categories/all-categories";
pub const CATEGORY_CREATE: &str = "/categories/create-category";
pub const CATEGORY_UPDATE: &str = "/categories/category-update";
pub const CATEGORY_DELETE: &str = "/categories/category-delete";

pub const ITEM_LIST: &str = "/category-items/list";
pub const ITEM_CREATE: &str = "/category-items/create";
pub const ITEM_UPDATE: &str = "/category-items/category-item-update";
pub const ITEM_DELETE: &str = "/category-items/category-item-delete";

pub const USER_LIST: &str = "/admin/auth/users";

pub fn user_status(id: &str) -> String {
    format!("/admin/auth/users/{}/status", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_status_path_embeds_id() {
        assert_eq!(
            user_status("64f0c2"),
            "/admin/auth/users/64f0c2/status"
        );
    }
}
