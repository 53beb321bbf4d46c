use crate::api::endpoints;
use crate::api::models::{
    AdminSession, Category, CategoryDraft, CategoryItem, CategoryListEnvelope, Credentials,
    ErrorBody, ItemDraft, ItemListEnvelope, ItemListRequest, LoginEnvelope, MutationAck,
    RecordPage, User, UserListEnvelope,
};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid credentials or expired session")]
    Unauthorized,
    #[error("{0}")]
    Api(String),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin wrapper over `reqwest::Client` plus the active profile's base URL.
/// One method per endpoint; every list normalizes into `RecordPage<T>`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- auth ---------------------------------------------------------------

    pub async fn login(&self, credentials: &Credentials) -> Result<AdminSession, ApiError> {
        let response = self
            .post(endpoints::ADMIN_LOGIN)
            .json(credentials)
            .send()
            .await?;
        let envelope: LoginEnvelope = self.read_json(endpoints::ADMIN_LOGIN, response).await?;

        if !envelope.success {
            return Err(ApiError::Api(
                envelope
                    .message
                    .unwrap_or_else(|| "sign-in rejected".to_string()),
            ));
        }

        let (email, role) = match envelope.user {
            Some(user) => (
                user.email,
                user.role.unwrap_or_else(|| "admin".to_string()),
            ),
            None => (credentials.email.clone(), "admin".to_string()),
        };

        Ok(AdminSession {
            email,
            role,
            token: envelope.token,
        })
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.post(endpoints::ADMIN_LOGOUT).send().await?;
        self.read_ack(endpoints::ADMIN_LOGOUT, response).await
    }

    // -- categories ---------------------------------------------------------

    pub async fn list_categories(
        &self,
        page: u64,
        rows_per_page: usize,
        search_text: &str,
    ) -> Result<RecordPage<Category>, ApiError> {
        let response = self
            .get(endpoints::CATEGORY_LIST)
            .query(&[
                ("page", page.to_string()),
                ("rowsPerPage", rows_per_page.to_string()),
                ("searchText", search_text.to_string()),
            ])
            .send()
            .await?;
        let envelope: CategoryListEnvelope =
            self.read_json(endpoints::CATEGORY_LIST, response).await?;

        Ok(RecordPage {
            rows: envelope.categories,
            total_records: envelope.pagination.map(|p| p.total_records).unwrap_or(0),
        })
    }

    pub async fn save_category(&self, draft: &CategoryDraft) -> Result<(), ApiError> {
        let path = if draft.is_edit() {
            endpoints::CATEGORY_UPDATE
        } else {
            endpoints::CATEGORY_CREATE
        };
        let response = self.post(path).json(draft).send().await?;
        self.read_ack(path, response).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .post(endpoints::CATEGORY_DELETE)
            .json(&json!({ "id": id }))
            .send()
            .await?;
        self.read_ack(endpoints::CATEGORY_DELETE, response).await
    }

    // -- category items -----------------------------------------------------

    pub async fn list_items(
        &self,
        page: u64,
        rows_per_page: usize,
        search_text: &str,
    ) -> Result<RecordPage<CategoryItem>, ApiError> {
        let response = self
            .post(endpoints::ITEM_LIST)
            .json(&ItemListRequest {
                page,
                rows_per_page,
                q: search_text,
            })
            .send()
            .await?;
        let envelope: ItemListEnvelope = self.read_json(endpoints::ITEM_LIST, response).await?;

        Ok(RecordPage {
            rows: envelope.items,
            total_records: envelope.pagination.map(|p| p.total_records).unwrap_or(0),
        })
    }

    pub async fn save_item(&self, draft: &ItemDraft) -> Result<(), ApiError> {
        let (path, request) = if draft.is_edit() {
            (
                endpoints::ITEM_UPDATE,
                self.patch(endpoints::ITEM_UPDATE),
            )
        } else {
            (
                endpoints::ITEM_CREATE,
                self.post(endpoints::ITEM_CREATE),
            )
        };
        let response = request.json(draft).send().await?;
        self.read_ack(path, response).await
    }

    pub async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .post(endpoints::ITEM_DELETE)
            .json(&json!({ "id": id }))
            .send()
            .await?;
        self.read_ack(endpoints::ITEM_DELETE, response).await
    }

    // -- users --------------------------------------------------------------

    pub async fn list_users(
        &self,
        page: u64,
        rows_per_page: usize,
        search_text: &str,
    ) -> Result<RecordPage<User>, ApiError> {
        let response = self
            .get(endpoints::USER_LIST)
            .query(&[
                ("page", page.to_string()),
                ("rowsPerPage", rows_per_page.to_string()),
                ("searchText", search_text.to_string()),
            ])
            .send()
            .await?;
        let envelope: UserListEnvelope = self.read_json(endpoints::USER_LIST, response).await?;

        if !envelope.success {
            return Err(ApiError::Api("user list request rejected".to_string()));
        }

        let data = envelope.data;
        Ok(RecordPage {
            rows: data.as_ref().map(|d| d.users.clone()).unwrap_or_default(),
            total_records: data
                .and_then(|d| d.pagination)
                .map(|p| p.total_records)
                .unwrap_or(0),
        })
    }

    pub async fn set_user_status(&self, id: &str, status: i64) -> Result<(), ApiError> {
        let path = endpoints::user_status(id);
        let response = self
            .patch(&path)
            .json(&json!({ "status": status }))
            .send()
            .await?;
        self.read_ack(&path, response).await
    }

    // -- plumbing -----------------------------------------------------------

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    fn patch(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.patch(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        debug!(path, status = %status, "api response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;
        if !status.is_success() {
            let message = error_message(status, &body);
            warn!(path, status = %status, message, "api request failed");
            return Err(ApiError::Api(message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Mutation endpoints reply `{ success, message? }`. A `success: false`
    /// on a 2xx is still a failure.
    async fn read_ack(&self, path: &str, response: Response) -> Result<(), ApiError> {
        let ack: MutationAck = self.read_json(path, response).await?;
        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Api(
                ack.message.unwrap_or_else(|| "request rejected".to_string()),
            ))
        }
    }
}

/// Best-effort extraction of the server's `message` from a non-2xx body.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_text() {
        let message = error_message(
            StatusCode::BAD_REQUEST,
            r#"{ "success": false, "message": "slug already exists" }"#,
        );
        assert_eq!(message, "slug already exists");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>nope</html>"),
            "HTTP 502"
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, "{}"), "HTTP 404");
    }

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("https://api.example.com/v1/");
        assert_eq!(client.base_url(), "https://api.example.com/v1");
        assert_eq!(client.url("/categories/all-categories"),
            "https://api.example.com/v1/categories/all-categories");
    }
}
