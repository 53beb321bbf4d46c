//! Wire types for the ARRC admin API.
//!
//! The API serves camelCase JSON with Mongo-style `_id` identifiers, with a
//! couple of exceptions that have to be reproduced exactly: `image_url` is
//! snake_case on the wire, `isFeatured` arrives as either a number (0/1) or a
//! bool, and `categoryId` is either a plain id string or an expanded
//! `{_id, name}` object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// `categoryId` on a category item: a bare id, or the populated reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Expanded {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryRef {
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Expanded { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Expanded { id, name } => name.as_deref().unwrap_or(id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "categoryId", default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "rewardRate", default)]
    pub reward_rate: f64,
    #[serde(rename = "stockSymbol", default)]
    pub stock_symbol: String,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "sortOrder", default)]
    pub sort_order: i64,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(
        rename = "isFeatured",
        default,
        deserialize_with = "flag_from_any",
        serialize_with = "flag_as_int"
    )]
    pub is_featured: bool,
    #[serde(default)]
    pub image_url: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: i64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == 1
    }
}

/// One page of any listed entity, normalized out of the per-entity envelopes.
#[derive(Debug, Clone)]
pub struct RecordPage<T> {
    pub rows: Vec<T>,
    pub total_records: u64,
}

// ---------------------------------------------------------------------------
// Form drafts, serialized straight into mutation request bodies.

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl CategoryDraft {
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            is_active: true,
        }
    }

    pub fn from_record(record: &Category) -> Self {
        Self {
            id: Some(record.id.clone()),
            name: record.name.clone(),
            slug: record.slug.clone(),
            is_active: record.is_active,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "rewardRate")]
    pub reward_rate: f64,
    #[serde(rename = "stockSymbol")]
    pub stock_symbol: String,
    pub price: f64,
    #[serde(rename = "sortOrder")]
    pub sort_order: i64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "isFeatured", serialize_with = "flag_as_int")]
    pub is_featured: bool,
    pub image_url: String,
}

impl ItemDraft {
    pub fn new() -> Self {
        Self {
            id: None,
            category_id: String::new(),
            name: String::new(),
            description: String::new(),
            reward_rate: 0.0,
            stock_symbol: String::new(),
            price: 0.0,
            sort_order: 0,
            is_active: true,
            is_featured: false,
            image_url: String::new(),
        }
    }

    pub fn from_record(record: &CategoryItem) -> Self {
        Self {
            id: Some(record.id.clone()),
            category_id: record
                .category
                .as_ref()
                .map(|c| c.id().to_string())
                .unwrap_or_default(),
            name: record.name.clone(),
            description: record.description.clone(),
            reward_rate: record.reward_rate,
            stock_symbol: record.stock_symbol.clone(),
            price: record.price,
            sort_order: record.sort_order,
            is_active: record.is_active,
            is_featured: record.is_featured,
            image_url: record.image_url.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

// ---------------------------------------------------------------------------
// Session

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
    pub role: String,
    pub token: Option<String>,
}

// ---------------------------------------------------------------------------
// Response envelopes. Each entity list nests differently; all of them
// normalize into `RecordPage<T>` in the client.

#[derive(Debug, Deserialize)]
pub(crate) struct PaginationBlock {
    #[serde(rename = "totalRecords", default)]
    pub total_records: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryListEnvelope {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub pagination: Option<PaginationBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemListEnvelope {
    #[serde(default)]
    pub items: Vec<CategoryItem>,
    #[serde(default)]
    pub pagination: Option<PaginationBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserListEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<UserListData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserListData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pagination: Option<PaginationBlock>,
}

/// Body of the items list request (`POST /category-items/list`).
#[derive(Debug, Serialize)]
pub(crate) struct ItemListRequest<'a> {
    pub page: u64,
    #[serde(rename = "rowsPerPage")]
    pub rows_per_page: usize,
    pub q: &'a str,
}

/// Mutation endpoints reply `{ success, message? }`. Some omit `success`
/// entirely on a 2xx, which counts as accepted.
#[derive(Debug, Deserialize)]
pub(crate) struct MutationAck {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginEnvelope {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn default_true() -> bool {
    true
}

fn flag_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

fn flag_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(i64::from(*value))
}

/// `createdAt` rendered for table cells, `-` when the API omitted it.
pub fn date_label(created_at: Option<&DateTime<Utc>>) -> String {
    created_at
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_item_accepts_plain_category_id() {
        let item: CategoryItem = serde_json::from_str(
            r#"{
                "_id": "i1",
                "categoryId": "c1",
                "name": "Gold",
                "description": "",
                "rewardRate": 2.5,
                "stockSymbol": "GLD",
                "price": 187.2,
                "sortOrder": 3,
                "isActive": true,
                "isFeatured": 1,
                "image_url": "https://cdn.example.com/gold.png",
                "createdAt": "2025-11-03T09:15:00Z"
            }"#,
        )
        .unwrap();

        let category = item.category.unwrap();
        assert_eq!(category.id(), "c1");
        assert_eq!(category.label(), "c1");
        assert!(item.is_featured);
        assert_eq!(item.image_url, "https://cdn.example.com/gold.png");
    }

    #[test]
    fn category_item_accepts_expanded_category_id() {
        let item: CategoryItem = serde_json::from_str(
            r#"{
                "_id": "i2",
                "categoryId": { "_id": "c9", "name": "Metals" },
                "name": "Silver",
                "isFeatured": false
            }"#,
        )
        .unwrap();

        let category = item.category.unwrap();
        assert_eq!(category.id(), "c9");
        assert_eq!(category.label(), "Metals");
        assert!(!item.is_featured);
    }

    #[test]
    fn featured_flag_reads_zero_as_false() {
        let item: CategoryItem =
            serde_json::from_str(r#"{ "_id": "i3", "isFeatured": 0 }"#).unwrap();
        assert!(!item.is_featured);
    }

    #[test]
    fn item_draft_serializes_wire_naming() {
        let mut draft = ItemDraft::new();
        draft.category_id = "c1".to_string();
        draft.is_featured = true;
        draft.image_url = "x.png".to_string();

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["categoryId"], "c1");
        assert_eq!(body["isFeatured"], 1);
        assert_eq!(body["image_url"], "x.png");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn edit_draft_carries_id() {
        let record: Category = serde_json::from_str(
            r#"{ "_id": "c4", "name": "Crypto", "slug": "crypto", "isActive": false }"#,
        )
        .unwrap();
        let draft = CategoryDraft::from_record(&record);
        assert!(draft.is_edit());

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["id"], "c4");
        assert_eq!(body["isActive"], false);
    }

    #[test]
    fn user_envelope_nests_under_data() {
        let envelope: UserListEnvelope = serde_json::from_str(
            r#"{
                "success": true,
                "data": {
                    "users": [
                        { "_id": "u1", "email": "a@b.com", "status": 1 },
                        { "_id": "u2", "email": "c@d.com", "status": 0 }
                    ],
                    "pagination": { "totalRecords": 42 }
                }
            }"#,
        )
        .unwrap();

        let data = envelope.data.unwrap();
        assert_eq!(data.users.len(), 2);
        assert!(data.users[0].is_active());
        assert!(!data.users[1].is_active());
        assert_eq!(data.pagination.unwrap().total_records, 42);
    }

    #[test]
    fn missing_pagination_defaults_to_zero() {
        let envelope: CategoryListEnvelope =
            serde_json::from_str(r#"{ "categories": [] }"#).unwrap();
        assert!(envelope.categories.is_empty());
        assert!(envelope.pagination.is_none());
    }

    #[test]
    fn date_label_formats_or_dashes() {
        let item: Category = serde_json::from_str(
            r#"{ "_id": "c1", "createdAt": "2025-11-03T09:15:00Z" }"#,
        )
        .unwrap();
        assert_eq!(date_label(item.created_at.as_ref()), "2025-11-03");
        assert_eq!(date_label(None), "-");
    }
}
