use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
}

/// Body of `POST /categories` and `PUT /categories/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Body carrying a single image URL
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInput {
    pub image: String,
}
