//! Product model and request bodies

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form product attributes (`{"color": "red", "weight": 1.2}`)
pub type Attributes = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub firm_id: i64,
    pub description: String,
    pub category_id: i64,
    #[cfg_attr(feature = "postgres", sqlx(json))]
    pub attributes: Attributes,
    pub sell_count: i32,
    pub stock: i32,
    /// Image URLs, in display order
    pub image: Vec<String>,
}

/// Body of `POST /products`
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub firm_id: i64,
    #[serde(default)]
    pub description: String,
    pub category_id: i64,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub sell_count: i32,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub image: Vec<String>,
}

/// Body of `PUT /products/{id}`; `sell_count` is only changed through
/// `PATCH /products/{id}/sell`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub firm_id: i64,
    #[serde(default)]
    pub description: String,
    pub category_id: i64,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub image: Vec<String>,
}

impl Product {
    pub fn from_new(id: i64, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            firm_id: input.firm_id,
            description: input.description,
            category_id: input.category_id,
            attributes: input.attributes,
            sell_count: input.sell_count,
            stock: input.stock,
            image: input.image,
        }
    }

    pub fn apply(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.firm_id = update.firm_id;
        self.description = update.description;
        self.category_id = update.category_id;
        self.attributes = update.attributes;
        self.stock = update.stock;
        self.image = update.image;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageInput {
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesInput {
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountInput {
    pub count: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockInput {
    pub stock: i32,
}
