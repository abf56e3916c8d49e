use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Firm {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /firms` and `PUT /firms/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct FirmInput {
    pub name: String,
}
