use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Running sum and count of a product's marks.
///
/// The average itself is not stored; readers compute it with
/// [`AvgMark::average`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct AvgMark {
    pub product_id: i64,
    pub sum: f64,
    pub count: i64,
    pub updated_at: DateTime<Utc>,
}

impl AvgMark {
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let avg = AvgMark {
            product_id: 7,
            sum: 9.0,
            count: 2,
            updated_at: Utc::now(),
        };
        assert_eq!(avg.average(), Some(4.5));
    }

    #[test]
    fn test_average_of_empty_is_none() {
        let avg = AvgMark {
            product_id: 7,
            sum: 0.0,
            count: 0,
            updated_at: Utc::now(),
        };
        assert_eq!(avg.average(), None);
    }
}
