use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::dish::Dish;
use crate::domain::errors::RecordKind;
use crate::domain::order::Order;
use crate::domain::ports::Record;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid seed file {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Initial contents of the dish and order collections.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: display.clone(),
            source,
        })?;
        let seed: Seed = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: display.clone(),
            source,
        })?;
        seed.check().map_err(|reason| SeedError::Invalid {
            path: display,
            reason,
        })?;
        Ok(seed)
    }

    /// Applies the same rules as the create endpoints, plus id uniqueness
    /// within each collection.
    fn check(&self) -> Result<(), String> {
        check_records(&self.dishes, Dish::violation)?;
        check_records(&self.orders, Order::violation)
    }
}

fn check_records<T: Record>(
    records: &[T],
    violation: fn(&T) -> Option<&'static str>,
) -> Result<(), String> {
    let mut seen = HashSet::new();
    for record in records {
        let id = record.id();
        if id.as_str().is_empty() {
            return Err(format!("{} with an empty id", kind_name(T::KIND)));
        }
        if !seen.insert(id.clone()) {
            return Err(format!("duplicate {} id {}", kind_name(T::KIND), id));
        }
        if let Some(reason) = violation(record) {
            return Err(format!("{} {}: {}", kind_name(T::KIND), id, reason));
        }
    }
    Ok(())
}

fn kind_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Dish => "dish",
        RecordKind::Order => "order",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::order::OrderStatus;

    #[test]
    fn parses_partial_seed() {
        let seed: Seed = serde_json::from_str(
            r#"{
                "orders": [{
                    "id": "o1",
                    "deliverTo": "1 Elm",
                    "mobileNumber": "555",
                    "status": "delivered",
                    "dishes": [{ "dishId": "d1", "quantity": 1 }]
                }]
            }"#,
        )
        .unwrap();

        assert!(seed.dishes.is_empty());
        assert_eq!(seed.orders.len(), 1);
        assert_eq!(seed.orders[0].status, OrderStatus::Delivered);
    }

    fn dish(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Soup",
            "description": "hot",
            "price": 4,
            "image_url": "http://soup"
        })
    }

    fn order(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "deliverTo": "1 Elm",
            "mobileNumber": "555",
            "status": "pending",
            "dishes": [{ "dishId": "1", "quantity": 1 }]
        })
    }

    fn check(value: serde_json::Value) -> Result<(), String> {
        serde_json::from_value::<Seed>(value).unwrap().check()
    }

    #[test]
    fn valid_seed_passes_check() {
        assert!(check(json!({ "dishes": [dish("1"), dish("2")], "orders": [order("1")] })).is_ok());
    }

    #[test]
    fn rejects_invalid_dishes() {
        let mut zero_price = dish("1");
        zero_price["price"] = json!(0);
        let mut blank_name = dish("1");
        blank_name["name"] = json!("");
        let mut blank_image = dish("1");
        blank_image["image_url"] = json!(" ");

        assert_eq!(
            check(json!({ "dishes": [zero_price] })),
            Err("dish 1: price must be greater than zero".to_string())
        );
        assert_eq!(
            check(json!({ "dishes": [blank_name] })),
            Err("dish 1: name is empty".to_string())
        );
        assert_eq!(
            check(json!({ "dishes": [blank_image] })),
            Err("dish 1: image_url is empty".to_string())
        );
    }

    #[test]
    fn rejects_invalid_orders() {
        let mut blank_address = order("1");
        blank_address["deliverTo"] = json!("");
        let mut no_dishes = order("1");
        no_dishes["dishes"] = json!([]);
        let mut zero_quantity = order("1");
        zero_quantity["dishes"] = json!([{ "dishId": "1", "quantity": 0 }]);

        assert_eq!(
            check(json!({ "orders": [blank_address] })),
            Err("order 1: deliverTo is empty".to_string())
        );
        assert_eq!(
            check(json!({ "orders": [no_dishes] })),
            Err("order 1: dishes is empty".to_string())
        );
        assert_eq!(
            check(json!({ "orders": [zero_quantity] })),
            Err("order 1: every quantity must be greater than zero".to_string())
        );
    }

    #[test]
    fn rejects_duplicate_and_empty_ids() {
        assert_eq!(
            check(json!({ "dishes": [dish("1"), dish(" 1 ")] })),
            Err("duplicate dish id 1".to_string())
        );
        assert_eq!(
            check(json!({ "orders": [order("")] })),
            Err("order with an empty id".to_string())
        );
        assert!(check(json!({ "dishes": [dish("1")], "orders": [order("1")] })).is_ok());
    }

    #[test]
    fn load_reports_invalid_records() {
        let path = std::env::temp_dir().join(format!(
            "restaurant-seed-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        fs::write(&path, json!({ "dishes": [dish("1"), dish("1")] }).to_string()).unwrap();

        let err = Seed::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, SeedError::Invalid { ref reason, .. } if reason == "duplicate dish id 1"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Seed::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn bundled_seed_file_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/seed.json");
        let seed = Seed::load(&path).unwrap();
        assert!(!seed.dishes.is_empty());
        assert!(!seed.orders.is_empty());
    }
}
