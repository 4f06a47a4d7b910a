use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::RecordKind;
use super::id::RecordId;
use super::ports::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Whole currency units; always greater than zero.
    pub price: u64,
    pub image_url: String,
}

/// The client-editable part of a dish, as accepted by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl DishFields {
    pub fn into_dish(self, id: RecordId) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

impl Dish {
    /// The first data-model rule this dish breaks, if any.
    pub fn violation(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name is empty")
        } else if self.description.trim().is_empty() {
            Some("description is empty")
        } else if self.price == 0 {
            Some("price must be greater than zero")
        } else if self.image_url.trim().is_empty() {
            Some("image_url is empty")
        } else {
            None
        }
    }
}

impl Record for Dish {
    const KIND: RecordKind = RecordKind::Dish;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
