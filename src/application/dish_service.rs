use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::domain::dish::{Dish, DishFields};
use crate::domain::errors::{DomainError, RecordKind};
use crate::domain::id::RecordId;
use crate::domain::ports::IdGenerator;

use super::pipeline::{record_exists, GuardChain, RequestContext, Store};
use super::validation::{non_empty_str, positive_integer};

type DishContext = RequestContext<Dish, DishFields>;

const NEW_DISH_MESSAGE: &str =
    "All new dishes must have properties: name, description, price, image_url";

pub struct DishService {
    store: RwLock<Box<Store<Dish>>>,
    ids: Arc<dyn IdGenerator>,
    read_chain: GuardChain<Store<Dish>, DishContext>,
    create_chain: GuardChain<Store<Dish>, DishContext>,
    update_chain: GuardChain<Store<Dish>, DishContext>,
}

impl DishService {
    pub fn new(store: Box<Store<Dish>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: RwLock::new(store),
            ids,
            read_chain: GuardChain::new().guard("dish-exists", record_exists::<Dish, DishFields>),
            create_chain: GuardChain::new().guard("valid-dish-fields", valid_dish_fields),
            update_chain: GuardChain::new()
                .guard("dish-exists", record_exists::<Dish, DishFields>)
                .guard("dish-id-matches-route", dish_id_matches_route)
                .guard("valid-dish-fields", valid_dish_fields),
        }
    }

    pub fn list(&self) -> Result<Vec<Dish>, DomainError> {
        self.read_store()?.list()
    }

    pub fn read(&self, id: RecordId) -> Result<Dish, DomainError> {
        let store = self.read_store()?;
        let mut ctx = DishContext::for_route(id, Value::Null);
        self.read_chain.run(&**store, &mut ctx)?;
        Ok(ctx.take_found()?.record)
    }

    pub fn create(&self, data: Value) -> Result<Dish, DomainError> {
        let mut store = self.write_store()?;
        let mut ctx = DishContext::new(data);
        self.create_chain.run(&**store, &mut ctx)?;

        let dish = ctx.take_fields()?.into_dish(self.ids.next_id());
        store.insert(dish.clone())?;
        log::info!("created dish {}", dish.id);
        Ok(dish)
    }

    pub fn update(&self, id: RecordId, data: Value) -> Result<Dish, DomainError> {
        let mut store = self.write_store()?;
        let mut ctx = DishContext::for_route(id, data);
        self.update_chain.run(&**store, &mut ctx)?;

        let found = ctx.take_found()?;
        let dish = ctx.take_fields()?.into_dish(found.record.id);
        store.replace(found.position, dish.clone())?;
        log::info!("updated dish {}", dish.id);
        Ok(dish)
    }

    fn read_store(&self) -> Result<RwLockReadGuard<'_, Box<Store<Dish>>>, DomainError> {
        self.store
            .read()
            .map_err(|_| DomainError::Internal("dish store lock poisoned".to_string()))
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, Box<Store<Dish>>>, DomainError> {
        self.store
            .write()
            .map_err(|_| DomainError::Internal("dish store lock poisoned".to_string()))
    }
}

fn dish_id_matches_route(_: &Store<Dish>, ctx: &mut DishContext) -> Result<(), DomainError> {
    let route_id = ctx.route_id()?;
    match RecordId::from_json(&ctx.data["id"]) {
        Some(body_id) if body_id != *route_id => Err(DomainError::ConflictingIdentifier {
            kind: RecordKind::Dish,
            body_id,
            route_id: route_id.clone(),
        }),
        _ => Ok(()),
    }
}

fn valid_dish_fields(_: &Store<Dish>, ctx: &mut DishContext) -> Result<(), DomainError> {
    let fields = parse_dish_fields(&ctx.data)
        .ok_or_else(|| DomainError::ValidationFailure(NEW_DISH_MESSAGE.to_string()))?;
    ctx.fields = Some(fields);
    Ok(())
}

fn parse_dish_fields(data: &Value) -> Option<DishFields> {
    Some(DishFields {
        name: non_empty_str(data, "name")?,
        description: non_empty_str(data, "description")?,
        price: positive_integer(&data["price"])?,
        image_url: non_empty_str(data, "image_url")?,
    })
}
