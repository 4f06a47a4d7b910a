use std::sync::Arc;

use crate::application::dish_service::DishService;
use crate::application::order_service::OrderService;
use crate::config::{AppConfig, IdStrategy};
use crate::domain::dish::Dish;
use crate::domain::order::Order;
use crate::domain::ports::IdGenerator;
use crate::infrastructure::id_gen::{SequentialIdGenerator, UuidIdGenerator};
use crate::infrastructure::memory_repo::InMemoryRepository;
use crate::infrastructure::seed::{Seed, SeedError};

/// Shared application state handed to every request handler.
pub struct AppState {
    pub dishes: DishService,
    pub orders: OrderService,
}

impl AppState {
    pub fn new(seed: Seed, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            dishes: DishService::new(
                Box::new(InMemoryRepository::<Dish>::with_records(seed.dishes)),
                ids.clone(),
            ),
            orders: OrderService::new(
                Box::new(InMemoryRepository::<Order>::with_records(seed.orders)),
                ids,
            ),
        }
    }

    /// Builds the in-memory state described by `config`, loading the seed file
    /// when one is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self, SeedError> {
        let seed = match &config.seed_file {
            Some(path) => {
                let seed = Seed::load(path)?;
                log::info!(
                    "Loaded {} dishes and {} orders from {}",
                    seed.dishes.len(),
                    seed.orders.len(),
                    path.display()
                );
                seed
            }
            None => Seed::default(),
        };
        Ok(Self::seeded(seed, config.id_strategy))
    }

    /// Builds state from `seed` with an id generator of the given strategy.
    ///
    /// Both collections share one generator, so a sequential counter starts
    /// past every numeric id already present in the seed.
    pub fn seeded(seed: Seed, strategy: IdStrategy) -> Self {
        let ids: Arc<dyn IdGenerator> = match strategy {
            IdStrategy::Uuid => Arc::new(UuidIdGenerator),
            IdStrategy::Sequential => Arc::new(SequentialIdGenerator::after(
                seed.dishes
                    .iter()
                    .map(|d| &d.id)
                    .chain(seed.orders.iter().map(|o| &o.id)),
            )),
        };
        Self::new(seed, ids)
    }
}
