use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::domain::errors::{DomainError, RecordKind};
use crate::domain::id::RecordId;
use crate::domain::order::{LineItem, Order, OrderFields, OrderStatus};
use crate::domain::ports::IdGenerator;

use super::pipeline::{record_exists, GuardChain, RequestContext, Store};
use super::validation::{narrow, non_empty_str, positive_integer};

type OrderContext = RequestContext<Order, OrderFields>;

const NEW_ORDER_MESSAGE: &str =
    "All new orders must have properties: dishes, quantity, mobileNumber, deliverTo.";
const INVALID_STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
const DELIVERED_MESSAGE: &str = "A delivered order cannot be changed";

/// Update eligibility rules, evaluated in order. The first rule returning an
/// error rejects the request.
type UpdateRule = fn(&OrderContext) -> Option<DomainError>;

const UPDATE_RULES: [(&str, UpdateRule); 3] = [
    ("order-id-matches-route", id_conflict),
    ("valid-status", invalid_status),
    ("not-delivered", delivered_is_final),
];

pub struct OrderService {
    store: RwLock<Box<Store<Order>>>,
    ids: Arc<dyn IdGenerator>,
    read_chain: GuardChain<Store<Order>, OrderContext>,
    create_chain: GuardChain<Store<Order>, OrderContext>,
    update_chain: GuardChain<Store<Order>, OrderContext>,
    delete_chain: GuardChain<Store<Order>, OrderContext>,
}

impl OrderService {
    pub fn new(store: Box<Store<Order>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: RwLock::new(store),
            ids,
            read_chain: GuardChain::new()
                .guard("order-exists", record_exists::<Order, OrderFields>),
            create_chain: GuardChain::new().guard("valid-order-fields", valid_order_fields),
            update_chain: GuardChain::new()
                .guard("order-exists", record_exists::<Order, OrderFields>)
                .guard("order-update-eligible", order_update_eligible)
                .guard("valid-order-fields", valid_order_fields),
            delete_chain: GuardChain::new()
                .guard("order-exists", record_exists::<Order, OrderFields>)
                .guard("order-is-pending", order_is_pending),
        }
    }

    pub fn list(&self) -> Result<Vec<Order>, DomainError> {
        self.read_store()?.list()
    }

    pub fn read(&self, id: RecordId) -> Result<Order, DomainError> {
        let store = self.read_store()?;
        let mut ctx = OrderContext::for_route(id, Value::Null);
        self.read_chain.run(&**store, &mut ctx)?;
        Ok(ctx.take_found()?.record)
    }

    pub fn create(&self, data: Value) -> Result<Order, DomainError> {
        let mut store = self.write_store()?;
        let mut ctx = OrderContext::new(data);
        self.create_chain.run(&**store, &mut ctx)?;

        let order = ctx
            .take_fields()?
            .into_order(self.ids.next_id(), OrderStatus::Pending);
        store.insert(order.clone())?;
        log::info!("created order {}", order.id);
        Ok(order)
    }

    /// The new status is read from the raw request body rather than from the
    /// validated field set.
    pub fn update(&self, id: RecordId, data: Value) -> Result<Order, DomainError> {
        let mut store = self.write_store()?;
        let mut ctx = OrderContext::for_route(id, data);
        self.update_chain.run(&**store, &mut ctx)?;

        let found = ctx.take_found()?;
        let status = requested_status(&ctx.data)
            .ok_or_else(|| DomainError::InvalidStateTransition(INVALID_STATUS_MESSAGE.to_string()))?;
        let order = ctx.take_fields()?.into_order(found.record.id, status);
        store.replace(found.position, order.clone())?;
        log::info!(
            "updated order {} ({} -> {})",
            order.id,
            found.record.status,
            order.status
        );
        Ok(order)
    }

    pub fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        let mut store = self.write_store()?;
        let mut ctx = OrderContext::for_route(id, Value::Null);
        self.delete_chain.run(&**store, &mut ctx)?;

        let found = ctx.take_found()?;
        let removed = store.remove(found.position)?;
        log::info!("deleted order {}", removed.id);
        Ok(())
    }

    fn read_store(&self) -> Result<RwLockReadGuard<'_, Box<Store<Order>>>, DomainError> {
        self.store
            .read()
            .map_err(|_| DomainError::Internal("order store lock poisoned".to_string()))
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, Box<Store<Order>>>, DomainError> {
        self.store
            .write()
            .map_err(|_| DomainError::Internal("order store lock poisoned".to_string()))
    }
}

fn requested_status(data: &Value) -> Option<OrderStatus> {
    data["status"].as_str()?.parse().ok()
}

fn id_conflict(ctx: &OrderContext) -> Option<DomainError> {
    let route_id = ctx.route_id.as_ref()?;
    let body_id = RecordId::from_json(&ctx.data["id"])?;
    (body_id != *route_id).then(|| DomainError::ConflictingIdentifier {
        kind: RecordKind::Order,
        body_id,
        route_id: route_id.clone(),
    })
}

fn invalid_status(ctx: &OrderContext) -> Option<DomainError> {
    requested_status(&ctx.data)
        .is_none()
        .then(|| DomainError::InvalidStateTransition(INVALID_STATUS_MESSAGE.to_string()))
}

// Rejects both a move into `delivered` and any change to an order already there.
fn delivered_is_final(ctx: &OrderContext) -> Option<DomainError> {
    let target_terminal = requested_status(&ctx.data).is_some_and(|s| s.is_terminal());
    let current_terminal = ctx
        .found
        .as_ref()
        .is_some_and(|found| found.record.status.is_terminal());
    (target_terminal || current_terminal)
        .then(|| DomainError::InvalidStateTransition(DELIVERED_MESSAGE.to_string()))
}

fn order_update_eligible(_: &Store<Order>, ctx: &mut OrderContext) -> Result<(), DomainError> {
    for (name, rule) in UPDATE_RULES {
        if let Some(err) = rule(ctx) {
            log::debug!("update rule `{}` matched", name);
            return Err(err);
        }
    }
    Ok(())
}

fn order_is_pending(_: &Store<Order>, ctx: &mut OrderContext) -> Result<(), DomainError> {
    let found = ctx
        .found
        .as_ref()
        .ok_or_else(|| DomainError::Internal("no record resolved for request".to_string()))?;
    if found.record.status.allows_deletion() {
        Ok(())
    } else {
        Err(DomainError::IneligibleForDeletion)
    }
}

fn valid_order_fields(_: &Store<Order>, ctx: &mut OrderContext) -> Result<(), DomainError> {
    match parse_order_fields(&ctx.data) {
        Some(fields) => {
            ctx.fields = Some(fields);
            Ok(())
        }
        None => {
            let submitted = narrow(&ctx.data, &["deliverTo", "mobileNumber", "dishes"]);
            Err(DomainError::ValidationFailure(format!(
                "{} Submitted data: {}",
                NEW_ORDER_MESSAGE, submitted
            )))
        }
    }
}

fn parse_order_fields(data: &Value) -> Option<OrderFields> {
    let deliver_to = non_empty_str(data, "deliverTo")?;
    let mobile_number = non_empty_str(data, "mobileNumber")?;
    let items = data["dishes"].as_array().filter(|items| !items.is_empty())?;
    let dishes = items
        .iter()
        .map(|item| {
            let quantity = positive_integer(&item["quantity"])?;
            Some(LineItem {
                dish_id: RecordId::from_json(&item["dishId"]),
                quantity,
            })
        })
        .collect::<Option<Vec<_>>>()?;
    Some(OrderFields {
        deliver_to,
        mobile_number,
        dishes,
    })
}
