//! Guard chains that run ahead of a terminal handler.
//!
//! A chain is an ordered list of named checks over a store `S` and a
//! per-request context `C`. The first failing guard decides the error and no
//! later guard runs.

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::id::RecordId;
use crate::domain::ports::{Located, Record, Repository};

/// The store a resource's guards run against.
pub type Store<T> = dyn Repository<T>;

pub struct Guard<S: ?Sized, C> {
    pub name: &'static str,
    pub check: fn(&S, &mut C) -> Result<(), DomainError>,
}

pub struct GuardChain<S: ?Sized, C> {
    guards: Vec<Guard<S, C>>,
}

impl<S: ?Sized, C> GuardChain<S, C> {
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    pub fn guard(
        mut self,
        name: &'static str,
        check: fn(&S, &mut C) -> Result<(), DomainError>,
    ) -> Self {
        self.guards.push(Guard { name, check });
        self
    }

    pub fn run(&self, store: &S, ctx: &mut C) -> Result<(), DomainError> {
        for guard in &self.guards {
            if let Err(err) = (guard.check)(store, ctx) {
                log::debug!("guard `{}` rejected request: {}", guard.name, err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<S: ?Sized, C> Default for GuardChain<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// State shared by the guards and the terminal handler of one request.
#[derive(Debug)]
pub struct RequestContext<T, F> {
    pub route_id: Option<RecordId>,
    /// The raw `data` object from the request body, `Null` when absent.
    pub data: Value,
    pub found: Option<Located<T>>,
    pub fields: Option<F>,
}

impl<T, F> RequestContext<T, F> {
    pub fn new(data: Value) -> Self {
        Self {
            route_id: None,
            data,
            found: None,
            fields: None,
        }
    }

    pub fn for_route(route_id: RecordId, data: Value) -> Self {
        Self {
            route_id: Some(route_id),
            ..Self::new(data)
        }
    }

    pub fn route_id(&self) -> Result<&RecordId, DomainError> {
        self.route_id
            .as_ref()
            .ok_or_else(|| DomainError::Internal("request has no route id".to_string()))
    }

    pub fn take_found(&mut self) -> Result<Located<T>, DomainError> {
        self.found
            .take()
            .ok_or_else(|| DomainError::Internal("no record resolved for request".to_string()))
    }

    pub fn take_fields(&mut self) -> Result<F, DomainError> {
        self.fields
            .take()
            .ok_or_else(|| DomainError::Internal("request fields were not validated".to_string()))
    }
}

/// Resolves the route id to a stored record, or fails with `NotFound`.
pub fn record_exists<T: Record, F>(
    store: &Store<T>,
    ctx: &mut RequestContext<T, F>,
) -> Result<(), DomainError> {
    let id = ctx.route_id()?.clone();
    match store.find(&id)? {
        Some(found) => {
            ctx.found = Some(found);
            Ok(())
        }
        None => Err(DomainError::NotFound { kind: T::KIND, id }),
    }
}
