use std::fmt;

use thiserror::Error;

use super::id::RecordId;

/// Which collection a record belongs to. Used to build error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Dish,
    Order,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Dish => f.write_str("Dish"),
            RecordKind::Order => f.write_str("Order"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{kind} does not exist: {id}")]
    NotFound { kind: RecordKind, id: RecordId },

    #[error("{0}")]
    ValidationFailure(String),

    #[error("{kind} id does not match route id. {kind}: {body_id}, Route: {route_id}")]
    ConflictingIdentifier {
        kind: RecordKind,
        body_id: RecordId,
        route_id: RecordId,
    },

    #[error("{0}")]
    InvalidStateTransition(String),

    #[error("Can only delete orders while status is 'pending'.")]
    IneligibleForDeletion,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_kind_and_id() {
        let err = DomainError::NotFound {
            kind: RecordKind::Order,
            id: RecordId::new("17"),
        };
        assert_eq!(err.to_string(), "Order does not exist: 17");
    }

    #[test]
    fn conflicting_identifier_cites_both_ids() {
        let err = DomainError::ConflictingIdentifier {
            kind: RecordKind::Dish,
            body_id: RecordId::new("a"),
            route_id: RecordId::new("b"),
        };
        assert_eq!(
            err.to_string(),
            "Dish id does not match route id. Dish: a, Route: b"
        );
    }
}
