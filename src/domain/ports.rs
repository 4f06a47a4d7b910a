use super::errors::{DomainError, RecordKind};
use super::id::RecordId;

/// A record stored in one of the service's collections.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: RecordKind;

    fn id(&self) -> &RecordId;
}

/// A record together with its position in the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub position: usize,
    pub record: T,
}

/// Ordered, id-keyed storage for one record type.
///
/// Positions returned by `find` stay valid only while the caller holds
/// exclusive access to the repository.
pub trait Repository<T: Record>: Send + Sync + 'static {
    fn find(&self, id: &RecordId) -> Result<Option<Located<T>>, DomainError>;
    fn list(&self) -> Result<Vec<T>, DomainError>;
    fn insert(&mut self, record: T) -> Result<(), DomainError>;
    fn replace(&mut self, position: usize, record: T) -> Result<(), DomainError>;
    fn remove(&mut self, position: usize) -> Result<T, DomainError>;
}

pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> RecordId;
}
