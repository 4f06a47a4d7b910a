use crate::domain::errors::DomainError;
use crate::domain::id::RecordId;
use crate::domain::ports::{Located, Record, Repository};

/// Vec-backed repository. Insertion order is the listing order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn find(&self, id: &RecordId) -> Result<Option<Located<T>>, DomainError> {
        Ok(self
            .records
            .iter()
            .position(|r| r.id() == id)
            .map(|position| Located {
                position,
                record: self.records[position].clone(),
            }))
    }

    fn list(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.records.clone())
    }

    fn insert(&mut self, record: T) -> Result<(), DomainError> {
        if self.records.iter().any(|r| r.id() == record.id()) {
            return Err(DomainError::Internal(format!(
                "{} id {} already exists",
                T::KIND,
                record.id()
            )));
        }
        self.records.push(record);
        Ok(())
    }

    fn replace(&mut self, position: usize, record: T) -> Result<(), DomainError> {
        let slot = self.records.get_mut(position).ok_or_else(|| {
            DomainError::Internal(format!("{} position {} out of range", T::KIND, position))
        })?;
        *slot = record;
        Ok(())
    }

    fn remove(&mut self, position: usize) -> Result<T, DomainError> {
        if position >= self.records.len() {
            return Err(DomainError::Internal(format!(
                "{} position {} out of range",
                T::KIND,
                position
            )));
        }
        Ok(self.records.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::Dish;

    fn dish(id: &str) -> Dish {
        Dish {
            id: RecordId::new(id),
            name: format!("dish {id}"),
            description: "desc".to_string(),
            price: 10,
            image_url: "http://img".to_string(),
        }
    }

    #[test]
    fn find_reports_position() {
        let repo = InMemoryRepository::with_records(vec![dish("a"), dish("b"), dish("c")]);

        let found = repo.find(&RecordId::new("b")).unwrap().expect("b exists");
        assert_eq!(found.position, 1);
        assert_eq!(found.record, dish("b"));

        assert!(repo.find(&RecordId::new("z")).unwrap().is_none());
    }

    #[test]
    fn insert_appends_in_order() {
        let mut repo = InMemoryRepository::new();
        repo.insert(dish("a")).unwrap();
        repo.insert(dish("b")).unwrap();

        let ids: Vec<_> = repo.list().unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![RecordId::new("a"), RecordId::new("b")]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut repo = InMemoryRepository::with_records(vec![dish("1")]);

        let err = repo.insert(dish("1")).unwrap_err();

        assert!(matches!(err, DomainError::Internal(ref m) if m == "Dish id 1 already exists"));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn replace_keeps_position() {
        let mut repo = InMemoryRepository::with_records(vec![dish("a"), dish("b"), dish("c")]);
        let mut updated = dish("b");
        updated.name = "renamed".to_string();

        repo.replace(1, updated.clone()).unwrap();

        assert_eq!(repo.list().unwrap()[1], updated);
        assert_eq!(repo.list().unwrap().len(), 3);
    }

    #[test]
    fn remove_returns_record() {
        let mut repo = InMemoryRepository::with_records(vec![dish("a"), dish("b")]);

        let removed = repo.remove(0).unwrap();

        assert_eq!(removed, dish("a"));
        assert_eq!(repo.list().unwrap(), vec![dish("b")]);
    }

    #[test]
    fn out_of_range_positions_are_internal_errors() {
        let mut repo: InMemoryRepository<Dish> = InMemoryRepository::new();
        assert!(matches!(repo.remove(0), Err(DomainError::Internal(_))));
        assert!(matches!(
            repo.replace(3, dish("x")),
            Err(DomainError::Internal(_))
        ));
    }
}
