use crate::application::app_error::AppError;
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug)]
pub struct Id<T> {
    pub value: i64,
    _marker: PhantomData<T>
}

impl<T> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData
        }
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Id::new(self.value)
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> TryFrom<&str> for Id<T> {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let id = value
            .parse::<i64>()
            .map_err(|e| AppError::InvalidId(format!("Invalid id `{}`: {}", value, e)))?;
        Ok(Id::new(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::id::Id;

    #[derive(Debug)]
    struct TestEntity;

    #[test]
    fn test_id_new() {
        let id: Id<TestEntity> = Id::new(42);
        assert_eq!(id.value, 42)
    }

    #[test]
    fn test_id_try_from_valid_integer() {
        let id: Id<TestEntity> = "17".try_into().unwrap();
        assert_eq!(id.value, 17);
    }

    #[test]
    fn test_id_try_from_invalid_integer() {
        let result: Result<Id<TestEntity>, _> = "seventeen".try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_id_clone_does_not_require_clone_entity() {
        let id: Id<TestEntity> = Id::new(7);
        let cloned_id = id.clone();
        assert_eq!(id, cloned_id);
        assert_eq!(cloned_id.to_string(), "7");
    }
}
