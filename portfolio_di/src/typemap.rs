use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

/// Heterogeneous map with at most one value per type.
#[derive(Debug, Default)]
pub struct TypeMap(HashMap<TypeId, Box<dyn Any>>);

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .and_then(|x| x.downcast_ref())
    }

    pub fn insert<T: 'static>(&mut self, x: T) {
        self.0.insert(TypeId::of::<T>(), Box::new(x));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_value_per_type() {
        let mut map = TypeMap::default();
        assert!(map.is_empty());

        map.insert(1u8);
        map.insert(2u8);
        map.insert("x");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get::<u8>(), Some(&2));
        assert_eq!(map.get::<&str>(), Some(&"x"));
        assert_eq!(map.get::<u16>(), None);
    }
}
