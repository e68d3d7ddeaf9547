//! Arena of named entities with a meaning-equal name index

use mixcheck_domain::names::normalize;
use std::collections::HashMap;

/// Entities of one kind, addressed by position and looked up by name
///
/// The index is keyed by the normalized name, so two meaning-equal names can
/// never occupy two slots. The first spelling inserted is the one kept.
#[derive(Debug, Clone)]
pub(crate) struct NamedArena<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> NamedArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Position of the entity whose name is meaning-equal to `name`
    pub(crate) fn find(&self, name: &str) -> Option<usize> {
        self.index.get(&normalize(name)).copied()
    }

    /// Insert a new entity under `name`
    ///
    /// Returns `None` and drops `item` if the name is already taken.
    pub(crate) fn insert(&mut self, name: &str, item: T) -> Option<usize> {
        let key = normalize(name);
        if self.index.contains_key(&key) {
            return None;
        }
        let position = self.items.len();
        self.items.push(item);
        self.index.insert(key, position);
        Some(position)
    }

    /// Position of the entity named `name`, creating it with `make` if absent
    pub(crate) fn find_or_insert_with(&mut self, name: &str, make: impl FnOnce() -> T) -> usize {
        let key = normalize(name);
        if let Some(&position) = self.index.get(&key) {
            return position;
        }
        let position = self.items.len();
        self.items.push(make());
        self.index.insert(key, position);
        position
    }

    pub(crate) fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.items.get_mut(position)
    }

    pub(crate) fn by_name(&self, name: &str) -> Option<&T> {
        self.find(name).and_then(|position| self.items.get(position))
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}
