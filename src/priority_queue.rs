//! Ordered collection used for handler queues.
//!
//! Values are kept sorted by ascending priority; values sharing a priority keep
//! their insertion order.

/// A small priority-ordered collection.
///
/// Iteration yields values from the lowest priority value to the highest.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: Vec<(i32, T)>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` after every value whose priority is lower or equal.
    pub fn insert(&mut self, value: T, priority: i32) {
        let at = self.items.partition_point(|(p, _)| *p <= priority);
        self.items.insert(at, (priority, value));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|(_, value)| value)
    }

    /// Values paired with their priority, in queue order.
    pub fn iter_with_priority(&self) -> impl Iterator<Item = (i32, &T)> {
        self.items.iter().map(|(priority, value)| (*priority, value))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into_iter().map(|(_, value)| value).collect()
    }
}

impl<T: PartialEq> PriorityQueue<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.iter().any(|(_, v)| v == value)
    }

    /// Remove the first entry equal to `value`. Returns whether one was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|(_, v)| v == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

fn into_value<T>((_, value): (i32, T)) -> T {
    value
}

fn value_ref<T>((_, value): &(i32, T)) -> &T {
    value
}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = std::iter::Map<std::vec::IntoIter<(i32, T)>, fn((i32, T)) -> T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().map(into_value as fn((i32, T)) -> T)
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (i32, T)>, fn(&'a (i32, T)) -> &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().map(value_ref as fn(&'a (i32, T)) -> &'a T)
    }
}
