//! `OrderedSet`: a set that remembers the order in which values were first inserted.

use std::hash::Hash;

use ahash::AHashSet;

/// A set of unique values that iterates in first-insertion order.
///
/// Backed by a `Vec` holding the order and a hash set answering membership
/// queries. Re-inserting a present value is a no-op and does not move it.
///
/// # Examples
///
/// ```
/// use cardstack_collections::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.insert(3);
/// set.insert(1);
/// set.insert(3);
/// assert_eq!(set.as_slice(), &[3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    values: Vec<T>,
    members: AHashSet<T>,
}

impl<T> OrderedSet<T>
where
    T: Copy + Eq + Hash,
{
    pub fn new() -> OrderedSet<T> {
        OrderedSet {
            values: Vec::new(),
            members: AHashSet::new(),
        }
    }

    /// Adds `value` unless already present. Returns `true` if it was added.
    pub fn insert(&mut self, value: T) -> bool {
        let added = self.members.insert(value);
        if added {
            self.values.push(value);
        }
        added
    }

    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }
}

impl<T> OrderedSet<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Copy + Eq + Hash,
{
    fn default() -> Self {
        OrderedSet::new()
    }
}

/// Two sets are equal when they hold the same values in the same order.
impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T> Extend<T> for OrderedSet<T>
where
    T: Copy + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Copy + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
