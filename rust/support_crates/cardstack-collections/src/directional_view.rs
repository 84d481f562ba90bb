//! Forward and reverse traversal over indexable data.
//!
//! [`DirectionalView`] wraps anything that can expose its current contents as a
//! slice (see [`Iteratee`]) and remembers a single [`Direction`]. Every call to
//! [`DirectionalView::iter`] starts an independent [`Traversal`] that captures
//! the slice and the direction at that moment; later direction changes apply to
//! traversals started afterwards.
//!
//! Direction changes take `&mut self` while traversals borrow the view, so a
//! view cannot be flipped while one of its traversals is still alive.

use std::iter::FusedIterator;

/// Access to the data a view should traverse.
///
/// The slice is requested anew at the start of each traversal, so an owner whose
/// contents change between traversals always exposes its current state.
pub trait Iteratee {
    type Item;

    fn iteratee(&self) -> &[Self::Item];
}

impl<T> Iteratee for [T] {
    type Item = T;

    fn iteratee(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Iteratee for [T; N] {
    type Item = T;

    fn iteratee(&self) -> &[T] {
        self
    }
}

impl<T> Iteratee for Vec<T> {
    type Item = T;

    fn iteratee(&self) -> &[T] {
        self
    }
}

impl<S: Iteratee + ?Sized> Iteratee for &S {
    type Item = S::Item;

    fn iteratee(&self) -> &[S::Item] {
        (**self).iteratee()
    }
}

impl<S: Iteratee + ?Sized> Iteratee for &mut S {
    type Item = S::Item;

    fn iteratee(&self) -> &[S::Item] {
        (**self).iteratee()
    }
}

impl<S: Iteratee + ?Sized> Iteratee for Box<S> {
    type Item = S::Item;

    fn iteratee(&self) -> &[S::Item] {
        (**self).iteratee()
    }
}

/// Traversal order of a [`DirectionalView`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn is_reverse(self) -> bool {
        self == Direction::Reverse
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Switching between forward and reverse traversal.
///
/// Both operations are idempotent.
pub trait ReverseIterable {
    /// Subsequent traversals go from the last element to the first.
    fn to_reverse_iterable(&mut self);

    /// Subsequent traversals go from the first element to the last.
    fn to_forward_iterable(&mut self);
}

/// A view over an [`Iteratee`] that traverses it forward (the default) or in
/// reverse, without copying the data.
///
/// # Examples
///
/// ```
/// use cardstack_collections::{DirectionalView, ReverseIterable};
///
/// let cards = vec!['a', 'b', 'c'];
/// let mut view = DirectionalView::new(&cards);
/// assert_eq!(view.iter().copied().collect::<String>(), "abc");
///
/// view.to_reverse_iterable();
/// assert_eq!(view.iter().copied().collect::<String>(), "cba");
/// ```
#[derive(Debug, Clone)]
pub struct DirectionalView<S> {
    source: S,
    direction: Direction,
}

impl<S> DirectionalView<S> {
    pub fn new(source: S) -> DirectionalView<S> {
        DirectionalView::with_direction(source, Direction::Forward)
    }

    pub fn with_direction(source: S, direction: Direction) -> DirectionalView<S> {
        DirectionalView { source, direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn is_reversed(&self) -> bool {
        self.direction.is_reverse()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the wrapped data. Changes become visible to the next
    /// traversal.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Iteratee> DirectionalView<S> {
    /// Starts a new traversal in the current direction.
    pub fn iter(&self) -> Traversal<'_, S::Item> {
        Traversal::new(self.source.iteratee(), self.direction)
    }

    pub fn len(&self) -> usize {
        self.source.iteratee().len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.iteratee().is_empty()
    }
}

impl<S> ReverseIterable for DirectionalView<S> {
    fn to_reverse_iterable(&mut self) {
        self.direction = Direction::Reverse;
    }

    fn to_forward_iterable(&mut self) {
        self.direction = Direction::Forward;
    }
}

impl<'a, S: Iteratee> IntoIterator for &'a DirectionalView<S> {
    type Item = &'a S::Item;
    type IntoIter = Traversal<'a, S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single pass over a slice in a fixed direction.
///
/// The slice, and therefore its length, is captured when the traversal starts.
/// `next_back` walks from the opposite end of the same direction.
#[derive(Debug)]
pub struct Traversal<'a, T> {
    items: &'a [T],
    direction: Direction,
    /// Lowest index not yet yielded.
    lo: usize,
    /// One past the highest index not yet yielded.
    hi: usize,
}

impl<'a, T> Traversal<'a, T> {
    pub fn new(items: &'a [T], direction: Direction) -> Traversal<'a, T> {
        Traversal {
            items,
            direction,
            lo: 0,
            hi: items.len(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    fn take_lo(&mut self) -> Option<&'a T> {
        if self.lo < self.hi {
            let item = &self.items[self.lo];
            self.lo += 1;
            Some(item)
        } else {
            None
        }
    }

    #[inline]
    fn take_hi(&mut self) -> Option<&'a T> {
        if self.lo < self.hi {
            self.hi -= 1;
            Some(&self.items[self.hi])
        } else {
            None
        }
    }
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Traversal {
            items: self.items,
            direction: self.direction,
            lo: self.lo,
            hi: self.hi,
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.direction {
            Direction::Forward => self.take_lo(),
            Direction::Reverse => self.take_hi(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.hi - self.lo;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Traversal<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        match self.direction {
            Direction::Forward => self.take_hi(),
            Direction::Reverse => self.take_lo(),
        }
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
