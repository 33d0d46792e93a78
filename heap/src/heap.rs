use crate::error::HeapError;
use crate::order::{HeapOrder, MaxOrder, MinOrder};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::mem;

/// A binary heap stored as a dense `Vec` laid out as a complete binary tree: the element at `i`
/// has children at `2i + 1` and `2i + 2`.
///
/// The heap owns a comparator `O` and every ordering decision goes through it, so the min and max
/// variants are the same code with a different strategy plugged in.
///
/// | push          | pop           | peek   | build  |
/// |---------------|---------------|--------|--------|
/// | *O*(log *n*)  | *O*(log *n*)  | *O*(1) | *O*(n) |
#[derive(Clone)]
pub struct Heap<T, O = MinOrder> {
    data: Vec<T>,
    order: O,
}

/// Root holds the minimum
pub type MinHeap<T = i64> = Heap<T, MinOrder>;
/// Root holds the maximum
pub type MaxHeap<T = i64> = Heap<T, MaxOrder>;

impl<T, O> Heap<T, O>
where
    O: HeapOrder<T> + Default,
{
    pub fn new() -> Self {
        Self::with_order(O::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order: O::default(),
        }
    }

    /// Takes ownership of an unordered vector and heapifies it in place.
    pub fn build(values: Vec<T>) -> Self {
        Self::build_with_order(values, O::default())
    }
}

impl<T, O> Heap<T, O>
where
    O: HeapOrder<T>,
{
    pub fn with_order(order: O) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    #[tracing::instrument(skip_all, fields(len = values.len()))]
    pub fn build_with_order(values: Vec<T>, order: O) -> Self {
        let mut heap = Self {
            data: values,
            order,
        };
        heap.rebuild();
        tracing::trace!("heap built");
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Same as [`Heap::len`]
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the top of the heap without removing it.
    #[tracing::instrument(skip_all)]
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or_else(|| {
            tracing::debug!("peek on empty heap");
            HeapError::Empty
        })
    }

    #[tracing::instrument(skip_all)]
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the top of the heap.
    #[tracing::instrument(skip_all)]
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.take_top().ok_or_else(|| {
            tracing::debug!("pop on empty heap");
            HeapError::Empty
        })
    }

    // pop without the empty heap event, for callers that stop on emptiness
    fn take_top(&mut self) -> Option<T> {
        let mut top = self.data.pop()?;
        // the old last element takes the root's place and sinks back down
        if let Some(root) = self.data.first_mut() {
            mem::swap(root, &mut top);
            self.sift_down(0);
        }
        Some(top)
    }

    /// Iterates over the stored elements in storage order, which is not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap returning elements in the order `pop` would yield them: ascending for a
    /// min heap, descending for a max heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len());
        while let Some(value) = self.take_top() {
            result.push(value);
        }
        result
    }

    /// Pops every element lazily. Elements not consumed stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { inner: self }
    }

    /// Checks every parent/child pair against the ordering
    pub fn is_valid(&self) -> bool {
        (1..self.data.len())
            .all(|i| !self.order.precedes(&self.data[i], &self.data[parent_of(i)]))
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = parent_of(pos);
            if !self.order.precedes(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = left_child_of(pos);
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < len && self.order.precedes(&self.data[right], &self.data[left]) {
                best = right;
            }
            if !self.order.precedes(&self.data[best], &self.data[pos]) {
                break;
            }
            self.data.swap(pos, best);
            pos = best;
        }
    }

    // sift down every non leaf, last one first
    fn rebuild(&mut self) {
        for pos in (0..self.data.len() / 2).rev() {
            self.sift_down(pos);
        }
    }
}

#[inline(always)]
fn parent_of(idx: usize) -> usize {
    (idx - 1) / 2
}

#[inline(always)]
fn left_child_of(idx: usize) -> usize {
    2 * idx + 1
}

pub struct DrainSorted<'a, T, O: HeapOrder<T>> {
    inner: &'a mut Heap<T, O>,
}

impl<T, O: HeapOrder<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take_top()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T, O: HeapOrder<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T, O> Default for Heap<T, O>
where
    O: HeapOrder<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, O: fmt::Debug> fmt::Debug for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("order", &self.order)
            .field("data", &self.data)
            .finish()
    }
}

impl<T, O> From<Vec<T>> for Heap<T, O>
where
    O: HeapOrder<T> + Default,
{
    fn from(values: Vec<T>) -> Self {
        Self::build(values)
    }
}

impl<T, O> FromIterator<T> for Heap<T, O>
where
    O: HeapOrder<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a Heap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Serialized as the bare element sequence. Deserializing always rebuilds so the invariant holds
// whatever order the input arrives in.
#[cfg(feature = "serde")]
impl<T: Serialize, O> Serialize for Heap<T, O> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.data.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, O> Deserialize<'de> for Heap<T, O>
where
    T: Deserialize<'de>,
    O: HeapOrder<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::build(values))
    }
}
