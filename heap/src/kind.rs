use crate::error::HeapError;
use crate::heap::{MaxHeap, MinHeap};
use crate::order::HeapKind;

/// Heap whose ordering is picked at runtime, for callers that only learn the [`HeapKind`] from
/// configuration or user input.
#[derive(Debug, Clone)]
pub enum AnyHeap<T: Ord> {
    Min(MinHeap<T>),
    Max(MaxHeap<T>),
}

impl<T: Ord> AnyHeap<T> {
    pub fn new(kind: HeapKind) -> Self {
        match kind {
            HeapKind::Min => Self::Min(MinHeap::new()),
            HeapKind::Max => Self::Max(MaxHeap::new()),
        }
    }

    pub fn build(kind: HeapKind, values: Vec<T>) -> Self {
        match kind {
            HeapKind::Min => Self::Min(MinHeap::build(values)),
            HeapKind::Max => Self::Max(MaxHeap::build(values)),
        }
    }

    pub fn kind(&self) -> HeapKind {
        match self {
            Self::Min(_) => HeapKind::Min,
            Self::Max(_) => HeapKind::Max,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Min(h) => h.len(),
            Self::Max(h) => h.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn peek(&self) -> Result<&T, HeapError> {
        match self {
            Self::Min(h) => h.peek(),
            Self::Max(h) => h.peek(),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn push(&mut self, item: T) {
        match self {
            Self::Min(h) => h.push(item),
            Self::Max(h) => h.push(item),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn pop(&mut self) -> Result<T, HeapError> {
        match self {
            Self::Min(h) => h.pop(),
            Self::Max(h) => h.pop(),
        }
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        match self {
            Self::Min(h) => h.into_sorted_vec(),
            Self::Max(h) => h.into_sorted_vec(),
        }
    }
}

impl<T: Ord> From<MinHeap<T>> for AnyHeap<T> {
    fn from(heap: MinHeap<T>) -> Self {
        Self::Min(heap)
    }
}

impl<T: Ord> From<MaxHeap<T>> for AnyHeap<T> {
    fn from(heap: MaxHeap<T>) -> Self {
        Self::Max(heap)
    }
}
