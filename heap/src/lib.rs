//! Binary min and max heaps built from a single engine.
//!
//! [`Heap`] holds its storage and an ordering strategy; [`MinHeap`] and [`MaxHeap`] are the same
//! engine with [`MinOrder`] and [`MaxOrder`] plugged in. [`AnyHeap`] picks between the two at
//! runtime.
pub mod error;
pub mod heap;
pub mod kind;
pub mod order;

pub use error::HeapError;
pub use heap::{DrainSorted, Heap, MaxHeap, MinHeap};
pub use kind::AnyHeap;
pub use order::{HeapKind, HeapOrder, MaxOrder, MinOrder, OrderBy};
