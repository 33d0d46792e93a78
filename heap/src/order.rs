//! Ordering strategies a [`Heap`](crate::heap::Heap) is parameterised over.
//!
//! A strategy answers one question: should `a` sit above `b` in the tree. Everything else about
//! the heap (storage, sifting, building) is shared between strategies.
use std::fmt;
use strum::{Display, EnumString};

pub trait HeapOrder<T> {
    /// Returns true when `a` must be an ancestor of `b`. Must be a strict ordering: equal
    /// elements never precede one another.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element on top
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MinOrder;

impl<T: Ord> HeapOrder<T> for MinOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element on top
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MaxOrder;

impl<T: Ord> HeapOrder<T> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Caller supplied predicate, e.g. ordering structs by a single field
#[derive(Clone, Copy)]
pub struct OrderBy<F>(pub F);

impl<T, F> HeapOrder<T> for OrderBy<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for OrderBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OrderBy").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HeapKind {
    Min,
    Max,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_min_and_max_are_inverse_strict_orders() {
        assert!(MinOrder.precedes(&1, &2));
        assert!(!MinOrder.precedes(&2, &1));
        assert!(!MinOrder.precedes(&2, &2));

        assert!(MaxOrder.precedes(&2, &1));
        assert!(!MaxOrder.precedes(&1, &2));
        assert!(!MaxOrder.precedes(&2, &2));
    }

    #[test]
    fn test_order_by_closure() {
        let by_magnitude = OrderBy(|a: &i64, b: &i64| a.abs() < b.abs());
        assert!(by_magnitude.precedes(&-1, &2));
        assert!(!by_magnitude.precedes(&-3, &3));
    }

    #[test]
    fn test_heap_kind_parsing() {
        assert_eq!(HeapKind::from_str("min").unwrap(), HeapKind::Min);
        assert_eq!(HeapKind::from_str("MAX").unwrap(), HeapKind::Max);
        assert!(HeapKind::from_str("median").is_err());
        assert_eq!(HeapKind::Max.to_string(), "max");
    }
}
