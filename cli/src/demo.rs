use std::io::Write;

use ordheap::{AnyHeap, HeapKind, MaxHeap, MinHeap};

use crate::error::CliError;

/// Fills a min heap and a max heap with `1..=count` and drains them in lockstep.
#[tracing::instrument(skip(out))]
pub fn run_demo(count: i64, out: &mut impl Write) -> Result<(), CliError> {
    let mut min_heap: MinHeap = MinHeap::new();
    let mut max_heap: MaxHeap = MaxHeap::new();
    for value in 1..=count {
        min_heap.push(value);
        max_heap.push(value);
    }

    if max_heap.is_empty() {
        writeln!(out, "Nothing to show, heaps are empty")?;
        return Ok(());
    }
    writeln!(out, "Max in max heap: {}", max_heap.peek()?)?;
    writeln!(out, "Min in min heap: {}", min_heap.peek()?)?;
    while !max_heap.is_empty() {
        writeln!(out, "Min: {} and max: {}", min_heap.pop()?, max_heap.pop()?)?;
    }
    Ok(())
}

#[tracing::instrument(skip(values, out), fields(len = values.len()))]
pub fn run_drain(kind: HeapKind, values: Vec<i64>, out: &mut impl Write) -> Result<(), CliError> {
    let heap = AnyHeap::build(kind, values);
    tracing::debug!(top = ?heap.peek().ok(), "heap built");
    let sorted: Vec<String> = heap.into_sorted_vec().iter().map(i64::to_string).collect();
    writeln!(out, "{}", sorted.join(" "))?;
    Ok(())
}
