use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
}
