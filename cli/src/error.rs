use ordheap::HeapError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Heap(#[from] HeapError),
}
