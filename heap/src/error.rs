use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum HeapError {
    #[error("Cannot remove an item from an empty heap")]
    Underflow,
}
