use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Invalid target count: {0} (a page must hold at least one item)")]
    InvalidTargetCount(usize),
}
