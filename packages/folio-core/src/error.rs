use thiserror::Error;

use crate::ids::{BlockId, PageId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown page: {0}")]
    UnknownPage(PageId),
    #[error("unknown block: {0}")]
    UnknownBlock(BlockId),
    #[error("block {0} is not a toggle")]
    NotAToggle(BlockId),
    #[error("page {page} cannot move under {parent}: it is an ancestor of the target")]
    WouldCycle { page: PageId, parent: PageId },
    #[error("block {0} does not belong to the target sibling group")]
    ForeignSibling(BlockId),
    #[error("invalid order key: {0}")]
    InvalidOrderKey(String),
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
}
