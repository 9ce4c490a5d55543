#![forbid(unsafe_code)]
//! Core document model for a block-based note workspace: a forest of pages,
//! ordered content blocks per page, and the mutation surface a presentation
//! layer drives. No rendering, no persistence, no I/O — hosts read snapshots
//! and invoke operations synchronously.

pub mod error;
pub mod events;
pub mod ids;
pub mod model;
pub mod order_key;
pub mod query;
pub mod store;
pub mod traits;

pub use error::{Error, Result};
pub use events::Event;
pub use ids::{BlockId, PageId};
pub use model::{Block, BlockKind, BlockPatch, Page, Tag, WorkspaceMeta};
pub use order_key::OrderKey;
pub use query::{children_of, descendants_of, has_children};
pub use store::{DocumentSnapshot, DocumentStore};
pub use traits::{Clock, FixedClock, IdProvider, RandomIds, SequentialIds, SystemClock};
