#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{BlockId, PageId};

/// Structural change notifications queued by the store and drained by the
/// presentation layer.
///
/// `BlockCreated::after` carries the created-as-successor-of signal a
/// renderer needs to direct keyboard focus after an Enter keystroke; the
/// store itself never touches focus. Events are notifications only, not a
/// replayable log.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Event {
    PageCreated { page: PageId },
    PagesDeleted { pages: Vec<PageId> },
    SelectionChanged { page: Option<PageId> },
    BlockCreated { block: BlockId, after: Option<BlockId> },
    BlocksDeleted { blocks: Vec<BlockId> },
}
