use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{BlockId, PageId};
use crate::order_key::OrderKey;

/// The singleton top-level container. Mutated in place, never destroyed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkspaceMeta {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Colored label attached to a page.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag {
    pub label: String,
    pub color: String,
}

/// A titled node in the workspace's page forest.
///
/// `parent_id`, when set, always names a live page; the forest is kept acyclic
/// by the store. `is_expanded` is sidebar display state, not document content.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub parent_id: Option<PageId>,
    pub created_at: DateTime<Utc>,
    pub is_expanded: bool,
    pub icon: Option<String>,
    pub tags: Vec<Tag>,
}

/// Closed set of block kinds the editor can render.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockKind {
    Text,
    Heading,
    Todo,
    Image,
    Toggle,
    Divider,
    Code,
    Brief,
}

/// The atomic editable unit of a page.
///
/// `checked` is meaningful only for todo blocks, `src` for images, `language`
/// for code, and `is_expanded`/`children` for toggles. `page_id` and
/// `parent_block_id` are fixed at creation. Sibling order within a
/// `(page_id, parent_block_id)` group is `(order, id)`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub content: String,
    pub checked: bool,
    pub src: Option<String>,
    pub language: Option<String>,
    pub is_expanded: bool,
    pub children: Vec<BlockId>,
    pub page_id: PageId,
    pub parent_block_id: Option<BlockId>,
    pub order: OrderKey,
}

/// Field-wise patch for [`crate::DocumentStore::update_block`]: `Some` fields
/// replace, `None` fields keep the current value. Ownership (`page_id`,
/// `parent_block_id`) and ordering are not patchable.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlockPatch {
    pub content: Option<String>,
    pub kind: Option<BlockKind>,
    pub checked: Option<bool>,
    pub src: Option<String>,
    pub language: Option<String>,
    pub is_expanded: Option<bool>,
}

impl BlockPatch {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.kind.is_none()
            && self.checked.is_none()
            && self.src.is_none()
            && self.language.is_none()
            && self.is_expanded.is_none()
    }
}
