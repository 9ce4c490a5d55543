use std::collections::{HashMap, HashSet};

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::events::Event;
use crate::ids::{BlockId, PageId};
use crate::model::{Block, BlockKind, BlockPatch, Page, Tag, WorkspaceMeta};
use crate::order_key::OrderKey;
use crate::traits::{Clock, IdProvider};

const PAGE_PREFIX: &str = "page";
const BLOCK_PREFIX: &str = "block";
const WORKSPACE_PREFIX: &str = "workspace";

const DEFAULT_PAGE_TITLE: &str = "Untitled";
const DEFAULT_PAGE_ICON: &str = "📄";
const DEFAULT_WORKSPACE_NAME: &str = "Workspace";
const DEFAULT_WORKSPACE_ICON: &str = "W";

/// Viewport below which selecting a page collapses the sidebar.
const SIDEBAR_SELECT_COLLAPSE_WIDTH: u32 = 768;
/// Viewport below which a resize collapses the sidebar.
const SIDEBAR_RESIZE_COLLAPSE_WIDTH: u32 = 1024;
/// Viewport below which a resize hides the right panel.
const RIGHT_PANEL_HIDE_WIDTH: u32 = 1280;
/// Assumed width until the host reports one (headless embeddings never do).
const DEFAULT_VIEWPORT_WIDTH: u32 = 1440;

/// Owned, immutable view of the full document state at one instant.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentSnapshot {
    pub workspace: WorkspaceMeta,
    /// All pages in storage order.
    pub pages: Vec<Page>,
    /// All blocks, page by page in storage order, document order within a page
    /// (toggle children follow their parent).
    pub blocks: Vec<Block>,
    pub selected_page_id: Option<PageId>,
    pub sidebar_collapsed: bool,
    pub right_panel_visible: bool,
}

/// The sole owner and mutator of workspace, pages, and blocks.
///
/// One store per session, constructed at session start and passed by
/// reference to whatever needs it. All operations are synchronous and either
/// fully apply or return an error without touching state; renderers consume
/// cloned snapshots, never live references.
pub struct DocumentStore<I, C>
where
    I: IdProvider,
    C: Clock,
{
    ids: I,
    clock: C,
    workspace: WorkspaceMeta,
    pages: HashMap<PageId, Page>,
    page_order: Vec<PageId>,
    blocks: HashMap<BlockId, Block>,
    selected: Option<PageId>,
    sidebar_collapsed: bool,
    right_panel_visible: bool,
    viewport_width: u32,
    events: Vec<Event>,
}

impl<I, C> DocumentStore<I, C>
where
    I: IdProvider,
    C: Clock,
{
    pub fn new(mut ids: I, clock: C) -> Self {
        let workspace = WorkspaceMeta {
            id: ids.next_id(WORKSPACE_PREFIX),
            name: DEFAULT_WORKSPACE_NAME.to_string(),
            icon: DEFAULT_WORKSPACE_ICON.to_string(),
        };
        Self {
            ids,
            clock,
            workspace,
            pages: HashMap::new(),
            page_order: Vec::new(),
            blocks: HashMap::new(),
            selected: None,
            sidebar_collapsed: false,
            right_panel_visible: true,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            events: Vec::new(),
        }
    }

    // ---- workspace ----

    pub fn workspace(&self) -> &WorkspaceMeta {
        &self.workspace
    }

    /// Unconditional rename; the empty string is allowed.
    pub fn update_workspace_name(&mut self, name: impl Into<String>) {
        self.workspace.name = name.into();
    }

    pub fn update_workspace_icon(&mut self, icon: impl Into<String>) {
        self.workspace.icon = icon.into();
    }

    // ---- pages ----

    /// All pages in storage order.
    pub fn pages(&self) -> Vec<&Page> {
        self.page_order
            .iter()
            .filter_map(|id| self.pages.get(id))
            .collect()
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Create a page (default title/icon, expanded) with one empty text block,
    /// and select it. A given parent must be live; it is marked expanded so
    /// the new child is visible in the sidebar.
    pub fn add_page(&mut self, parent: Option<&PageId>) -> Result<Page> {
        if let Some(pid) = parent {
            if !self.pages.contains_key(pid) {
                return Err(Error::UnknownPage(pid.clone()));
            }
        }
        let id = PageId::new(self.ids.next_id(PAGE_PREFIX));
        let page = Page {
            id: id.clone(),
            title: DEFAULT_PAGE_TITLE.to_string(),
            parent_id: parent.cloned(),
            created_at: self.clock.now(),
            is_expanded: true,
            icon: Some(DEFAULT_PAGE_ICON.to_string()),
            tags: Vec::new(),
        };
        self.pages.insert(id.clone(), page.clone());
        self.page_order.push(id.clone());
        if let Some(pid) = parent {
            if let Some(p) = self.pages.get_mut(pid) {
                p.is_expanded = true;
            }
        }
        debug!(page = %id, parent = parent.map(|p| p.as_str()), "page created");
        self.events.push(Event::PageCreated { page: id.clone() });
        // Every page starts with one empty text block to type into.
        self.add_block(&id, None, None)?;
        self.set_selection(Some(id));
        self.apply_select_collapse();
        Ok(page)
    }

    pub fn update_page_title(&mut self, id: &PageId, title: impl Into<String>) -> Result<()> {
        let page = self
            .pages
            .get_mut(id)
            .ok_or_else(|| Error::UnknownPage(id.clone()))?;
        page.title = title.into();
        Ok(())
    }

    pub fn update_page_icon(&mut self, id: &PageId, icon: impl Into<String>) -> Result<()> {
        let page = self
            .pages
            .get_mut(id)
            .ok_or_else(|| Error::UnknownPage(id.clone()))?;
        page.icon = Some(icon.into());
        Ok(())
    }

    pub fn set_page_tags(&mut self, id: &PageId, tags: Vec<Tag>) -> Result<()> {
        let page = self
            .pages
            .get_mut(id)
            .ok_or_else(|| Error::UnknownPage(id.clone()))?;
        page.tags = tags;
        Ok(())
    }

    /// Remove a page, its transitive descendants, and every block owned by a
    /// removed page. Returns the removed page ids. If the selection was
    /// removed, the first remaining root page (storage order) is selected.
    pub fn delete_page(&mut self, id: &PageId) -> Result<Vec<PageId>> {
        if !self.pages.contains_key(id) {
            return Err(Error::UnknownPage(id.clone()));
        }
        let doomed = self.page_closure(id);
        let doomed_set: HashSet<&PageId> = doomed.iter().collect();

        let dead_blocks: Vec<BlockId> = self
            .blocks
            .values()
            .filter(|b| doomed_set.contains(&b.page_id))
            .map(|b| b.id.clone())
            .collect();
        for bid in &dead_blocks {
            self.blocks.remove(bid);
        }
        self.page_order.retain(|pid| !doomed_set.contains(pid));
        for pid in &doomed {
            self.pages.remove(pid);
        }
        debug!(
            page = %id,
            pages = doomed.len(),
            blocks = dead_blocks.len(),
            "page deleted with descendants"
        );

        if self
            .selected
            .as_ref()
            .is_some_and(|sel| doomed.contains(sel))
        {
            let next = self
                .page_order
                .iter()
                .find(|pid| {
                    self.pages
                        .get(*pid)
                        .is_some_and(|p| p.parent_id.is_none())
                })
                .cloned();
            self.set_selection(next);
        }

        self.events.push(Event::PagesDeleted {
            pages: doomed.clone(),
        });
        if !dead_blocks.is_empty() {
            self.events.push(Event::BlocksDeleted {
                blocks: dead_blocks,
            });
        }
        Ok(doomed)
    }

    /// Reparent a page. Rejects moves that would make a page its own ancestor,
    /// keeping the forest strict. The new parent is marked expanded.
    pub fn move_page(&mut self, id: &PageId, new_parent: Option<&PageId>) -> Result<()> {
        if !self.pages.contains_key(id) {
            return Err(Error::UnknownPage(id.clone()));
        }
        if let Some(np) = new_parent {
            if !self.pages.contains_key(np) {
                return Err(Error::UnknownPage(np.clone()));
            }
            if np == id || self.is_ancestor(id, np) {
                return Err(Error::WouldCycle {
                    page: id.clone(),
                    parent: np.clone(),
                });
            }
            if let Some(p) = self.pages.get_mut(np) {
                p.is_expanded = true;
            }
        }
        if let Some(page) = self.pages.get_mut(id) {
            page.parent_id = new_parent.cloned();
        }
        Ok(())
    }

    /// Set the selection. On narrow viewports this also collapses the sidebar,
    /// mirroring the host UI's behavior of getting chrome out of the way.
    pub fn select_page(&mut self, page: Option<&PageId>) -> Result<()> {
        if let Some(id) = page {
            if !self.pages.contains_key(id) {
                return Err(Error::UnknownPage(id.clone()));
            }
        }
        self.set_selection(page.cloned());
        self.apply_select_collapse();
        Ok(())
    }

    pub fn selected_page_id(&self) -> Option<&PageId> {
        self.selected.as_ref()
    }

    /// Flip sidebar expansion state; returns the new value.
    pub fn toggle_page_expansion(&mut self, id: &PageId) -> Result<bool> {
        let page = self
            .pages
            .get_mut(id)
            .ok_or_else(|| Error::UnknownPage(id.clone()))?;
        page.is_expanded = !page.is_expanded;
        Ok(page.is_expanded)
    }

    // ---- blocks ----

    /// All blocks (unordered across groups); use [`Self::page_blocks`] and
    /// [`Self::child_blocks`] for render order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Top-level blocks of a page in sibling order. Empty for a dead page id;
    /// renderers tolerate vanished targets.
    pub fn page_blocks(&self, page: &PageId) -> Vec<&Block> {
        self.sibling_group(page, None)
    }

    /// Children of a toggle block in sibling order.
    pub fn child_blocks(&self, parent: &BlockId) -> Vec<&Block> {
        match self.blocks.get(parent) {
            Some(p) => self.sibling_group(&p.page_id, Some(parent)),
            None => Vec::new(),
        }
    }

    /// Create an empty text block on `page`.
    ///
    /// `after`, when given, must be a live block in the target sibling group;
    /// the new block's order key is allocated strictly between `after` and its
    /// successor, so it lands immediately after `after` and no other relative
    /// order changes. Without `after` the block goes to the end of the group.
    /// `parent`, when given, must be a live toggle on the same page; the new
    /// id is appended to its `children`.
    pub fn add_block(
        &mut self,
        page: &PageId,
        after: Option<&BlockId>,
        parent: Option<&BlockId>,
    ) -> Result<Block> {
        if !self.pages.contains_key(page) {
            return Err(Error::UnknownPage(page.clone()));
        }
        if let Some(pb) = parent {
            let toggle = self
                .blocks
                .get(pb)
                .ok_or_else(|| Error::UnknownBlock(pb.clone()))?;
            if toggle.kind != BlockKind::Toggle {
                return Err(Error::NotAToggle(pb.clone()));
            }
            if toggle.page_id != *page {
                return Err(Error::ForeignSibling(pb.clone()));
            }
        }

        let group: Vec<(BlockId, OrderKey)> = self
            .sibling_group(page, parent)
            .into_iter()
            .map(|b| (b.id.clone(), b.order.clone()))
            .collect();
        let (left, right) = match after {
            Some(anchor) => {
                let Some(pos) = group.iter().position(|(id, _)| id == anchor) else {
                    return Err(if self.blocks.contains_key(anchor) {
                        Error::ForeignSibling(anchor.clone())
                    } else {
                        Error::UnknownBlock(anchor.clone())
                    });
                };
                (
                    Some(group[pos].1.clone()),
                    group.get(pos + 1).map(|(_, key)| key.clone()),
                )
            }
            None => (group.last().map(|(_, key)| key.clone()), None),
        };

        let id = BlockId::new(self.ids.next_id(BLOCK_PREFIX));
        let order = OrderKey::between(left.as_ref(), right.as_ref(), id.as_str().as_bytes())?;
        let block = Block {
            id: id.clone(),
            kind: BlockKind::Text,
            content: String::new(),
            checked: false,
            src: None,
            language: None,
            is_expanded: false,
            children: Vec::new(),
            page_id: page.clone(),
            parent_block_id: parent.cloned(),
            order,
        };
        self.blocks.insert(id.clone(), block.clone());
        if let Some(pb) = parent {
            if let Some(toggle) = self.blocks.get_mut(pb) {
                toggle.children.push(id.clone());
            }
        }
        debug!(block = %id, page = %page, after = after.map(|a| a.as_str()), "block created");
        self.events.push(Event::BlockCreated {
            block: id,
            after: after.cloned(),
        });
        Ok(block)
    }

    /// Shallow-merge `patch` into the block: `Some` fields replace, `None`
    /// fields keep their current values.
    pub fn update_block(&mut self, id: &BlockId, patch: BlockPatch) -> Result<()> {
        let block = self
            .blocks
            .get_mut(id)
            .ok_or_else(|| Error::UnknownBlock(id.clone()))?;
        let BlockPatch {
            content,
            kind,
            checked,
            src,
            language,
            is_expanded,
        } = patch;
        if let Some(content) = content {
            block.content = content;
        }
        if let Some(kind) = kind {
            block.kind = kind;
        }
        if let Some(checked) = checked {
            block.checked = checked;
        }
        if let Some(src) = src {
            block.src = Some(src);
        }
        if let Some(language) = language {
            block.language = Some(language);
        }
        if let Some(is_expanded) = is_expanded {
            block.is_expanded = is_expanded;
        }
        Ok(())
    }

    /// Remove a block and, transitively, everything reachable through
    /// `children` lists (nested toggles are deleted in full). The deleted id
    /// is unlinked from its parent's `children`. Returns the removed ids.
    pub fn delete_block(&mut self, id: &BlockId) -> Result<Vec<BlockId>> {
        let parent = match self.blocks.get(id) {
            Some(b) => b.parent_block_id.clone(),
            None => return Err(Error::UnknownBlock(id.clone())),
        };

        let mut doomed: Vec<BlockId> = Vec::new();
        let mut visited: HashSet<BlockId> = HashSet::new();
        let mut frontier = vec![id.clone()];
        while let Some(bid) = frontier.pop() {
            if !visited.insert(bid.clone()) {
                continue;
            }
            if let Some(block) = self.blocks.get(&bid) {
                frontier.extend(block.children.iter().cloned());
                doomed.push(bid);
            }
        }
        for bid in &doomed {
            self.blocks.remove(bid);
        }
        if let Some(pid) = parent {
            if let Some(p) = self.blocks.get_mut(&pid) {
                p.children.retain(|child| child != id);
            }
        }
        debug!(block = %id, removed = doomed.len(), "block deleted");
        self.events.push(Event::BlocksDeleted {
            blocks: doomed.clone(),
        });
        Ok(doomed)
    }

    /// Flip toggle expansion state; returns the new value.
    pub fn toggle_block_expansion(&mut self, id: &BlockId) -> Result<bool> {
        let block = self
            .blocks
            .get_mut(id)
            .ok_or_else(|| Error::UnknownBlock(id.clone()))?;
        block.is_expanded = !block.is_expanded;
        Ok(block.is_expanded)
    }

    // ---- transient UI state ----

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn is_right_panel_visible(&self) -> bool {
        self.right_panel_visible
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_right_panel(&mut self) {
        self.right_panel_visible = !self.right_panel_visible;
    }

    /// Environment signal from the host: remember the viewport width and
    /// collapse chrome that no longer fits. Widening never restores chrome;
    /// the user reopens it explicitly.
    pub fn observe_viewport(&mut self, width: u32) {
        self.viewport_width = width;
        if width < SIDEBAR_RESIZE_COLLAPSE_WIDTH {
            self.sidebar_collapsed = true;
        }
        if width < RIGHT_PANEL_HIDE_WIDTH {
            self.right_panel_visible = false;
        }
    }

    // ---- snapshots & events ----

    /// Owned snapshot of the full state for rendering. Later store mutations
    /// never affect a snapshot already handed out.
    pub fn snapshot(&self) -> DocumentSnapshot {
        let mut blocks = Vec::with_capacity(self.blocks.len());
        for pid in &self.page_order {
            self.collect_document_order(pid, None, &mut blocks);
        }
        DocumentSnapshot {
            workspace: self.workspace.clone(),
            pages: self.pages().into_iter().cloned().collect(),
            blocks,
            selected_page_id: self.selected.clone(),
            sidebar_collapsed: self.sidebar_collapsed,
            right_panel_visible: self.right_panel_visible,
        }
    }

    /// Hand queued change notifications to the caller, clearing the queue.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ---- invariants ----

    /// Check structural invariants: live acyclic page forest, consistent
    /// block ownership, and exactly-once toggle child links. Intended for
    /// tests and debugging.
    pub fn validate_invariants(&self) -> Result<()> {
        if self.page_order.len() != self.pages.len() {
            return Err(Error::InconsistentState(
                "page order list out of sync with page table".into(),
            ));
        }
        for id in &self.page_order {
            if !self.pages.contains_key(id) {
                return Err(Error::InconsistentState(format!(
                    "page order names dead page {id}"
                )));
            }
        }
        for page in self.pages.values() {
            if let Some(parent) = &page.parent_id {
                if !self.pages.contains_key(parent) {
                    return Err(Error::InconsistentState(format!(
                        "page {} has dead parent {parent}",
                        page.id
                    )));
                }
            }
            if self.is_ancestor(&page.id, &page.id) {
                return Err(Error::InconsistentState(format!(
                    "page {} is its own ancestor",
                    page.id
                )));
            }
        }
        if let Some(sel) = &self.selected {
            if !self.pages.contains_key(sel) {
                return Err(Error::InconsistentState(format!(
                    "selection names dead page {sel}"
                )));
            }
        }
        for block in self.blocks.values() {
            if !self.pages.contains_key(&block.page_id) {
                return Err(Error::InconsistentState(format!(
                    "block {} owned by dead page {}",
                    block.id, block.page_id
                )));
            }
            if let Some(parent) = &block.parent_block_id {
                let Some(p) = self.blocks.get(parent) else {
                    return Err(Error::InconsistentState(format!(
                        "block {} has dead parent block {parent}",
                        block.id
                    )));
                };
                if p.page_id != block.page_id {
                    return Err(Error::InconsistentState(format!(
                        "block {} and its parent {parent} live on different pages",
                        block.id
                    )));
                }
                let links = p.children.iter().filter(|c| **c == block.id).count();
                if links != 1 {
                    return Err(Error::InconsistentState(format!(
                        "block {} appears {links} times in {parent}'s children",
                        block.id
                    )));
                }
            }
            for child in &block.children {
                let Some(c) = self.blocks.get(child) else {
                    return Err(Error::InconsistentState(format!(
                        "block {} lists dead child {child}",
                        block.id
                    )));
                };
                if c.parent_block_id.as_ref() != Some(&block.id) {
                    return Err(Error::InconsistentState(format!(
                        "child {child} does not point back at {}",
                        block.id
                    )));
                }
            }
        }
        Ok(())
    }

    // ---- internal ----

    /// `id` plus its transitive descendants, visited-guarded.
    fn page_closure(&self, id: &PageId) -> Vec<PageId> {
        let mut out = vec![id.clone()];
        let mut visited: HashSet<PageId> = HashSet::new();
        visited.insert(id.clone());
        let mut frontier = vec![id.clone()];
        while let Some(current) = frontier.pop() {
            for pid in &self.page_order {
                let Some(page) = self.pages.get(pid) else {
                    continue;
                };
                if page.parent_id.as_ref() == Some(&current) && visited.insert(pid.clone()) {
                    out.push(pid.clone());
                    frontier.push(pid.clone());
                }
            }
        }
        out
    }

    /// Whether `ancestor` appears on `page`'s parent chain (visited-guarded).
    fn is_ancestor(&self, ancestor: &PageId, page: &PageId) -> bool {
        let mut visited: HashSet<&PageId> = HashSet::new();
        let mut current = self.pages.get(page).and_then(|p| p.parent_id.as_ref());
        while let Some(pid) = current {
            if pid == ancestor {
                return true;
            }
            if !visited.insert(pid) {
                return false;
            }
            current = self.pages.get(pid).and_then(|p| p.parent_id.as_ref());
        }
        false
    }

    fn sibling_group(&self, page: &PageId, parent: Option<&BlockId>) -> Vec<&Block> {
        let mut group: Vec<&Block> = self
            .blocks
            .values()
            .filter(|b| b.page_id == *page && b.parent_block_id.as_ref() == parent)
            .collect();
        group.sort_by(|a, b| (&a.order, &a.id).cmp(&(&b.order, &b.id)));
        group
    }

    fn collect_document_order(&self, page: &PageId, parent: Option<&BlockId>, out: &mut Vec<Block>) {
        for block in self.sibling_group(page, parent) {
            let id = block.id.clone();
            out.push(block.clone());
            self.collect_document_order(page, Some(&id), out);
        }
    }

    fn set_selection(&mut self, page: Option<PageId>) {
        if self.selected != page {
            self.selected = page.clone();
            self.events.push(Event::SelectionChanged { page });
        }
    }

    fn apply_select_collapse(&mut self) {
        if self.viewport_width < SIDEBAR_SELECT_COLLAPSE_WIDTH {
            self.sidebar_collapsed = true;
        }
    }
}

impl Default for DocumentStore<crate::traits::RandomIds, crate::traits::SystemClock> {
    fn default() -> Self {
        Self::new(
            crate::traits::RandomIds,
            crate::traits::SystemClock,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{FixedClock, SequentialIds};

    fn store() -> DocumentStore<SequentialIds, FixedClock> {
        DocumentStore::new(SequentialIds::default(), FixedClock::default())
    }

    #[test]
    fn new_page_gets_defaults_and_a_seed_block() {
        let mut store = store();
        let page = store.add_page(None).unwrap();
        assert_eq!(page.title, "Untitled");
        assert!(page.is_expanded);
        assert_eq!(page.parent_id, None);
        let blocks = store.page_blocks(&page.id);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Text);
        assert_eq!(blocks[0].content, "");
        assert_eq!(store.selected_page_id(), Some(&page.id));
        store.validate_invariants().unwrap();
    }

    #[test]
    fn add_page_expands_the_parent() {
        let mut store = store();
        let parent = store.add_page(None).unwrap();
        store.toggle_page_expansion(&parent.id).unwrap();
        assert!(!store.page(&parent.id).unwrap().is_expanded);

        let child = store.add_page(Some(&parent.id)).unwrap();
        assert_eq!(child.parent_id, Some(parent.id.clone()));
        assert!(store.page(&parent.id).unwrap().is_expanded);
    }

    #[test]
    fn add_page_under_dead_parent_fails_cleanly() {
        let mut store = store();
        let ghost = PageId::new("page-nope");
        assert!(matches!(
            store.add_page(Some(&ghost)),
            Err(Error::UnknownPage(_))
        ));
        assert!(store.pages().is_empty());
        assert!(store.blocks().next().is_none());
    }

    #[test]
    fn move_page_rejects_cycles() {
        let mut store = store();
        let a = store.add_page(None).unwrap();
        let b = store.add_page(Some(&a.id)).unwrap();
        let c = store.add_page(Some(&b.id)).unwrap();

        assert!(matches!(
            store.move_page(&a.id, Some(&c.id)),
            Err(Error::WouldCycle { .. })
        ));
        assert!(matches!(
            store.move_page(&a.id, Some(&a.id)),
            Err(Error::WouldCycle { .. })
        ));
        // unchanged
        assert_eq!(store.page(&a.id).unwrap().parent_id, None);

        store.move_page(&c.id, None).unwrap();
        assert_eq!(store.page(&c.id).unwrap().parent_id, None);
        store.validate_invariants().unwrap();
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut store = store();
        let page = store.add_page(None).unwrap();
        let before = store.snapshot();
        store.update_page_title(&page.id, "renamed").unwrap();
        assert_eq!(before.pages[0].title, "Untitled");
        assert_eq!(store.snapshot().pages[0].title, "renamed");
    }

    #[test]
    fn document_order_inlines_toggle_children() {
        let mut store = store();
        let page = store.add_page(None).unwrap();
        let seed = store.page_blocks(&page.id)[0].id.clone();
        let toggle = store.add_block(&page.id, Some(&seed), None).unwrap();
        store
            .update_block(
                &toggle.id,
                BlockPatch {
                    kind: Some(BlockKind::Toggle),
                    ..Default::default()
                },
            )
            .unwrap();
        let child = store.add_block(&page.id, None, Some(&toggle.id)).unwrap();
        let tail = store.add_block(&page.id, None, None).unwrap();

        let snapshot = store.snapshot();
        let order: Vec<&BlockId> = snapshot.blocks.iter().map(|b| &b.id).collect();
        assert_eq!(order, vec![&seed, &toggle.id, &child.id, &tail.id]);
    }
}
