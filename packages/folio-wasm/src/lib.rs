#![forbid(unsafe_code)]
//! Browser bridge for the folio document core.
//! Exposes a wasm-bindgen surface matching the editor frontend's needs: string
//! ids in, plain JS values out, one method per store operation.

mod demo;

use folio_core::{BlockId, BlockPatch, DocumentStore, PageId, RandomIds, SystemClock, Tag};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

pub(crate) type CoreStore = DocumentStore<RandomIds, SystemClock>;

fn core_err(err: folio_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn serde_err(err: serde_wasm_bindgen::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmWorkspace {
    inner: CoreStore,
}

impl Default for WasmWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmWorkspace {
    /// Empty workspace: no pages, nothing selected.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmWorkspace {
        WasmWorkspace {
            inner: CoreStore::default(),
        }
    }

    /// Workspace pre-filled with the demo document the frontend ships with.
    #[wasm_bindgen(js_name = withDemoContent)]
    pub fn with_demo_content() -> WasmWorkspace {
        let mut inner = CoreStore::default();
        demo::seed(&mut inner);
        WasmWorkspace { inner }
    }

    // ---- workspace ----

    #[wasm_bindgen(js_name = updateWorkspaceName)]
    pub fn update_workspace_name(&mut self, name: String) {
        self.inner.update_workspace_name(name);
    }

    #[wasm_bindgen(js_name = updateWorkspaceIcon)]
    pub fn update_workspace_icon(&mut self, icon: String) {
        self.inner.update_workspace_icon(icon);
    }

    // ---- pages ----

    #[wasm_bindgen(js_name = addPage)]
    pub fn add_page(&mut self, parent: Option<String>) -> Result<JsValue, JsValue> {
        let parent = parent.map(PageId::new);
        let page = self.inner.add_page(parent.as_ref()).map_err(core_err)?;
        to_value(&page).map_err(serde_err)
    }

    #[wasm_bindgen(js_name = updatePageTitle)]
    pub fn update_page_title(&mut self, page_id: String, title: String) -> Result<(), JsValue> {
        self.inner
            .update_page_title(&PageId::new(page_id), title)
            .map_err(core_err)
    }

    #[wasm_bindgen(js_name = updatePageIcon)]
    pub fn update_page_icon(&mut self, page_id: String, icon: String) -> Result<(), JsValue> {
        self.inner
            .update_page_icon(&PageId::new(page_id), icon)
            .map_err(core_err)
    }

    #[wasm_bindgen(js_name = setPageTags)]
    pub fn set_page_tags(&mut self, page_id: String, tags: JsValue) -> Result<(), JsValue> {
        let tags: Vec<Tag> = from_value(tags).map_err(serde_err)?;
        self.inner
            .set_page_tags(&PageId::new(page_id), tags)
            .map_err(core_err)
    }

    /// Returns the ids of every removed page (the target and its descendants).
    #[wasm_bindgen(js_name = deletePage)]
    pub fn delete_page(&mut self, page_id: String) -> Result<JsValue, JsValue> {
        let removed = self
            .inner
            .delete_page(&PageId::new(page_id))
            .map_err(core_err)?;
        to_value(&removed).map_err(serde_err)
    }

    #[wasm_bindgen(js_name = movePage)]
    pub fn move_page(&mut self, page_id: String, new_parent: Option<String>) -> Result<(), JsValue> {
        let new_parent = new_parent.map(PageId::new);
        self.inner
            .move_page(&PageId::new(page_id), new_parent.as_ref())
            .map_err(core_err)
    }

    #[wasm_bindgen(js_name = selectPage)]
    pub fn select_page(&mut self, page_id: Option<String>) -> Result<(), JsValue> {
        let page_id = page_id.map(PageId::new);
        self.inner.select_page(page_id.as_ref()).map_err(core_err)
    }

    #[wasm_bindgen(js_name = selectedPageId)]
    pub fn selected_page_id(&self) -> Option<String> {
        self.inner.selected_page_id().map(|id| id.as_str().to_string())
    }

    #[wasm_bindgen(js_name = togglePageExpansion)]
    pub fn toggle_page_expansion(&mut self, page_id: String) -> Result<bool, JsValue> {
        self.inner
            .toggle_page_expansion(&PageId::new(page_id))
            .map_err(core_err)
    }

    // ---- chrome ----

    #[wasm_bindgen(js_name = toggleSidebar)]
    pub fn toggle_sidebar(&mut self) {
        self.inner.toggle_sidebar();
    }

    #[wasm_bindgen(js_name = toggleRightPanel)]
    pub fn toggle_right_panel(&mut self) {
        self.inner.toggle_right_panel();
    }

    #[wasm_bindgen(js_name = observeViewport)]
    pub fn observe_viewport(&mut self, width: u32) {
        self.inner.observe_viewport(width);
    }

    #[wasm_bindgen(js_name = isSidebarCollapsed)]
    pub fn is_sidebar_collapsed(&self) -> bool {
        self.inner.is_sidebar_collapsed()
    }

    #[wasm_bindgen(js_name = isRightPanelVisible)]
    pub fn is_right_panel_visible(&self) -> bool {
        self.inner.is_right_panel_visible()
    }

    // ---- blocks ----

    #[wasm_bindgen(js_name = pageBlocks)]
    pub fn page_blocks(&self, page_id: String) -> Result<JsValue, JsValue> {
        let blocks = self.inner.page_blocks(&PageId::new(page_id));
        to_value(&blocks).map_err(serde_err)
    }

    #[wasm_bindgen(js_name = childBlocks)]
    pub fn child_blocks(&self, block_id: String) -> Result<JsValue, JsValue> {
        let blocks = self.inner.child_blocks(&BlockId::new(block_id));
        to_value(&blocks).map_err(serde_err)
    }

    #[wasm_bindgen(js_name = addBlock)]
    pub fn add_block(
        &mut self,
        page_id: String,
        after: Option<String>,
        parent: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let after = after.map(BlockId::new);
        let parent = parent.map(BlockId::new);
        let block = self
            .inner
            .add_block(&PageId::new(page_id), after.as_ref(), parent.as_ref())
            .map_err(core_err)?;
        to_value(&block).map_err(serde_err)
    }

    #[wasm_bindgen(js_name = updateBlock)]
    pub fn update_block(&mut self, block_id: String, patch: JsValue) -> Result<(), JsValue> {
        let patch: BlockPatch = from_value(patch).map_err(serde_err)?;
        self.inner
            .update_block(&BlockId::new(block_id), patch)
            .map_err(core_err)
    }

    /// Returns the ids of every removed block (the target plus any toggle
    /// children, transitively).
    #[wasm_bindgen(js_name = deleteBlock)]
    pub fn delete_block(&mut self, block_id: String) -> Result<JsValue, JsValue> {
        let removed = self
            .inner
            .delete_block(&BlockId::new(block_id))
            .map_err(core_err)?;
        to_value(&removed).map_err(serde_err)
    }

    #[wasm_bindgen(js_name = toggleBlockExpansion)]
    pub fn toggle_block_expansion(&mut self, block_id: String) -> Result<bool, JsValue> {
        self.inner
            .toggle_block_expansion(&BlockId::new(block_id))
            .map_err(core_err)
    }

    // ---- snapshots & events ----

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.snapshot()).map_err(serde_err)
    }

    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.drain_events()).map_err(serde_err)
    }
}
