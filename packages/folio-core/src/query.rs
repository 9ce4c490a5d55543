//! Pure tree queries over page collections.
//!
//! Generic over any iterator of pages so the same helpers serve the store's
//! internals, snapshots held by a presentation layer, and tests.

use std::collections::HashSet;

use crate::ids::PageId;
use crate::model::Page;

/// Pages whose parent is `parent`, in the order the iterator yields them.
/// `None` matches root pages.
pub fn children_of<'a, I>(pages: I, parent: Option<&PageId>) -> Vec<&'a Page>
where
    I: IntoIterator<Item = &'a Page>,
{
    pages
        .into_iter()
        .filter(|p| p.parent_id.as_ref() == parent)
        .collect()
}

/// Whether any page names `id` as its parent.
pub fn has_children<'a, I>(pages: I, id: &PageId) -> bool
where
    I: IntoIterator<Item = &'a Page>,
{
    pages
        .into_iter()
        .any(|p| p.parent_id.as_ref() == Some(id))
}

/// The transitive descendant set of `root`, excluding `root` itself, in
/// discovery order (callers must not rely on it). Iterative with a visited
/// guard, so it terminates even over a corrupted (cyclic) parent graph.
pub fn descendants_of<'a, I>(pages: I, root: &PageId) -> Vec<PageId>
where
    I: IntoIterator<Item = &'a Page>,
{
    let pages: Vec<&Page> = pages.into_iter().collect();
    let mut out = Vec::new();
    let mut visited: HashSet<&PageId> = HashSet::new();
    visited.insert(root);
    let mut frontier = vec![root];
    while let Some(current) = frontier.pop() {
        for page in &pages {
            if page.parent_id.as_ref() == Some(current) && visited.insert(&page.id) {
                out.push(page.id.clone());
                frontier.push(&page.id);
            }
        }
    }
    out
}
