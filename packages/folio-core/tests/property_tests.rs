use proptest::prelude::*;

use folio_core::{
    BlockId, BlockKind, BlockPatch, DocumentStore, FixedClock, PageId, SequentialIds,
};

fn new_store() -> DocumentStore<SequentialIds, FixedClock> {
    DocumentStore::new(SequentialIds::default(), FixedClock::default())
}

fn live_pages(store: &DocumentStore<SequentialIds, FixedClock>) -> Vec<PageId> {
    store.pages().iter().map(|p| p.id.clone()).collect()
}

fn live_blocks(store: &DocumentStore<SequentialIds, FixedClock>) -> Vec<BlockId> {
    let mut ids: Vec<BlockId> = store.blocks().map(|b| b.id.clone()).collect();
    ids.sort();
    ids
}

proptest! {
    /// Arbitrary interleavings of the mutation surface never break the
    /// structural invariants, and sibling order keys stay strictly sorted.
    #[test]
    fn random_mutations_preserve_invariants(ops in prop::collection::vec((0u8..7, any::<u8>(), any::<u8>()), 1..60)) {
        let mut store = new_store();
        for (op, a, b) in ops {
            let pages = live_pages(&store);
            let blocks = live_blocks(&store);
            let page_at = |i: u8| pages.get(i as usize % pages.len().max(1)).cloned();
            let block_at = |i: u8| blocks.get(i as usize % blocks.len().max(1)).cloned();
            match op {
                0 => {
                    store.add_page(None).unwrap();
                }
                1 => {
                    if let Some(parent) = page_at(a) {
                        store.add_page(Some(&parent)).unwrap();
                    }
                }
                2 => {
                    if let Some(page) = page_at(a) {
                        store.delete_page(&page).unwrap();
                    }
                }
                3 => {
                    if let Some(page) = page_at(a) {
                        let tops = store.page_blocks(&page);
                        let anchor = tops
                            .get(b as usize % tops.len().max(1))
                            .map(|blk| blk.id.clone());
                        store.add_block(&page, anchor.as_ref(), None).unwrap();
                    }
                }
                4 => {
                    if let Some(block) = block_at(a) {
                        store.delete_block(&block).unwrap();
                    }
                }
                5 => {
                    // reparenting may legitimately be refused for cycles
                    if let (Some(page), Some(parent)) = (page_at(a), page_at(b)) {
                        let _ = store.move_page(&page, Some(&parent));
                    }
                }
                _ => {
                    // grow a toggle subtree somewhere
                    if let Some(block) = block_at(a) {
                        store
                            .update_block(
                                &block,
                                BlockPatch {
                                    kind: Some(BlockKind::Toggle),
                                    ..Default::default()
                                },
                            )
                            .unwrap();
                        if let Some(owner) = store.block(&block).map(|blk| blk.page_id.clone()) {
                            store.add_block(&owner, None, Some(&block)).unwrap();
                        }
                    }
                }
            }
        }

        store.validate_invariants().unwrap();
        for page in live_pages(&store) {
            let tops = store.page_blocks(&page);
            for pair in tops.windows(2) {
                prop_assert!((&pair[0].order, &pair[0].id) < (&pair[1].order, &pair[1].id));
            }
        }
    }

    /// Inserting at a random anchor always lands the new block directly after
    /// it, with every previously adjacent pair still adjacent or separated
    /// only by the new block.
    #[test]
    fn insert_after_always_lands_adjacent(anchors in prop::collection::vec(any::<u8>(), 1..40)) {
        let mut store = new_store();
        let page = store.add_page(None).unwrap();
        for pick in anchors {
            let tops: Vec<BlockId> = store
                .page_blocks(&page.id)
                .iter()
                .map(|blk| blk.id.clone())
                .collect();
            let anchor = tops[pick as usize % tops.len()].clone();
            let created = store.add_block(&page.id, Some(&anchor), None).unwrap().id;

            let after: Vec<BlockId> = store
                .page_blocks(&page.id)
                .iter()
                .map(|blk| blk.id.clone())
                .collect();
            let anchor_pos = after.iter().position(|id| *id == anchor).unwrap();
            prop_assert_eq!(after.get(anchor_pos + 1), Some(&created));

            let without_new: Vec<BlockId> =
                after.iter().filter(|id| **id != created).cloned().collect();
            prop_assert_eq!(without_new, tops);
        }
        store.validate_invariants().unwrap();
    }
}
