//! Demo document the frontend seeds a first-run session with.

use folio_core::{BlockKind, BlockPatch, Tag};

use crate::CoreStore;

pub(crate) fn seed(store: &mut CoreStore) {
    // Seeding drives only public operations; on a fresh store none of them
    // can fail, so a refusal just leaves the workspace emptier.
    let _ = try_seed(store);
    // The session starts clean; seeding is not an edit the UI reacts to.
    let _ = store.drain_events();
}

fn try_seed(store: &mut CoreStore) -> folio_core::Result<()> {
    store.update_workspace_name("Folio");
    store.update_workspace_icon("F");

    let notes = store.add_page(None)?;
    store.update_page_title(&notes.id, "Company Notes")?;
    store.update_page_icon(&notes.id, "🎯")?;
    store.set_page_tags(
        &notes.id,
        vec![
            tag("#morning", "orange"),
            tag("#ideas", "blue"),
            tag("#to-dos", "green"),
        ],
    )?;

    let heading = store.page_blocks(&notes.id)[0].id.clone();
    store.update_block(
        &heading,
        BlockPatch {
            kind: Some(BlockKind::Heading),
            content: Some("Quick Notes".into()),
            ..Default::default()
        },
    )?;

    let mut last = heading;
    let body: [(BlockKind, &str, bool); 6] = [
        (
            BlockKind::Text,
            "Collect everything worth keeping about the current launch in one place.",
            false,
        ),
        (BlockKind::Todo, "Set up the research meeting", false),
        (BlockKind::Todo, "Collect feedback on the landing page", false),
        (BlockKind::Todo, "Review last week's questions", true),
        (BlockKind::Brief, "Brief", false),
        (
            BlockKind::Text,
            "The site should lead with the product story and route visitors toward the shop.",
            false,
        ),
    ];
    for (kind, content, checked) in body {
        let block = store.add_block(&notes.id, Some(&last), None)?;
        store.update_block(
            &block.id,
            BlockPatch {
                kind: Some(kind),
                content: Some(content.into()),
                checked: Some(checked),
                ..Default::default()
            },
        )?;
        last = block.id;
    }

    for (title, icon) in [("Tasks", "✅"), ("Deadlines", "🔔"), ("Reading List", "📚")] {
        let page = store.add_page(None)?;
        store.update_page_title(&page.id, title)?;
        store.update_page_icon(&page.id, icon)?;
    }

    store.select_page(Some(&notes.id))?;
    Ok(())
}

fn tag(label: &str, color: &str) -> Tag {
    Tag {
        label: label.into(),
        color: color.into(),
    }
}
