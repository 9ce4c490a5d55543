use folio_core::{DocumentStore, Event, FixedClock, SequentialIds};

fn new_store() -> DocumentStore<SequentialIds, FixedClock> {
    DocumentStore::new(SequentialIds::default(), FixedClock::default())
}

#[test]
fn workspace_rename_is_unconditional() {
    let mut store = new_store();
    store.update_workspace_name("Atlas");
    assert_eq!(store.workspace().name, "Atlas");
    store.update_workspace_name("");
    assert_eq!(store.workspace().name, "");
}

#[test]
fn panel_toggles_flip_state() {
    let mut store = new_store();
    assert!(!store.is_sidebar_collapsed());
    assert!(store.is_right_panel_visible());

    store.toggle_sidebar();
    store.toggle_right_panel();
    assert!(store.is_sidebar_collapsed());
    assert!(!store.is_right_panel_visible());

    store.toggle_sidebar();
    store.toggle_right_panel();
    assert!(!store.is_sidebar_collapsed());
    assert!(store.is_right_panel_visible());
}

#[test]
fn narrow_viewports_collapse_chrome_and_widening_does_not_restore() {
    let mut store = new_store();
    store.observe_viewport(1200);
    assert!(!store.is_sidebar_collapsed());
    assert!(!store.is_right_panel_visible());

    store.observe_viewport(900);
    assert!(store.is_sidebar_collapsed());

    store.observe_viewport(1920);
    assert!(store.is_sidebar_collapsed());
    assert!(!store.is_right_panel_visible());
}

#[test]
fn selecting_on_a_phone_sized_viewport_collapses_the_sidebar() {
    let mut store = new_store();
    let page = store.add_page(None).unwrap();
    assert!(!store.is_sidebar_collapsed());

    store.observe_viewport(600);
    assert!(store.is_sidebar_collapsed());
    store.toggle_sidebar();
    assert!(!store.is_sidebar_collapsed());

    store.select_page(Some(&page.id)).unwrap();
    assert!(store.is_sidebar_collapsed());
}

#[test]
fn block_creation_events_carry_the_successor_anchor() {
    let mut store = new_store();
    let page = store.add_page(None).unwrap();
    let anchor = store.page_blocks(&page.id)[0].id.clone();
    store.drain_events();

    let created = store.add_block(&page.id, Some(&anchor), None).unwrap();
    let events = store.drain_events();
    assert_eq!(
        events,
        vec![Event::BlockCreated {
            block: created.id,
            after: Some(anchor),
        }]
    );
    assert!(store.drain_events().is_empty());
}

#[test]
fn page_lifecycle_emits_creation_selection_and_deletion_events() {
    let mut store = new_store();
    let page = store.add_page(None).unwrap();
    let events = store.drain_events();
    assert!(matches!(events[0], Event::PageCreated { .. }));
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::BlockCreated { after: None, .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::SelectionChanged { page: Some(_) })));

    store.delete_page(&page.id).unwrap();
    let events = store.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::PagesDeleted { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::BlocksDeleted { .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::SelectionChanged { page: None })));
}
