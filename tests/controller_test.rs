//! Command dispatch and the rendering-collaborator protocol

use rstest::{fixture, rstest};

use navtree::util::testing;
use navtree::{
    NavCommand, NavController, Outline, OutlineEntry, RecordingView, RowIndicator, TreeIndex,
    ViewEvent,
};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn controller() -> NavController {
    let outline = Outline::new(vec![
        OutlineEntry::section(
            "Manual",
            "index.html",
            vec![
                OutlineEntry::group(
                    "Getting started",
                    vec![OutlineEntry::page("Overview", "doc_overview.html")],
                ),
                OutlineEntry::page("Samples", "doc_samples.html"),
            ],
        ),
        OutlineEntry::page("Related Pages", "pages.html"),
    ]);
    NavController::new(TreeIndex::new(outline))
}

fn top_level_child(controller: &NavController, i: usize) -> generational_arena::Index {
    let index = controller.index();
    index.node(index.root()).unwrap().children[i]
}

// ============================================================
// Toggle / Expand / Collapse
// ============================================================

#[rstest]
fn given_collapsed_section_when_toggled_then_rows_appear_before_container_shows(
    mut controller: NavController,
) {
    let manual = top_level_child(&controller, 0);
    let mut view = RecordingView::new();

    controller
        .apply(NavCommand::Toggle(manual), &mut view)
        .unwrap();

    // Two fresh rows, then the container is shown, then the indicator flips
    assert_eq!(view.events.len(), 4);
    assert!(matches!(
        &view.events[0],
        ViewEvent::RowCreated { row, .. } if row.label == "Getting started"
    ));
    assert!(matches!(
        &view.events[1],
        ViewEvent::RowCreated { row, .. } if row.label == "Samples" && row.is_last
    ));
    assert_eq!(
        view.events[2],
        ViewEvent::ChildrenVisible {
            node: manual,
            visible: true
        }
    );
    assert_eq!(
        view.events[3],
        ViewEvent::IndicatorSet {
            node: manual,
            indicator: RowIndicator::Expanded
        }
    );
}

#[rstest]
fn given_expanded_section_when_toggled_then_container_hides_without_new_rows(
    mut controller: NavController,
) {
    let manual = top_level_child(&controller, 0);
    let mut view = RecordingView::new();
    controller
        .apply(NavCommand::Expand(manual), &mut view)
        .unwrap();
    view.clear();

    controller
        .apply(NavCommand::Toggle(manual), &mut view)
        .unwrap();

    assert_eq!(
        view.events,
        vec![
            ViewEvent::ChildrenVisible {
                node: manual,
                visible: false
            },
            ViewEvent::IndicatorSet {
                node: manual,
                indicator: RowIndicator::Collapsed
            },
        ]
    );
}

#[rstest]
fn given_cached_children_when_reexpanding_then_no_rows_are_recreated(
    mut controller: NavController,
) {
    let manual = top_level_child(&controller, 0);
    let mut view = RecordingView::new();
    controller
        .apply(NavCommand::Expand(manual), &mut view)
        .unwrap();
    controller
        .apply(NavCommand::Collapse(manual), &mut view)
        .unwrap();
    view.clear();

    controller
        .apply(NavCommand::Expand(manual), &mut view)
        .unwrap();

    assert!(view
        .events
        .iter()
        .all(|e| !matches!(e, ViewEvent::RowCreated { .. })));
}

#[rstest]
fn given_leaf_row_when_toggled_then_view_stays_silent(mut controller: NavController) {
    let pages = top_level_child(&controller, 1);
    let mut view = RecordingView::new();

    controller
        .apply(NavCommand::Toggle(pages), &mut view)
        .unwrap();

    assert!(view.events.is_empty());
}

// ============================================================
// Select
// ============================================================

#[rstest]
fn given_nested_target_when_selecting_then_trail_expands_and_row_is_selected(
    mut controller: NavController,
) {
    let mut view = RecordingView::new();

    controller
        .apply(
            NavCommand::Select {
                target: "doc_overview.html".to_string(),
            },
            &mut view,
        )
        .unwrap();

    // The final event selects the Overview row
    let Some(ViewEvent::RowSelected { node }) = view.events.last() else {
        panic!("expected a selection event, got {:?}", view.events.last());
    };
    let selected = controller.index().node(*node).unwrap();
    assert_eq!(selected.link.as_deref(), Some("doc_overview.html"));

    // The trail rows were created along the way, leaf included
    let created: Vec<_> = view
        .events
        .iter()
        .filter_map(|e| match e {
            ViewEvent::RowCreated { row, .. } => Some(row.label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(created, vec!["Getting started", "Samples", "Overview"]);
}

#[rstest]
fn given_unknown_target_when_selecting_then_landing_page_is_selected(
    mut controller: NavController,
) {
    let mut view = RecordingView::new();

    controller
        .apply(
            NavCommand::Select {
                target: "nonexistent.html".to_string(),
            },
            &mut view,
        )
        .unwrap();

    let Some(ViewEvent::RowSelected { node }) = view.events.last() else {
        panic!("expected a selection event");
    };
    let selected = controller.index().node(*node).unwrap();
    assert_eq!(selected.link.as_deref(), Some("index.html"));
}

#[test]
fn given_no_resolvable_target_when_selecting_then_no_view_calls() {
    let outline = Outline::new(vec![OutlineEntry::page("A", "a.html")]);
    let mut controller = NavController::new(TreeIndex::new(outline));
    let mut view = RecordingView::new();

    controller
        .apply(
            NavCommand::Select {
                target: "z.html".to_string(),
            },
            &mut view,
        )
        .unwrap();

    assert!(view.events.is_empty());
}

#[rstest]
fn given_selected_trail_when_selecting_again_then_only_selection_is_reported(
    mut controller: NavController,
) {
    let mut view = RecordingView::new();
    let select = NavCommand::Select {
        target: "doc_overview.html".to_string(),
    };
    controller.apply(select.clone(), &mut view).unwrap();
    view.clear();

    controller.apply(select, &mut view).unwrap();

    // Everything is already materialized and expanded
    assert_eq!(view.events.len(), 1);
    assert!(matches!(view.events[0], ViewEvent::RowSelected { .. }));
}
