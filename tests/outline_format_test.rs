//! Parsing the generated triple format: [label, link-or-null, children-or-null]

use navtree::util::testing;
use navtree::{NavError, Outline, TreeIndex};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// A cut-down, generated-style manual outline
const MANUAL_JSON: &str = r#"
[
  [ "Scripting Library", "index.html", [
    [ "Manual", "index.html", [
      [ "Getting started", "doc_start.html", [
        [ "Overview", "doc_overview.html", null ],
        [ "License", "doc_license.html", null ]
      ] ],
      [ "Samples", "doc_samples.html", null ]
    ] ],
    [ "Related Pages", "pages.html", [
      [ "Todo List", "todo.html", null ]
    ] ],
    [ "Class Index", "classes.html", null ]
  ] ]
]
"#;

#[test]
fn given_generated_json_when_parsing_then_structure_is_preserved() {
    let outline = Outline::from_json_str(MANUAL_JSON).unwrap();

    assert_eq!(outline.len(), 1);
    let root = &outline.entries()[0];
    assert_eq!(root.label, "Scripting Library");
    assert_eq!(root.link.as_deref(), Some("index.html"));
    assert_eq!(root.children.as_ref().unwrap().len(), 3);

    let overview = outline.entry_at(&[0, 0, 0, 0]).unwrap();
    assert_eq!(overview.label, "Overview");
    assert!(overview.children.is_none());
}

#[test]
fn given_parsed_outline_when_serializing_then_roundtrip_is_lossless() {
    let outline = Outline::from_json_str(MANUAL_JSON).unwrap();
    let json = outline.to_json_string().unwrap();
    let reparsed = Outline::from_json_str(&json).unwrap();
    assert_eq!(reparsed, outline);
}

#[test]
fn given_grouping_entry_with_null_link_when_parsing_then_link_is_none() {
    let outline =
        Outline::from_json_str(r#"[["Group", null, [["Page", "p.html", null]]]]"#).unwrap();
    let group = &outline.entries()[0];
    assert_eq!(group.link, None);
    assert!(group.is_expandable());
}

#[test]
fn given_parsed_outline_when_searching_then_paths_match_generated_nesting() {
    let outline = Outline::from_json_str(MANUAL_JSON).unwrap();
    assert_eq!(
        outline.find_path("doc_license.html"),
        Some(vec![0, 0, 0, 1])
    );
    assert_eq!(outline.find_path("todo.html"), Some(vec![0, 1, 0]));
    // index.html appears twice; the first occurrence in document order wins
    assert_eq!(outline.find_path("index.html"), Some(vec![0]));
}

#[test]
fn given_parsed_outline_when_building_index_then_reveal_works_end_to_end() {
    let outline = Outline::from_json_str(MANUAL_JSON).unwrap();
    let mut index = TreeIndex::new(outline);

    let selected = index.reveal("doc_overview.html").unwrap().unwrap();
    let node = index.node(selected).unwrap();
    assert_eq!(node.label, "Overview");
    assert_eq!(node.depth, 4);
}

// ============================================================
// Malformed Input
// ============================================================

#[test]
fn given_truncated_entry_when_parsing_then_parse_error() {
    let result = Outline::from_json_str(r#"[["Label only"]]"#);
    assert!(matches!(result, Err(NavError::Parse(_))));
}

#[test]
fn given_entry_with_extra_element_when_parsing_then_parse_error() {
    let result = Outline::from_json_str(r#"[["L", "l.html", null, 42]]"#);
    assert!(matches!(result, Err(NavError::Parse(_))));
}

#[test]
fn given_non_array_entry_when_parsing_then_parse_error() {
    let result = Outline::from_json_str(r#"[{"label": "L"}]"#);
    assert!(matches!(result, Err(NavError::Parse(_))));
}

#[test]
fn given_empty_array_when_parsing_then_empty_outline() {
    let outline = Outline::from_json_str("[]").unwrap();
    assert!(outline.is_empty());
}
