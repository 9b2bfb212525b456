//! Integration tests for layout extraction
//!
//! These tests index the fixture project's resources from disk and run the
//! whole extract -> name -> emit pipeline.

use layoutbind::codegen::{BindingStyle, Emitter, FindViewEmitter};
use layoutbind::layout::{ExtractError, ExtractOptions, Extractor, LayoutResolver};
use layoutbind::{Config, Element, LayoutDirectory, NamingConvention};
use std::path::PathBuf;

/// Get the path to the fixture resource directory
fn res_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/app/src/main/res")
}

fn fixture_layouts() -> LayoutDirectory {
    LayoutDirectory::scan(&[res_path()], &Config::default())
}

fn extract(name: &str, options: ExtractOptions) -> Result<Vec<Element>, ExtractError> {
    let layouts = fixture_layouts();
    let root = layouts.root(name).expect("fixture layout should load");
    Extractor::with_options(options).extract_named(name, &root, &layouts)
}

fn ids(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(|e| e.raw_id()).collect()
}

#[test]
fn test_fixture_index() {
    let layouts = fixture_layouts();
    let names: Vec<_> = layouts.names().collect();

    assert_eq!(
        names,
        ["activity_main", "bad_id", "cycle_a", "cycle_b", "empty_screen", "view_header"]
    );
    assert!(layouts
        .path_of("activity_main")
        .unwrap()
        .ends_with("layout/activity_main.xml"));
}

#[test]
fn test_activity_main_with_include() {
    let elements = extract("activity_main", ExtractOptions::default()).unwrap();

    assert_eq!(ids(&elements), ["header_icon", "title", "user_name", "submit_button"]);

    let types: Vec<_> = elements.iter().map(|e| e.type_name()).collect();
    assert_eq!(types, ["ImageView", "TextView", "EditText", "AppCompatButton"]);

    assert_eq!(elements[0].source().layout.as_deref(), Some("view_header"));
    assert_eq!(elements[2].source().layout, None);
    assert!(elements[2].source().offset.is_some());
}

#[test]
fn test_cycle_on_disk() {
    let err = extract("cycle_a", ExtractOptions::default()).unwrap_err();

    assert_eq!(
        err,
        ExtractError::IncludeCycle {
            chain: vec!["cycle_a".into(), "cycle_b".into(), "cycle_a".into()]
        }
    );
}

#[test]
fn test_strict_and_lenient_bad_id() {
    let err = extract("bad_id", ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidIdentifier { ref value, .. } if value == "title_without_prefix"));

    let lenient = ExtractOptions {
        strict: false,
        ..ExtractOptions::default()
    };
    let elements = extract("bad_id", lenient).unwrap();
    assert_eq!(ids(&elements), ["ok"]);
}

#[test]
fn test_layout_without_ids() {
    let elements = extract("empty_screen", ExtractOptions::default()).unwrap();
    assert!(elements.is_empty());
}

#[test]
fn test_resolver_reuses_parsed_layouts() {
    let layouts = fixture_layouts();

    let first = layouts.resolve("view_header").unwrap();
    let second = layouts.resolve("view_header").unwrap();

    assert_eq!(first, second);
    assert!(layouts.resolve("view_missing").is_none());
}

#[test]
fn test_field_names_per_convention() {
    let elements = extract("activity_main", ExtractOptions::default()).unwrap();

    let names = |convention: NamingConvention| -> Vec<String> {
        elements
            .iter()
            .cloned()
            .map(|mut e| e.field_name(convention).to_string())
            .collect()
    };

    assert_eq!(
        names(NamingConvention::Snake),
        ["header_icon", "title", "user_name", "submit_button"]
    );
    assert_eq!(
        names(NamingConvention::Camel),
        ["headerIcon", "title", "userName", "submitButton"]
    );
    assert_eq!(
        names(NamingConvention::HungarianMember),
        ["mHeaderIcon", "mTitle", "mUserName", "mSubmitButton"]
    );
}

#[test]
fn test_butterknife_pipeline() {
    let mut elements = extract("activity_main", ExtractOptions::default()).unwrap();
    elements[3].include_click_handler = true;
    elements[0].include_field_declaration = false;

    let code = BindingStyle::ButterKnife
        .emitter("")
        .emit(&mut elements, NamingConvention::HungarianMember);

    assert!(!code.contains("R.id.header_icon"));
    assert!(code.contains("@BindView(R.id.title)\nTextView mTitle;"));
    assert!(code.contains("@BindView(R.id.submit_button)\nAppCompatButton mSubmitButton;"));
    assert!(code.contains(
        "@OnClick(R.id.submit_button)\nvoid submitButtonClick(AppCompatButton submitButton) {\n}"
    ));
}

#[test]
fn test_find_view_pipeline() {
    let mut elements = extract("activity_main", ExtractOptions::default()).unwrap();

    let code = FindViewEmitter::new("private").emit(&mut elements, NamingConvention::Camel);

    assert!(code.starts_with("private ImageView headerIcon;\n"));
    assert!(code.contains("    userName = root.findViewById(R.id.user_name);\n"));
}
