//! Integration tests for the border/radius half of the border editor.
//!
//! Tests both sync directions:
//! - named operations regenerating text
//! - the unified contract for sides and corners
//! - hand-edited text read back into state, including defaults

use insta::assert_snapshot;
use studio::BorderEditor;
use studio::border::{
    BorderCorner, BorderSide, BorderStyle, BorderUpdate, BorderValue, BorderValues, RadiusValues,
};

fn sides(values: &BorderValues) -> [&BorderValue; 4] {
    [&values.top, &values.right, &values.bottom, &values.left]
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_opening_state() {
    let editor = BorderEditor::new();
    let state = editor.state();

    assert!(state.border.unified);
    assert!(state.radius.unified);
    for side in sides(&state.border) {
        assert_eq!(side, &BorderValue::new(2, BorderStyle::Solid, "#a6deba"));
    }
    assert_eq!(state.radius, RadiusValues::all(10));
    assert!(state.gradient.is_empty());
    assert_eq!(state.mask, "");
    assert_eq!(editor.css(), "border: 2px solid #a6deba; border-radius: 10px;");
}

// ============================================================================
// UNIFIED BORDER
// ============================================================================

#[test]
fn test_unified_update_writes_all_sides() {
    let mut editor = BorderEditor::new();
    editor.update_border(BorderSide::Bottom, BorderUpdate::Width(5));
    let output = editor.update_border(BorderSide::Right, BorderUpdate::Color("#123456".into()));

    for side in sides(&output.state.border) {
        assert_eq!(side, &BorderValue::new(5, BorderStyle::Solid, "#123456"));
    }
    assert_eq!(output.css, "border: 5px solid #123456; border-radius: 10px;");
}

#[test]
fn test_set_unified_copies_top() {
    let mut editor = BorderEditor::new();
    editor.set_unified_border(false);
    editor.update_border(BorderSide::Top, BorderUpdate::Style(BorderStyle::Double));
    editor.update_border(BorderSide::Left, BorderUpdate::Width(9));

    let output = editor.set_unified_border(true);
    let border = &output.state.border;
    assert!(border.unified);
    assert_eq!(border.top, border.right);
    assert_eq!(border.top, border.bottom);
    assert_eq!(border.top, border.left);
    assert_eq!(border.left, BorderValue::new(2, BorderStyle::Double, "#a6deba"));

    let output = editor.update_border(BorderSide::Left, BorderUpdate::Width(1));
    for side in sides(&output.state.border) {
        assert_eq!(side.width, 1);
    }
}

#[test]
fn test_unset_unified_keeps_values_as_starting_point() {
    let mut editor = BorderEditor::new();
    let before = editor.state().border.clone();
    let output = editor.set_unified_border(false);

    assert!(!output.state.border.unified);
    assert_eq!(output.state.border.top, before.top);
    assert_eq!(output.state.border.left, before.left);
}

// ============================================================================
// PER-SIDE BORDER
// ============================================================================

#[test]
fn test_per_side_update_touches_one_side() {
    let mut editor = BorderEditor::new();
    editor.set_unified_border(false);
    let output = editor.update_border(BorderSide::Right, BorderUpdate::Style(BorderStyle::Dotted));

    assert_eq!(output.state.border.right.style, BorderStyle::Dotted);
    assert_eq!(output.state.border.top.style, BorderStyle::Solid);
    assert_eq!(output.state.border.left.style, BorderStyle::Solid);
}

#[test]
fn test_per_side_text_order() {
    let mut editor = BorderEditor::new();
    editor.set_unified_border(false);
    editor.update_border(BorderSide::Left, BorderUpdate::Color("red".into()));
    editor.update_border(BorderSide::Top, BorderUpdate::Width(4));

    assert_snapshot!(
        editor.css(),
        @"border-top: 4px solid #a6deba; border-right: 2px solid #a6deba; border-bottom: 2px solid #a6deba; border-left: 2px solid red; border-radius: 10px;"
    );
}

// ============================================================================
// RADIUS
// ============================================================================

#[test]
fn test_unified_radius_update() {
    let mut editor = BorderEditor::new();
    let output = editor.update_radius(BorderCorner::BottomRight, 16);

    assert_eq!(output.state.radius, RadiusValues::all(16));
    assert_eq!(output.css, "border: 2px solid #a6deba; border-radius: 16px;");
}

#[test]
fn test_per_corner_radius() {
    let mut editor = BorderEditor::new();
    editor.set_unified_radius(false);
    editor.update_radius(BorderCorner::TopRight, 20);
    let output = editor.update_radius(BorderCorner::BottomLeft, 0);

    assert_eq!(
        output.css,
        "border: 2px solid #a6deba; border-radius: 10px 20px 10px 0px;"
    );
}

#[test]
fn test_set_unified_radius_copies_top_left() {
    let mut editor = BorderEditor::new();
    editor.set_unified_radius(false);
    editor.update_radius(BorderCorner::TopLeft, 3);
    editor.update_radius(BorderCorner::BottomRight, 30);

    let output = editor.set_unified_radius(true);
    assert_eq!(output.state.radius, RadiusValues::all(3));
}

// ============================================================================
// HAND-EDITED TEXT: BORDER
// ============================================================================

#[test]
fn test_hand_edit_unified_border() {
    let mut editor = BorderEditor::new();
    let output = editor.apply_hand_edited_text("border: 3px groove rgb(10, 20, 30); border-radius: 6px;");

    let border = &output.state.border;
    assert!(border.unified);
    for side in sides(border) {
        assert_eq!(side, &BorderValue::new(3, BorderStyle::Groove, "rgb(10, 20, 30)"));
    }
    assert_eq!(output.state.radius, RadiusValues::all(6));
    assert_eq!(output.css, "border: 3px groove rgb(10, 20, 30); border-radius: 6px;");
}

#[test]
fn test_hand_edit_missing_sides_reset() {
    let mut editor = BorderEditor::new();
    let output = editor.apply_hand_edited_text("border-top: 1px dashed red; border-left: oops;");

    let border = &output.state.border;
    assert!(!border.unified);
    assert_eq!(border.top, BorderValue::new(1, BorderStyle::Dashed, "red"));
    assert_eq!(border.right, BorderValue::missing());
    assert_eq!(border.bottom, BorderValue::new(0, BorderStyle::Solid, "transparent"));
    assert_eq!(border.left, BorderValue::missing());
}

#[test]
fn test_hand_edit_without_border_resets_all_sides() {
    let mut editor = BorderEditor::new();
    let output = editor.apply_hand_edited_text("border-radius: 2px;");

    assert!(output.state.border.unified);
    for side in sides(&output.state.border) {
        assert_eq!(side, &BorderValue::missing());
    }
}

#[test]
fn test_hand_edit_side_overrides_shorthand() {
    let mut editor = BorderEditor::new();
    let output =
        editor.apply_hand_edited_text("border: 2px solid blue; border-bottom: 6px inset #000;");

    let border = &output.state.border;
    assert!(!border.unified);
    assert_eq!(border.top, BorderValue::new(2, BorderStyle::Solid, "blue"));
    assert_eq!(border.bottom, BorderValue::new(6, BorderStyle::Inset, "#000"));
}

#[test]
fn test_hand_edit_keeps_only_the_color_token() {
    let mut editor = BorderEditor::new();
    let output = editor.apply_hand_edited_text("border: 2px solid #ff0000 !important;");
    assert_eq!(output.state.border.top.color, "#ff0000");

    let output = editor.update_border(BorderSide::Top, BorderUpdate::Width(3));
    assert_eq!(output.css, "border: 3px solid #ff0000; border-radius: 10px;");
}

#[test]
fn test_hand_edit_side_with_extra_words() {
    let mut editor = BorderEditor::new();
    let output = editor.apply_hand_edited_text("border-top: 1px solid red blue; border-left: 1px solid junk;");

    assert_eq!(output.state.border.top, BorderValue::new(1, BorderStyle::Solid, "red"));
    assert_eq!(output.state.border.left, BorderValue::missing());
}

#[test]
fn test_controls_regenerate_after_hand_edit() {
    let mut editor = BorderEditor::new();
    editor.apply_hand_edited_text("border-top:1px solid red");
    let output = editor.update_border(BorderSide::Right, BorderUpdate::Width(2));

    assert_snapshot!(
        output.css,
        @"border-top: 1px solid red; border-right: 2px solid transparent; border-bottom: 0px solid transparent; border-left: 0px solid transparent; border-radius: 10px;"
    );
}

// ============================================================================
// HAND-EDITED TEXT: RADIUS
// ============================================================================

#[test]
fn test_hand_edit_two_value_radius() {
    let mut editor = BorderEditor::new();
    let radius = editor
        .apply_hand_edited_text("border-radius: 4px 8px;")
        .state
        .radius;

    assert_eq!(radius.top_left, 4);
    assert_eq!(radius.bottom_right, 4);
    assert_eq!(radius.top_right, 8);
    assert_eq!(radius.bottom_left, 8);
    assert!(!radius.unified);
}

#[test]
fn test_hand_edit_four_value_radius() {
    let mut editor = BorderEditor::new();
    let radius = editor
        .apply_hand_edited_text("border-radius: 1px 2px 3px 4px")
        .state
        .radius;

    assert_eq!(
        [radius.top_left, radius.top_right, radius.bottom_right, radius.bottom_left],
        [1, 2, 3, 4]
    );
    assert!(!radius.unified);
}

#[test]
fn test_hand_edit_without_radius_keeps_radius() {
    let mut editor = BorderEditor::new();
    editor.update_radius(BorderCorner::TopLeft, 42);
    let output = editor.apply_hand_edited_text("border: 1px solid red;");

    assert_eq!(output.state.radius, RadiusValues::all(42));
}

#[test]
fn test_hand_edit_unreadable_radius_keeps_radius() {
    let mut editor = BorderEditor::new();
    let output = editor.apply_hand_edited_text("border-radius: 50%;");
    assert_eq!(output.state.radius, RadiusValues::all(10));
}

#[test]
fn test_get_by_corner_and_side() {
    let mut editor = BorderEditor::new();
    editor.apply_hand_edited_text("border-left: 7px ridge #fff; border-radius: 1px 2px 3px;");
    let state = editor.state();

    assert_eq!(state.radius.get(BorderCorner::BottomLeft), 2);
    assert_eq!(state.border.get(BorderSide::Left).width, 7);
}
