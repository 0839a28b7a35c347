use textfit::text::{column_px, display_width, line_px, measure, wrap_words};
use textfit::{Edges, HostLayout, Rect, ScrollSize, TextCell};

// ============================================================================
// Display Width
// ============================================================================

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are two columns wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("한글"), 4);
}

// ============================================================================
// Glyph Grid
// ============================================================================

#[test]
fn test_column_advance_rounds_up() {
    assert_eq!(column_px(16), 8);
    assert_eq!(column_px(17), 9);
    assert_eq!(column_px(1), 1);
}

#[test]
fn test_line_height() {
    assert_eq!(line_px(10), 12);
    assert_eq!(line_px(8), 9);
    assert_eq!(line_px(32), 38);
}

// ============================================================================
// Word Wrap
// ============================================================================

#[test]
fn test_wrap_fits_on_one_line() {
    assert_eq!(wrap_words("hello world", 11), vec!["hello world"]);
}

#[test]
fn test_wrap_breaks_between_words() {
    assert_eq!(wrap_words("hello world", 5), vec!["hello", "world"]);
    assert_eq!(wrap_words("aa bb cc", 5), vec!["aa bb", "cc"]);
}

#[test]
fn test_wrap_keeps_long_words_whole() {
    // a word wider than the line overflows horizontally instead of breaking
    assert_eq!(wrap_words("verylongword", 4), vec!["verylongword"]);
}

#[test]
fn test_wrap_respects_hard_newlines() {
    assert_eq!(wrap_words("a\n\nb", 10), vec!["a", "", "b"]);
}

#[test]
fn test_wrap_empty_input() {
    assert_eq!(wrap_words("", 10), vec![""]);
}

// ============================================================================
// Measurement
// ============================================================================

#[test]
fn test_measure_single_line() {
    // 5 columns at 5px advance, one 12px line
    assert_eq!(
        measure("hello", 10, None),
        ScrollSize::new(25, 12)
    );
}

#[test]
fn test_measure_wrapped() {
    // 20px budget at 5px advance gives 4 columns, so "aa bb" wraps
    assert_eq!(
        measure("aa bb", 10, Some(20)),
        ScrollSize::new(10, 24)
    );
}

#[test]
fn test_measure_empty() {
    assert_eq!(measure("", 10, None), ScrollSize::new(0, 12));
}

#[test]
fn test_measured_height_grows_with_size() {
    // larger sizes leave fewer columns, so line count and line height only
    // go up; width is not monotonic (wrapping can shorten the widest line)
    let mut last = 0;
    for size in 8..=32u16 {
        let scroll = measure("the quick brown fox", size, Some(120));
        assert!(
            scroll.height >= last,
            "height shrank between {} and {size}",
            size - 1
        );
        last = scroll.height;
    }
}

// ============================================================================
// TextCell Host
// ============================================================================

#[test]
fn test_cell_content_box_requires_layout() {
    let cell = TextCell::new("cell", "label");
    assert!(cell.content_box("cell").is_none());
}

#[test]
fn test_cell_content_box_subtracts_padding() {
    let mut cell = TextCell::new("cell", "label").padding(Edges::symmetric(2, 6));
    cell.place(Rect::new(10, 10, 100, 40));

    let content = cell.content_box("cell").unwrap();
    assert_eq!(content, Rect::new(16, 12, 88, 36));
}

#[test]
fn test_cell_scroll_size_requires_text() {
    let mut cell = TextCell::new("cell", "label");
    cell.place(Rect::from_size(100, 40));
    assert!(cell.scroll_size("label").is_none());

    cell.set_text("hi");
    assert!(cell.scroll_size("label").is_some());
}

#[test]
fn test_cell_applies_size() {
    let mut cell = TextCell::new("cell", "label");
    cell.set_text("hi");

    assert!(cell.set_text_size("label", 14));
    assert_eq!(cell.applied_size(), 14);

    cell.remove_text();
    assert!(!cell.set_text_size("label", 20), "absent text rejects writes");
}
