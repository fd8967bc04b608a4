//! Golden scenarios for classification and rendering.
//!
//! Rendered output is pinned with insta inline snapshots; any change to the
//! tie-break order shows up here first.

use chardiff::{ChangeKind, DiffReport, LcsTable, SequenceDiff, Side, Unit, classify};
use chardiff_testhelpers::test;
use insta::assert_snapshot;

use chardiff::ChangeKind::{Added, Removed, Unchanged};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn kinds(a: &str, b: &str) -> (Vec<(char, ChangeKind)>, Vec<(char, ChangeKind)>, usize) {
    let (a, b) = (chars(a), chars(b));
    let table = LcsTable::build(&a, &b);
    let (left, right) = classify(&a, &b, &table);
    (
        left.iter().map(|s| (s.unit, s.kind)).collect(),
        right.iter().map(|s| (s.unit, s.kind)).collect(),
        table.lcs_len(),
    )
}

#[test]
fn identical_texts_are_unchanged() {
    let (left, right, lcs) = kinds("abc", "abc");
    let expected = vec![('a', Unchanged), ('b', Unchanged), ('c', Unchanged)];
    assert_eq!(left, expected);
    assert_eq!(right, expected);
    assert_eq!(lcs, 3);
}

#[test]
fn empty_second_text_removes_everything() {
    let (left, right, lcs) = kinds("abc", "");
    assert_eq!(left, vec![('a', Removed), ('b', Removed), ('c', Removed)]);
    assert!(right.is_empty());
    assert_eq!(lcs, 0);

    let table = LcsTable::build(&chars("abc"), &[]);
    assert!((0..table.rows()).all(|i| table.row(i).iter().all(|&c| c == 0)));
}

#[test]
fn empty_first_text_adds_everything() {
    let (left, right, lcs) = kinds("", "xyz");
    assert!(left.is_empty());
    assert_eq!(right, vec![('x', Added), ('y', Added), ('z', Added)]);
    assert_eq!(lcs, 0);
}

#[test]
fn single_substitution() {
    let (left, right, lcs) = kinds("abc", "axc");
    assert_eq!(lcs, 2);
    assert_eq!(left, vec![('a', Unchanged), ('b', Removed), ('c', Unchanged)]);
    assert_eq!(right, vec![('a', Unchanged), ('x', Added), ('c', Unchanged)]);
}

#[test]
fn swapped_pair_prefers_added_on_tie() {
    let (left, right, lcs) = kinds("ab", "ba");
    assert_eq!(lcs, 1);
    assert_eq!(left, vec![('a', Unchanged), ('b', Removed)]);
    assert_eq!(right, vec![('b', Added), ('a', Unchanged)]);
}

#[test]
fn classification_is_deterministic() {
    let (a, b) = (chars("the cat sat"), chars("a hat is flat"));
    let diff = SequenceDiff::new(&a, &b);
    let first = diff.classify();
    for _ in 0..10 {
        assert_eq!(SequenceDiff::new(&a, &b).classify(), first);
    }
}

#[test]
fn plain_rendering_of_a_sentence() {
    let report = DiffReport::new("The quick brown fox", "The quick red fox", Unit::CodeUnit);
    assert_eq!(report.lcs_len(), 15);
    assert_snapshot!(report.render_plain(Side::Left), @"The quick [-b-]r[-own-] fox");
    assert_snapshot!(report.render_plain(Side::Right), @"The quick r{+ed+} fox");
}

#[test]
fn plain_rendering_of_kitten_sitting() {
    let report = DiffReport::new("kitten", "sitting", Unit::CodePoint);
    assert_snapshot!(report.render_plain(Side::Left), @"[-k-]itt[-e-]n");
    assert_snapshot!(report.render_plain(Side::Right), @"{+s+}itt{+i+}n{+g+}");
    assert_eq!(report.stats().to_string(), "4 unchanged, 3 added, 2 removed");
}

#[test]
fn html_rendering_matches_the_browser_classes() {
    let report = DiffReport::new("hello world", "yellow word", Unit::CodeUnit);
    assert_snapshot!(
        report.render_html(Side::Left),
        @r#"<span class="removed">h</span><span class="unchanged">ello wor</span><span class="removed">l</span><span class="unchanged">d</span>"#
    );
    assert_snapshot!(
        report.render_html(Side::Right),
        @r#"<span class="added">y</span><span class="unchanged">ello</span><span class="added">w</span><span class="unchanged"> word</span>"#
    );
}

#[test]
fn html_rendering_escapes_markup() {
    let report = DiffReport::new("<a>", "<b>", Unit::CodeUnit);
    let left = report.render_html(Side::Left);
    assert_snapshot!(
        left,
        @r#"<span class="unchanged">&lt;</span><span class="removed">a</span><span class="unchanged">&gt;</span>"#
    );
    assert!(!left.contains("<a>"));
}

#[test]
fn grapheme_unit_keeps_combining_marks_together() {
    let by_point = DiffReport::new("e\u{301}", "e", Unit::CodePoint);
    assert_eq!(by_point.lcs_len(), 1);
    assert_eq!(by_point.render_plain(Side::Left), "e[-\u{301}-]");

    let by_grapheme = DiffReport::new("e\u{301}", "e", Unit::Grapheme);
    assert_eq!(by_grapheme.lcs_len(), 0);
    assert_eq!(by_grapheme.render_plain(Side::Left), "[-e\u{301}-]");
    assert_eq!(by_grapheme.render_plain(Side::Right), "{+e+}");
}

#[test]
fn code_units_can_split_surrogate_pairs() {
    // Both emoji share their high surrogate.
    let by_unit = DiffReport::new("a😀", "a😃", Unit::CodeUnit);
    assert_eq!(by_unit.lcs_len(), 2);
    assert_eq!(by_unit.render_plain(Side::Left), "a\u{FFFD}[-\u{FFFD}-]");

    let by_point = DiffReport::new("a😀", "a😃", Unit::CodePoint);
    assert_eq!(by_point.lcs_len(), 1);
    assert_eq!(by_point.render_plain(Side::Left), "a[-😀-]");
    assert_eq!(by_point.render_plain(Side::Right), "a{+😃+}");
}
