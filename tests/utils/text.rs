use summarist::utils::text::{truncate, word_count};

#[test]
fn test_word_count() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("   "), 0);
    assert_eq!(word_count("one"), 1);
    assert_eq!(word_count("a few\nshort  words"), 4);
}

#[test]
fn test_truncate_leaves_short_text_alone() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exact", 5), "exact");
}

#[test]
fn test_truncate_cuts_long_text_with_ellipsis() {
    let result = truncate("a rather long sentence", 10);
    assert_eq!(result.chars().count(), 10);
    assert!(result.ends_with('…'));
}

#[test]
fn test_truncate_is_safe_on_multibyte_text() {
    let result = truncate("héllo wörld ünd möre", 8);
    assert_eq!(result.chars().count(), 8);
}
