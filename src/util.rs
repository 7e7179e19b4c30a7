/// Cuts the `s` string down to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
        s.push_str("...");
    }
    s
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("".into(), 3), "");
    assert_eq!(truncate("abc".into(), 3), "abc");
    assert_eq!(truncate("abcd".into(), 3), "abc...");
    assert_eq!(truncate("ñañaña".into(), 2), "ña...");
}
