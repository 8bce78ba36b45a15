use super::*;

#[test]
fn segment_escapes_slash_and_space() {
    assert_eq!(segment("c++/rust tips"), "c++%2Frust%20tips");
}

#[test]
fn segment_keeps_plain_ids() {
    assert_eq!(segment("post_1a2b3c"), "post_1a2b3c");
}

#[test]
fn component_escapes_reserved() {
    assert_eq!(component("a&b=c d"), "a%26b%3Dc%20d");
}

#[test]
fn decode_handles_plus_and_percent() {
    assert_eq!(decode("hello+world%21"), "hello world!");
}

#[test]
fn query_string_empty_for_no_pairs() {
    assert_eq!(query_string(&[]), "");
}

#[test]
fn query_string_joins_pairs() {
    let qs = query_string(&[("page", "2".to_owned()), ("search", "rust & go".to_owned())]);
    assert_eq!(qs, "?page=2&search=rust%20%26%20go");
}

#[test]
fn parse_pairs_strips_hash() {
    let pairs = parse_pairs("#session_id=abc123&redirect=https%3A%2F%2Fevil.example");
    assert_eq!(
        pairs,
        vec![
            ("session_id".to_owned(), "abc123".to_owned()),
            ("redirect".to_owned(), "https://evil.example".to_owned()),
        ]
    );
}

#[test]
fn parse_pairs_tolerates_bare_keys_and_empties() {
    let pairs = parse_pairs("?flag&&x=1");
    assert_eq!(pairs, vec![("flag".to_owned(), String::new()), ("x".to_owned(), "1".to_owned())]);
}

#[test]
fn segment_decoding_keeps_plus() {
    assert_eq!(decode_segment("c++%20co"), "c++ co");
    assert_eq!(decode("c++%20co"), "c   co");
}
