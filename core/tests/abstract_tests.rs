use ris_core::{decode_abstract, reconstruct_abstract, AbstractIndex};

fn parse(json: &str) -> AbstractIndex {
    serde_json::from_str(json).unwrap()
}

#[test]
fn rebuilds_in_position_order() {
    assert_eq!(reconstruct_abstract(&parse(r#"{"hello": [0], "world": [1]}"#)), "hello world");
    assert_eq!(reconstruct_abstract(&parse(r#"{"world": [1], "hello": [0]}"#)), "hello world");
}

#[test]
fn empty_index_gives_empty_text() {
    assert_eq!(reconstruct_abstract(&parse("{}")), "");
    assert_eq!(decode_abstract(Some(&parse("{}"))), None);
    assert_eq!(decode_abstract(None), None);
}

#[test]
fn gaps_stay_as_blank_slots() {
    assert_eq!(reconstruct_abstract(&parse(r#"{"a": [0], "b": [2]}"#)), "a  b");
    assert_eq!(reconstruct_abstract(&parse(r#"{"end": [2]}"#)), "  end");
}

#[test]
fn repeated_words() {
    let index = parse(r#"{"the": [0, 2], "cat": [1], "sat": [3]}"#);
    assert_eq!(reconstruct_abstract(&index), "the cat the sat");
}

#[test]
fn realistic_abstract() {
    let index = parse(
        r#"{"We": [0], "present": [1], "a": [2, 10], "novel": [3], "approach": [4], "to": [5],
            "machine": [6], "learning": [7], "using": [8], "deep": [9], "neural": [11], "network": [12]}"#,
    );
    assert_eq!(
        decode_abstract(Some(&index)).as_deref(),
        Some("We present a novel approach to machine learning using deep a neural network")
    );
}
