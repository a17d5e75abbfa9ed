//! Property tests: the validator agrees with a brute-force bracket oracle

use proptest::prelude::*;
use tapegen::{lex, validate, StructuralError, SymbolKind};

/// What the oracle expects for one instruction stream
#[derive(Debug, PartialEq, Eq)]
enum Expected {
    Pairs(Vec<(usize, usize)>),
    UnmatchedOpen(usize),
    UnmatchedClose(usize),
}

/// Forward scan from each `[` for the `]` that closes it
fn closing_partner(kinds: &[SymbolKind], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, kind) in kinds.iter().enumerate().skip(open) {
        match kind {
            SymbolKind::LoopOpen => depth += 1,
            SymbolKind::LoopClose => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn oracle(kinds: &[SymbolKind]) -> Expected {
    let mut depth = 0isize;
    for (i, kind) in kinds.iter().enumerate() {
        match kind {
            SymbolKind::LoopOpen => depth += 1,
            SymbolKind::LoopClose => {
                depth -= 1;
                if depth < 0 {
                    return Expected::UnmatchedClose(i);
                }
            }
            _ => {}
        }
    }

    let mut pairs = Vec::new();
    for (i, kind) in kinds.iter().enumerate() {
        if *kind == SymbolKind::LoopOpen {
            match closing_partner(kinds, i) {
                Some(close) => pairs.push((i, close)),
                None => return Expected::UnmatchedOpen(i),
            }
        }
    }
    Expected::Pairs(pairs)
}

fn actual(text: &str) -> Expected {
    let symbols = lex(text);
    let index_of = |offset: usize| {
        symbols
            .iter()
            .position(|s| s.position.offset == offset)
            .expect("error points at a symbol")
    };
    match validate(&symbols) {
        Ok(map) => Expected::Pairs(map.pairs().collect()),
        Err(StructuralError::UnmatchedLoopOpen { position }) => {
            Expected::UnmatchedOpen(index_of(position.offset))
        }
        Err(StructuralError::UnmatchedLoopClose { position }) => {
            Expected::UnmatchedClose(index_of(position.offset))
        }
    }
}

fn kinds(text: &str) -> Vec<SymbolKind> {
    lex(text).iter().map(|s| s.kind).collect()
}

/// Programs whose brackets are well-nested by construction
fn well_nested() -> impl Strategy<Value = String> {
    let leaf = "[-+<>.,a \n]{0,6}";
    leaf.prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|body| format!("[{}]", body)),
            prop::collection::vec(inner, 1..4).prop_map(|parts| parts.concat()),
        ]
    })
}

/// Anything over the symbol alphabet plus filler
fn any_program() -> impl Strategy<Value = String> {
    "[-+<>.,\\[\\]x ]{0,48}"
}

proptest! {
    #[test]
    fn well_nested_streams_validate(text in well_nested()) {
        let expected = oracle(&kinds(&text));
        prop_assert!(matches!(expected, Expected::Pairs(_)));
        prop_assert_eq!(actual(&text), expected);
    }

    #[test]
    fn validator_agrees_with_oracle(text in any_program()) {
        prop_assert_eq!(actual(&text), oracle(&kinds(&text)));
    }

    #[test]
    fn extra_close_is_reported_where_inserted(text in well_nested()) {
        let broken = format!("{}]{}", text, text);
        let at = kinds(&text).len();
        prop_assert_eq!(actual(&broken), Expected::UnmatchedClose(at));
    }

    #[test]
    fn extra_open_is_reported_where_inserted(text in well_nested()) {
        let broken = format!("{}[{}", text, text);
        let at = kinds(&text).len();
        prop_assert_eq!(actual(&broken), Expected::UnmatchedOpen(at));
    }
}
