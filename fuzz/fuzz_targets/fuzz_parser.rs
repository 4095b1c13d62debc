#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use jsondescent::parse;
use libfuzzer_sys::fuzz_target;

// Nesting is bounded only by the call stack; keep inputs short enough that
// the fuzzer exercises the grammar rather than stack exhaustion.
const MAX_LEN: usize = 4096;

/// A document assembled from grammar fragments, so that most inputs get past
/// the first few characters.
#[derive(Debug, Arbitrary)]
enum Fragment {
    Open(bool),
    Close(bool),
    Comma,
    Colon,
    Whitespace(u8),
    Literal(u8),
    Digits(u32),
    Quoted(Vec<u8>),
    Byte(u8),
}

fn render(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Open(array) => out.push(if *array { '[' } else { '{' }),
            Fragment::Close(array) => out.push(if *array { ']' } else { '}' }),
            Fragment::Comma => out.push(','),
            Fragment::Colon => out.push(':'),
            Fragment::Whitespace(n) => out.push([' ', '\t', '\n', '\r'][usize::from(*n % 4)]),
            Fragment::Literal(n) => out.push_str(["true", "false", "null"][usize::from(*n % 3)]),
            Fragment::Digits(n) => out.push_str(&n.to_string()),
            Fragment::Quoted(bytes) => {
                out.push('"');
                out.extend(bytes.iter().map(|b| char::from(b' ' + b % 95)));
                out.push('"');
            }
            Fragment::Byte(b) => out.push(char::from(*b)),
        }
    }
    out
}

fn check(source: &str) {
    if source.len() > MAX_LEN {
        return;
    }
    match parse(source) {
        Ok(value) => {
            let rendered = value.to_string();
            let reparsed = parse(&rendered).expect("rendering of a parsed value must parse");
            assert_eq!(reparsed, value);
        }
        Err(err) => {
            assert!(err.offset() <= source.len());
            assert!(source.is_char_boundary(err.offset()));
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    if let Ok(fragments) = Vec::<Fragment>::arbitrary(&mut u) {
        check(&render(&fragments));
    }
    if let Ok(text) = core::str::from_utf8(data) {
        check(text);
    }
});
