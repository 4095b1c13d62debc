use quickcheck::{Arbitrary, Gen};

use crate::{Map, Value};

/// Every character a string may contain.
pub(crate) const STRING_CHARS: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', 'A', 'B', 'Q', 'Z', '0', '1', '5', '9', ' ', '!', '#', '$',
    '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
];

pub(crate) const WHITESPACE: &[&str] = &["", " ", "\t", "\n", "\r\n", "  \n\t "];

fn gen_string(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len)
        .filter_map(|_| g.choose(STRING_CHARS).copied())
        .collect()
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            let scalar = |g: &mut Gen| match usize::arbitrary(g) % 5 {
                0 => Value::Null,
                1 => Value::Boolean(bool::arbitrary(g)),
                2 | 3 => Value::Integer(i64::arbitrary(g) & i64::MAX),
                _ => Value::String(gen_string(g)),
            };
            if depth == 0 {
                return scalar(g);
            }
            match usize::arbitrary(g) % 6 {
                0..=3 => scalar(g),
                4 => {
                    let len = usize::arbitrary(g) % 4;
                    Value::Array((0..len).map(|_| gen_val(g, depth - 1)).collect())
                }
                _ => {
                    let len = usize::arbitrary(g) % 4;
                    let mut map = Map::new();
                    for _ in 0..len {
                        map.insert(gen_string(g), gen_val(g, depth - 1));
                    }
                    Value::Object(map)
                }
            }
        }

        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Value::Array(items) => Box::new(items.clone().into_iter()),
            Value::Object(map) => Box::new(map.clone().into_values()),
            Value::Integer(n) => Box::new(n.shrink().filter(|n| *n >= 0).map(Value::Integer)),
            _ => Box::new(core::iter::empty()),
        }
    }
}
