//! A recursive-descent parser for a restricted subset of JSON.
//!
//! The grammar accepts arrays, objects, `true`, `false`, `null`, non-negative
//! integers and strings made only of ASCII letters, digits, space and the
//! punctuation `! # $ % & ' ( ) * + , - . /`. There are no escape sequences,
//! no signs, no fractions and no exponents; input using them is rejected
//! rather than interpreted.
//!
//! ```
//! use jsondescent::{SyntaxError, Value, parse};
//!
//! let v = parse(r#"{"name": "disk 0", "sizes": [512, 4096], "ok": true}"#).unwrap();
//! assert_eq!(v["sizes"][1], Value::Integer(4096));
//!
//! let err = parse("[1, 2").unwrap_err();
//! assert_eq!(err.syntax_error(), &SyntaxError::UnexpectedEndOfInput);
//! ```

mod error;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{END_OF_INPUT, ParseError, SyntaxError};
pub use parser::{Parser, parse};
pub use value::{Array, Map, Value};
