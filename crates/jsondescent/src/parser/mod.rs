//! Recursive-descent parser for the restricted JSON grammar.
//!
//! There is no separate lexer: every production reads characters straight
//! from the [`Cursor`], using one character of lookahead to pick the next
//! production. Errors abort the parse at the first violation.
//!
//! Grammar (whitespace is space, tab, line feed and carriage return):
//!
//! ```text
//! value   = ws ( array | object | string | number | "true" | "false" | "null" ) ws
//! array   = "[" ws ( "]" | value ( "," value )* "]" )
//! object  = "{" ws ( "}" | member ( "," ws member )* "}" )
//! member  = ws string ws ":" ws value
//! string  = '"' strchar* '"'
//! strchar = ASCII letter | digit | " " | one of !#$%&'()*+,-./
//! number  = digit+
//! ```
mod cursor;

use self::cursor::Cursor;
use crate::{
    error::{END_OF_INPUT, ParseError, SyntaxError},
    value::{Array, Map, Value},
};

/// Parses one complete document.
///
/// The whole of `source` must be a single value, optionally surrounded by
/// whitespace.
///
/// # Errors
///
/// Returns the first grammar violation, including
/// [`SyntaxError::TrailingData`] when anything but whitespace follows the
/// value.
///
/// # Examples
///
/// ```
/// use jsondescent::{Value, parse};
///
/// let v = parse(r#"{"a": [1, 2]}"#).unwrap();
/// assert_eq!(v.to_string(), r#"{"a":[1,2]}"#);
/// assert!(parse("1 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Value, ParseError> {
    Parser::new(source).parse()
}

/// A single-use parser over a fully buffered source.
///
/// The parser owns its cursor exclusively; it is consumed by
/// [`parse`](Parser::parse).
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Parses one value and requires the input to end after it.
    ///
    /// # Errors
    ///
    /// See [`parse`](crate::parse).
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let result = self.value().and_then(|value| {
            if self.cursor.is_at_end() {
                Ok(value)
            } else {
                Err(self.error(SyntaxError::TrailingData))
            }
        });

        match &result {
            Ok(value) => {
                tracing::debug!(
                    kind = value.type_name(),
                    consumed = self.offset(),
                    "parsed document"
                );
            }
            Err(err) => {
                tracing::debug!(
                    error = %err.source,
                    line = err.line,
                    column = err.column,
                    "failed to parse document"
                );
            }
        }
        result
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();

        let value = match self.cursor.peek() {
            Some('[') => Value::Array(self.array()?),
            Some('{') => Value::Object(self.object()?),
            Some('t') => {
                self.literal("true")?;
                Value::Boolean(true)
            }
            Some('f') => {
                self.literal("false")?;
                Value::Boolean(false)
            }
            Some('n') => {
                self.literal("null")?;
                Value::Null
            }
            Some('"') => Value::String(self.string()?),
            Some(c) if c.is_ascii_digit() => Value::Integer(self.number()?),
            Some(c) => return Err(self.error(SyntaxError::UnexpectedCharacter(c))),
            None => return Err(self.error(SyntaxError::UnexpectedCharacter(END_OF_INPUT))),
        };

        self.skip_whitespace();
        Ok(value)
    }

    fn array(&mut self) -> Result<Array, ParseError> {
        self.expect('[')?;
        self.skip_whitespace();
        let mut items = Array::new();

        if self.cursor.peek() == Some(']') {
            self.cursor.bump();
            return Ok(items);
        }

        items.push(self.value()?);
        while self.cursor.peek() == Some(',') {
            self.cursor.bump();
            items.push(self.value()?);
        }

        self.expect(']')?;
        Ok(items)
    }

    fn object(&mut self) -> Result<Map, ParseError> {
        self.expect('{')?;
        self.skip_whitespace();
        let mut members = Map::new();

        if self.cursor.peek() == Some('}') {
            self.cursor.bump();
            return Ok(members);
        }

        let (key, value) = self.member()?;
        members.insert(key, value);
        while self.cursor.peek() == Some(',') {
            self.cursor.bump();
            let (key, value) = self.member()?;
            members.insert(key, value);
        }

        self.expect('}')?;
        Ok(members)
    }

    fn member(&mut self) -> Result<(String, Value), ParseError> {
        self.skip_whitespace();
        let key = self.string()?;
        self.skip_whitespace();
        self.expect(':')?;
        self.skip_whitespace();
        let value = self.value()?;
        Ok((key, value))
    }

    fn string(&mut self) -> Result<String, ParseError> {
        self.expect('"')?;
        let text = self.cursor.eat_while(is_string_char);
        // Anything outside the allowed set, a quote included, ends the run.
        self.expect('"')?;
        Ok(text.into())
    }

    fn number(&mut self) -> Result<i64, ParseError> {
        let start = self.cursor.clone();
        let digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        digits
            .parse::<i64>()
            .map_err(|_| Self::error_at(&start, SyntaxError::NumberOutOfRange))
    }

    fn literal(&mut self, text: &str) -> Result<(), ParseError> {
        if self.cursor.eat_str(text) {
            Ok(())
        } else {
            let found = self.cursor.peek().unwrap_or(END_OF_INPUT);
            Err(self.error(SyntaxError::UnexpectedCharacter(found)))
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.cursor.peek() {
            None => Err(self.error(SyntaxError::UnexpectedEndOfInput)),
            Some(c) if c == expected => {
                self.cursor.bump();
                Ok(())
            }
            Some(c) => Err(self.error(SyntaxError::UnexpectedCharacter(c))),
        }
    }

    fn error(&self, source: SyntaxError) -> ParseError {
        Self::error_at(&self.cursor, source)
    }

    fn error_at(at: &Cursor<'_>, source: SyntaxError) -> ParseError {
        ParseError {
            source,
            offset: at.offset(),
            line: at.line(),
            column: at.column(),
        }
    }
}

fn is_string_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ' ' | '!' | '#' | '$' | '%' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | '-' | '.' | '/'
        )
}
