//! Path data tokenizer.
//!
//! Splits a `d` attribute into single command letters and numeric literals.
//! Commas, whitespace and anything else that is neither a letter nor the
//! start of a number are separators and never produce a token.

/// One lexical unit of path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A single ASCII letter. Known or not, the transformer decides.
    Command(char),
    /// A signed decimal literal with optional exponent.
    Number(f64),
}

/// Lazy token stream over a path data string.
///
/// A number is the longest run matching
/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
/// An `e` that is not followed by exponent digits is a letter of its own.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    bytes: &'a [u8],
    src: &'a str,
    pos: usize,
}

/// Tokenize a path `d` string.
pub fn tokenize(d: &str) -> Tokens<'_> {
    Tokens {
        bytes: d.as_bytes(),
        src: d,
        pos: 0,
    }
}

impl<'a> Tokens<'a> {
    fn digit_at(&self, i: usize) -> bool {
        self.bytes.get(i).is_some_and(u8::is_ascii_digit)
    }

    fn skip_digits(&self, mut i: usize) -> usize {
        while self.digit_at(i) {
            i += 1;
        }
        i
    }

    /// End offset of a number starting at `start`, if one starts there.
    fn number_end(&self, start: usize) -> Option<usize> {
        let mut i = start;
        if matches!(self.bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }

        let int_end = self.skip_digits(i);
        if int_end > i {
            i = int_end;
            if self.bytes.get(i) == Some(&b'.') {
                i = self.skip_digits(i + 1);
            }
        } else if self.bytes.get(i) == Some(&b'.') && self.digit_at(i + 1) {
            i = self.skip_digits(i + 1);
        } else {
            return None;
        }

        if matches!(self.bytes.get(i), Some(b'e' | b'E')) {
            let mut exp = i + 1;
            if matches!(self.bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            if self.digit_at(exp) {
                i = self.skip_digits(exp);
            }
        }

        Some(i)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];

            if b.is_ascii_alphabetic() {
                self.pos += 1;
                return Some(Token::Command(b as char));
            }

            match self.number_end(self.pos) {
                Some(end) => {
                    let text = &self.src[self.pos..end];
                    self.pos = end;
                    // Literals too large for f64 are dropped like any other unreadable input.
                    match text.parse::<f64>() {
                        Ok(value) if value.is_finite() => return Some(Token::Number(value)),
                        _ => {}
                    }
                }
                None => self.pos += 1,
            }
        }
        None
    }
}
