//! Coordinate remapping of tokenized path data.
//!
//! Each number is read in the context of the last command letter and its
//! position inside the current parameter group. A letter may be followed by
//! several groups with the letter left implicit. Incomplete groups and
//! numbers with no command to own them are tolerated, never rejected.

use super::command;
use super::tokenize::Token;

/// Scale and offset applied to one conversion run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    /// Added to absolute Y coordinates only.
    pub y_offset: f64,
}

/// A token after remapping. Coordinates are always whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaled {
    Command(char),
    Value(i64),
}

impl Transform {
    pub fn new(scale: f64, y_offset: f64) -> Self {
        Transform { scale, y_offset }
    }

    /// Remap every parameter in `tokens`, keeping command letters as-is.
    pub fn apply<I>(&self, tokens: I) -> Vec<Scaled>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut tokens = tokens.into_iter().peekable();
        let mut out = Vec::new();

        while let Some(token) = tokens.next() {
            // Numbers outside any parameter group are dropped.
            let Token::Command(letter) = token else {
                continue;
            };
            out.push(Scaled::Command(letter));

            let spec = command::lookup(letter);
            if spec.arity == 0 {
                continue;
            }
            let relative = letter.is_ascii_lowercase();

            while matches!(tokens.peek(), Some(Token::Number(_))) {
                for position in 0..spec.arity {
                    let Some(&Token::Number(value)) = tokens.peek() else {
                        break;
                    };
                    tokens.next();
                    out.push(Scaled::Value(self.map(&spec, relative, position, value)));
                }
            }
        }

        out
    }

    fn map(
        &self,
        spec: &command::CommandSpec,
        relative: bool,
        position: usize,
        value: f64,
    ) -> i64 {
        if spec.is_unscaled(position) {
            value.trunc() as i64
        } else if relative {
            (value * self.scale).round() as i64
        } else if spec.is_y(position) {
            (value * self.scale + self.y_offset).round() as i64
        } else {
            (value * self.scale).round() as i64
        }
    }
}
