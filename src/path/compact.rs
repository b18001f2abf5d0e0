//! Minimal-whitespace serialization of remapped path data.

use super::transform::Scaled;

/// Join tokens into the shortest unambiguous path string.
///
/// Letters and minus signs already delimit numbers, so a space is only
/// needed between a digit and a following non-negative number.
pub fn compact(tokens: &[Scaled]) -> String {
    let mut out = String::new();
    for token in tokens {
        match *token {
            Scaled::Command(letter) => out.push(letter),
            Scaled::Value(value) => {
                if value >= 0 && out.ends_with(|c: char| c.is_ascii_digit()) {
                    out.push(' ');
                }
                out.push_str(&value.to_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(c: char) -> Scaled {
        Scaled::Command(c)
    }

    fn val(v: i64) -> Scaled {
        Scaled::Value(v)
    }

    #[test]
    fn test_negative_sign_is_the_separator() {
        assert_eq!(
            compact(&[cmd('M'), val(480), val(-480), val(-2)]),
            "M480-480-2"
        );
    }

    #[test]
    fn test_space_between_positive_numbers() {
        assert_eq!(compact(&[cmd('l'), val(-1), val(2), val(0)]), "l-1 2 0");
    }

    #[test]
    fn test_letters_take_no_space() {
        assert_eq!(
            compact(&[cmd('M'), val(1), val(2), cmd('L'), val(3), val(4), cmd('Z')]),
            "M1 2L3 4Z"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(compact(&[]), "");
    }
}
