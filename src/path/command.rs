//! Static parameter layout of each path command.

/// Parameter layout of one command, shared by its absolute and relative form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Numbers per repetition group.
    pub arity: usize,
    /// Positions within a group that hold a Y coordinate.
    pub y_positions: &'static [usize],
    /// Positions that are angles or flags: truncated, never scaled.
    pub unscaled: &'static [usize],
}

impl CommandSpec {
    const fn new(arity: usize, y_positions: &'static [usize]) -> Self {
        CommandSpec {
            arity,
            y_positions,
            unscaled: &[],
        }
    }

    pub fn is_y(&self, position: usize) -> bool {
        self.y_positions.contains(&position)
    }

    pub fn is_unscaled(&self, position: usize) -> bool {
        self.unscaled.contains(&position)
    }
}

const POINT: CommandSpec = CommandSpec::new(2, &[1]);
const HORIZONTAL: CommandSpec = CommandSpec::new(1, &[]);
const VERTICAL: CommandSpec = CommandSpec::new(1, &[0]);
const CUBIC: CommandSpec = CommandSpec::new(6, &[1, 3, 5]);
const CURVE_PAIR: CommandSpec = CommandSpec::new(4, &[1, 3]);
const ARC: CommandSpec = CommandSpec {
    arity: 7,
    y_positions: &[6],
    unscaled: &[2, 3, 4],
};

/// Close path, and any letter that is not a path command.
pub const NO_PARAMS: CommandSpec = CommandSpec::new(0, &[]);

/// Look up a command letter, case-insensitively.
pub fn lookup(letter: char) -> CommandSpec {
    match letter.to_ascii_uppercase() {
        'M' | 'L' | 'T' => POINT,
        'H' => HORIZONTAL,
        'V' => VERTICAL,
        'C' => CUBIC,
        'S' | 'Q' => CURVE_PAIR,
        'A' => ARC,
        _ => NO_PARAMS,
    }
}
