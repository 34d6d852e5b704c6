//! Feature-code descriptors
//!
//! Every generator is steered by a short code string. Codes are parsed once at
//! the API boundary into the descriptors below; generator code only ever sees
//! the structured form.
//!
//! | Feature | Grammar | Example |
//! |---------|---------|---------|
//! | Tooth   | `D L B[BBB] R [SS]` | `N-0101g+-` |
//! | Slit    | `D B`   | `E1` |
//! | Wave    | `D P`   | `Nc` |
//! | Line    | `D [SS]`| `w+-` |
//! | Flex    | `D B`   | `S0` |
//!
//! `D` is a compass letter (lowercase mirrors), `L`/`R` edge modifiers
//! (`-` none, `g` grow and cut, `o` grow but leave open), `B` level bits,
//! `P` wave phase (`r`, `f`, `c`, `t`) and `S` per-end kerf signs (`+`, `-`).

use crate::direction::Orientation;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn parse_bit(code: &str, c: char) -> Result<bool> {
    match c {
        '0' => Ok(false),
        '1' => Ok(true),
        _ => Err(Error::invalid_code(
            code,
            format!("level bit must be '0' or '1', got '{}'", c),
        )),
    }
}

/// Which way kerf pushes an outer end of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KerfSign {
    /// Extend the end by the kerf (`+`)
    Outward,
    /// Pull the end back by the kerf (`-`)
    Inward,
}

impl KerfSign {
    fn parse(code: &str, c: char) -> Result<Self> {
        match c {
            '+' => Ok(KerfSign::Outward),
            '-' => Ok(KerfSign::Inward),
            _ => Err(Error::invalid_code(
                code,
                format!("kerf sign must be '+' or '-', got '{}'", c),
            )),
        }
    }

    /// +1 for outward, -1 for inward.
    pub fn factor(&self) -> f64 {
        match self {
            KerfSign::Outward => 1.0,
            KerfSign::Inward => -1.0,
        }
    }

    pub fn from_protrude(protrude: bool) -> Self {
        if protrude {
            KerfSign::Outward
        } else {
            KerfSign::Inward
        }
    }
}

/// End treatment of a tooth edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeModifier {
    /// Extend the edge by the corner height on this end.
    pub grow: bool,
    /// Cut the grown segment; when false it is left open (pen up).
    pub line: bool,
}

impl EdgeModifier {
    pub const NONE: EdgeModifier = EdgeModifier {
        grow: false,
        line: false,
    };

    fn parse(code: &str, c: char) -> Result<Self> {
        match c {
            '-' => Ok(Self::NONE),
            'g' => Ok(EdgeModifier {
                grow: true,
                line: true,
            }),
            'o' => Ok(EdgeModifier {
                grow: true,
                line: false,
            }),
            _ => Err(Error::invalid_code(
                code,
                format!("edge modifier must be '-', 'g' or 'o', got '{}'", c),
            )),
        }
    }

    /// Grown but not cut.
    pub fn is_open(&self) -> bool {
        self.grow && !self.line
    }
}

/// Binary level pattern of a square-wave edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPattern {
    /// One bit, broadcast to a plain alternation starting with it.
    Single(bool),
    /// First, second, second-to-last and last bits; the interior keeps alternating.
    Boundary([bool; 4]),
}

impl LevelPattern {
    /// Expand to one level per segment.
    pub fn expand(&self, n: usize) -> Vec<bool> {
        match *self {
            LevelPattern::Single(first) => (0..n).map(|i| first ^ (i % 2 == 1)).collect(),
            LevelPattern::Boundary([first, second, penultimate, last]) => {
                let mut levels: Vec<bool> = (0..n).map(|i| second ^ (i % 2 == 0)).collect();
                // Assign right to left so the leading bits win when n is small.
                if n >= 4 {
                    levels[n - 2] = penultimate;
                }
                if n >= 2 {
                    levels[n - 1] = last;
                }
                if n >= 2 {
                    levels[1] = second;
                }
                if n >= 1 {
                    levels[0] = first;
                }
                levels
            }
        }
    }
}

/// Parsed finger-joint code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToothCode {
    pub orientation: Orientation,
    pub left: EdgeModifier,
    pub levels: LevelPattern,
    pub right: EdgeModifier,
    /// Explicit (left, right) end signs; `None` derives them from the protrude flag.
    pub end_signs: Option<(KerfSign, KerfSign)>,
}

impl FromStr for ToothCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let chars: Vec<char> = code.chars().collect();
        let bit_count = match chars.len() {
            4 | 6 => 1,
            7 | 9 => 4,
            n => {
                return Err(Error::invalid_code(
                    code,
                    format!("tooth codes have 4, 6, 7 or 9 characters, got {}", n),
                ))
            }
        };
        let orientation = Orientation::parse_leading(code)?;
        let left = EdgeModifier::parse(code, chars[1])?;
        let levels = if bit_count == 1 {
            LevelPattern::Single(parse_bit(code, chars[2])?)
        } else {
            LevelPattern::Boundary([
                parse_bit(code, chars[2])?,
                parse_bit(code, chars[3])?,
                parse_bit(code, chars[4])?,
                parse_bit(code, chars[5])?,
            ])
        };
        let right_at = 2 + bit_count;
        let right = EdgeModifier::parse(code, chars[right_at])?;
        let end_signs = if chars.len() > right_at + 1 {
            Some((
                KerfSign::parse(code, chars[right_at + 1])?,
                KerfSign::parse(code, chars[right_at + 2])?,
            ))
        } else {
            None
        };

        Ok(Self {
            orientation,
            left,
            levels,
            right,
            end_signs,
        })
    }
}

/// Parsed slot-row code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlitCode {
    pub orientation: Orientation,
    /// Level of the first segment; lowercase letters invert it.
    pub parity: bool,
}

impl SlitCode {
    /// Whether segment `i` receives a slot.
    pub fn is_cut(&self, i: usize) -> bool {
        let level = self.parity ^ (i % 2 == 1);
        level != self.orientation.mirrored
    }
}

impl FromStr for SlitCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 2 {
            return Err(Error::invalid_code(code, "slit codes have 2 characters"));
        }
        Ok(Self {
            orientation: Orientation::parse_leading(code)?,
            parity: parse_bit(code, chars[1])?,
        })
    }
}

/// Starting phase of a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Starts on the centre line heading outward (`r`)
    Rising,
    /// Starts on the centre line heading inward (`f`)
    Falling,
    /// Starts at the outer peak (`c`)
    Crest,
    /// Starts at the inner peak (`t`)
    Trough,
}

/// Parsed wave code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveCode {
    pub orientation: Orientation,
    pub phase: WavePhase,
}

impl FromStr for WaveCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 2 {
            return Err(Error::invalid_code(code, "wave codes have 2 characters"));
        }
        let phase = match chars[1] {
            'r' => WavePhase::Rising,
            'f' => WavePhase::Falling,
            'c' => WavePhase::Crest,
            't' => WavePhase::Trough,
            other => {
                return Err(Error::invalid_code(
                    code,
                    format!("wave phase must be one of r, f, c, t, got '{}'", other),
                ))
            }
        };
        Ok(Self {
            orientation: Orientation::parse_leading(code)?,
            phase,
        })
    }
}

/// Parsed straight-edge code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCode {
    pub orientation: Orientation,
    /// (start, end) kerf signs along the travel axis.
    pub end_signs: (KerfSign, KerfSign),
}

impl FromStr for LineCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let chars: Vec<char> = code.chars().collect();
        let end_signs = match chars.len() {
            1 => (KerfSign::Outward, KerfSign::Outward),
            3 => (
                KerfSign::parse(code, chars[1])?,
                KerfSign::parse(code, chars[2])?,
            ),
            n => {
                return Err(Error::invalid_code(
                    code,
                    format!("line codes have 1 or 3 characters, got {}", n),
                ))
            }
        };
        Ok(Self {
            orientation: Orientation::parse_leading(code)?,
            end_signs,
        })
    }
}

/// Parsed living-hinge code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexCode {
    pub orientation: Orientation,
    /// Start parity of the brick pattern.
    pub parity: bool,
}

impl FromStr for FlexCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != 2 {
            return Err(Error::invalid_code(code, "flex codes have 2 characters"));
        }
        Ok(Self {
            orientation: Orientation::parse_leading(code)?,
            parity: parse_bit(code, chars[1])?,
        })
    }
}
