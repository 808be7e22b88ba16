use std::fmt;
use std::str::FromStr;

use crate::error::ChromaveilError;
use crate::result::Result;

/// The color vision deficiency to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeficiencyKind {
    Red,
    Green,
    Blue,
    /// no deficiency, the identity transform
    #[default]
    None,
}

impl DeficiencyKind {
    pub const ALL: [DeficiencyKind; 4] = [
        DeficiencyKind::Red,
        DeficiencyKind::Green,
        DeficiencyKind::Blue,
        DeficiencyKind::None,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeficiencyKind::Red => "red",
            DeficiencyKind::Green => "green",
            DeficiencyKind::Blue => "blue",
            DeficiencyKind::None => "none",
        }
    }
}

impl fmt::Display for DeficiencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeficiencyKind {
    type Err = ChromaveilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red" => Ok(DeficiencyKind::Red),
            "green" => Ok(DeficiencyKind::Green),
            "blue" => Ok(DeficiencyKind::Blue),
            "none" => Ok(DeficiencyKind::None),
            other => Err(ChromaveilError::UnknownDeficiency(other.to_owned())),
        }
    }
}

/// A fixed 3x3 linear color transform, rows map to the output R, G and B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix([[f64; 3]; 3]);

const RED: [[f64; 3]; 3] = [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]];
const GREEN: [[f64; 3]; 3] = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.142, 0.858]];
const BLUE: [[f64; 3]; 3] = [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]];
const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

impl TransformMatrix {
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    pub const fn identity() -> Self {
        Self(IDENTITY)
    }

    /// the catalog matrix simulating `kind`
    pub const fn for_deficiency(kind: DeficiencyKind) -> Self {
        match kind {
            DeficiencyKind::Red => Self(RED),
            DeficiencyKind::Green => Self(GREEN),
            DeficiencyKind::Blue => Self(BLUE),
            DeficiencyKind::None => Self(IDENTITY),
        }
    }

    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// Multiplies the matrix with the column vector `(r, g, b)`.
    ///
    /// Every component is the dot product of one row with the input, summed
    /// left to right in `f64`, and then truncated toward zero. The result is
    /// not clamped, a matrix with negative coefficients or rows summing above
    /// one can leave the `0..=255` range.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(&self, rgb: [u8; 3]) -> [i32; 3] {
        let v = rgb.map(f64::from);
        self.0.map(|row| {
            let dot = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
            // `as` truncates toward zero (and saturates at the i32 bounds), never rounds
            dot.trunc() as i32
        })
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Looks up the catalog matrix by its deficiency name.
pub fn matrix_for(name: &str) -> Result<TransformMatrix> {
    name.parse().map(TransformMatrix::for_deficiency)
}
