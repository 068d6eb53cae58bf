use derive_more::{Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// A length in millimetres. Label artwork is laid out in millimetres and the generated
/// SVG uses one user unit per millimetre, so an `Mm` value can be written straight into
/// coordinates, sizes and the `viewBox`.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    DivAssign,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Mm(pub f64);

impl Mm {
    /// The raw number of millimetres
    pub fn get(self) -> f64 {
        self.0
    }

    /// Clamp negative lengths to zero
    pub fn non_negative(self) -> Mm {
        Mm(self.0.max(0.0))
    }
}
