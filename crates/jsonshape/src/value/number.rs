use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// A finite IEEE-754 double.
///
/// NaN and infinities are not representable, which makes `Number` totally ordered by `==`
/// and therefore usable as `Eq` / `Hash`.
#[derive(Debug, Copy, Clone)]
pub struct Number(f64);

impl Number {
    /// Wrap `value` if it is finite.
    #[must_use]
    pub fn new(value: f64) -> Option<Number> {
        if value.is_finite() {
            Some(Number(value))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Whether the value has no fractional part.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_integer(self) -> bool {
        self.0.trunc() == self.0
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        // `0.0 == -0.0`, so both must hash the same.
        if self.0 == 0.0f64 {
            0.0f64.to_bits().hash(h);
        } else {
            self.0.to_bits().hash(h);
        }
    }
}

impl fmt::Display for Number {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number(f64::from(value))
    }
}

impl TryFrom<f64> for Number {
    type Error = f64;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::new(value).ok_or(value)
    }
}
