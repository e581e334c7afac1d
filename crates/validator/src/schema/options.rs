//! Allowed-value collections for [`Schema::option`](crate::Schema::option).

use crate::foundation::{ConstructionError, ValueKind};
use crate::foundation::error::display_value;
use serde_json::Value;
use std::fmt;
use std::ops::Range;

// ============================================================================
// INTEGER RANGE
// ============================================================================

/// A half-open integer range with a non-zero step.
///
/// A negative step counts down: `IntRange::new(10, 0, -2)` holds 10, 8, 6, 4, 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRange {
    start: i64,
    end: i64,
    step: i64,
}

impl IntRange {
    /// Creates a range, rejecting a zero step.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, ConstructionError> {
        if step == 0 {
            return Err(ConstructionError::ZeroStep);
        }
        Ok(Self { start, end, step })
    }

    /// First value of the range.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive bound.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Distance between members.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns true if `n` is a member.
    pub fn contains(&self, n: i64) -> bool {
        let in_bounds = if self.step > 0 {
            self.start <= n && n < self.end
        } else {
            self.end < n && n <= self.start
        };
        // i128 keeps `n - start` from overflowing at the i64 extremes
        in_bounds && (i128::from(n) - i128::from(self.start)) % i128::from(self.step) == 0
    }

    /// Returns true if `value` is a number equal to a member.
    ///
    /// Floats with no fractional part count, so `2.0` is in `0..10`.
    pub fn contains_value(&self, value: &Value) -> bool {
        let Some(number) = value.as_number() else {
            return false;
        };
        if let Some(n) = number.as_i64() {
            return self.contains(n);
        }
        match number.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                self.contains(f as i64)
            }
            _ => false,
        }
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 1 {
            write!(f, "{}..{}", self.start, self.end)
        } else {
            write!(f, "{}..{} step {}", self.start, self.end, self.step)
        }
    }
}

// ============================================================================
// OPTION SET
// ============================================================================

/// The collection a value must belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSet {
    /// An explicit list of values.
    Values(Vec<Value>),
    /// The keys of an object; only strings can be members.
    Keys(Vec<String>),
    /// An integer range.
    Range(IntRange),
    /// A string; members are its substrings.
    Substring(String),
}

impl OptionSet {
    /// Returns true if `value` is a member.
    ///
    /// Numbers compare by value across integer and float representations.
    pub fn contains(&self, value: &Value) -> bool {
        match self {
            Self::Values(values) => values.iter().any(|candidate| loose_eq(candidate, value)),
            Self::Keys(keys) => value
                .as_str()
                .is_some_and(|s| keys.iter().any(|key| key == s)),
            Self::Range(range) => range.contains_value(value),
            Self::Substring(haystack) => value.as_str().is_some_and(|s| haystack.contains(s)),
        }
    }
}

fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        _ => a == b,
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&display_value(value))?;
                }
                f.write_str("]")
            }
            Self::Keys(keys) => write!(f, "{{{}}}", keys.join(", ")),
            Self::Range(range) => fmt::Display::fmt(range, f),
            Self::Substring(haystack) => write!(f, "{haystack:?}"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl TryFrom<Value> for OptionSet {
    type Error = ConstructionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Ok(Self::Values(values)),
            Value::Object(map) => Ok(Self::Keys(map.into_iter().map(|(k, _)| k).collect())),
            Value::String(haystack) => Ok(Self::Substring(haystack)),
            scalar => Err(ConstructionError::NotIterable {
                found: ValueKind::of(&scalar),
            }),
        }
    }
}

impl TryFrom<Vec<Value>> for OptionSet {
    type Error = ConstructionError;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        Ok(Self::Values(values))
    }
}

impl TryFrom<Range<i64>> for OptionSet {
    type Error = ConstructionError;

    fn try_from(range: Range<i64>) -> Result<Self, Self::Error> {
        IntRange::new(range.start, range.end, 1).map(Self::Range)
    }
}

impl TryFrom<IntRange> for OptionSet {
    type Error = ConstructionError;

    fn try_from(range: IntRange) -> Result<Self, Self::Error> {
        Ok(Self::Range(range))
    }
}
