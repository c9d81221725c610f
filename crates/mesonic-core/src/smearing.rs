//! Smearing parameters and source/sink smearing labels.

use crate::error::SmearError;
use std::fmt;

/// Whether one end of a propagator is local (point) or smeared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Smearing {
    /// Point (unsmeared) end, tag `L`.
    Local,
    /// Jacobi-smeared end, tag `S`.
    Smeared,
}

impl Smearing {
    /// Single-character tag.
    pub fn tag(self) -> char {
        match self {
            Self::Local => 'L',
            Self::Smeared => 'S',
        }
    }
}

/// Source/sink smearing of one propagator variant.
///
/// The first letter describes the source, the second the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SmearingLabel {
    /// Local source, local sink.
    LL,
    /// Local source, smeared sink.
    LS,
    /// Smeared source, local sink.
    SL,
    /// Smeared source, smeared sink.
    SS,
}

impl SmearingLabel {
    /// All four labels in canonical variant order.
    pub const ALL: [Self; 4] = [Self::LL, Self::LS, Self::SL, Self::SS];

    /// Smearing at the source end.
    pub fn source(self) -> Smearing {
        match self {
            Self::LL | Self::LS => Smearing::Local,
            Self::SL | Self::SS => Smearing::Smeared,
        }
    }

    /// Smearing at the sink end.
    pub fn sink(self) -> Smearing {
        match self {
            Self::LL | Self::SL => Smearing::Local,
            Self::LS | Self::SS => Smearing::Smeared,
        }
    }

    /// Two-character code, e.g. `"LS"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::LL => "LL",
            Self::LS => "LS",
            Self::SL => "SL",
            Self::SS => "SS",
        }
    }

    /// Parse a two-character code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Position of this label in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SmearingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Labels of the two propagators in one contraction: (mass 1, mass 2).
///
/// Renders as the concatenation of both codes, e.g. `LS` with `SL`
/// gives `"LSSL"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelPair {
    /// Variant label of the mass-1 propagator.
    pub first: SmearingLabel,
    /// Variant label of the mass-2 propagator.
    pub second: SmearingLabel,
}

impl LabelPair {
    /// Number of distinct label pairs.
    pub const COUNT: usize = 16;

    /// Pair two labels.
    pub fn new(first: SmearingLabel, second: SmearingLabel) -> Self {
        Self { first, second }
    }

    /// All 16 pairs in Cartesian order, first label varying slowest.
    pub fn all() -> impl Iterator<Item = Self> {
        SmearingLabel::ALL.into_iter().flat_map(|first| {
            SmearingLabel::ALL
                .into_iter()
                .map(move |second| Self { first, second })
        })
    }

    /// Four-character code, e.g. `"LLSS"`.
    pub fn code(self) -> String {
        format!("{}{}", self.first.code(), self.second.code())
    }

    /// Parse a four-character code.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.len() != 4 || !code.is_ascii() {
            return None;
        }
        let (a, b) = code.split_at(2);
        Some(Self {
            first: SmearingLabel::from_code(a)?,
            second: SmearingLabel::from_code(b)?,
        })
    }
}

impl fmt::Display for LabelPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Iteration count and hopping weight of a Jacobi smearing.
///
/// A value type: copied, never mutated after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmearingParameters {
    iterations: u32,
    parameter: f64,
}

impl SmearingParameters {
    /// Validate and construct smearing parameters.
    ///
    /// Returns `Err(SmearError::InvalidSmearingParameter)` for a negative
    /// iteration count, one that does not fit `u32`, or a non-finite
    /// parameter. With zero iterations the parameter is never applied,
    /// so any value is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesonic_core::SmearingParameters;
    ///
    /// let p = SmearingParameters::new(2, 0.4).unwrap();
    /// assert_eq!(p.iterations(), 2);
    /// assert!(SmearingParameters::new(-1, 0.4).is_err());
    /// ```
    pub fn new(iterations: i64, parameter: f64) -> Result<Self, SmearError> {
        if iterations < 0 {
            return Err(SmearError::InvalidSmearingParameter {
                reason: format!("iteration count must be non-negative, got {iterations}"),
            });
        }
        let iterations =
            u32::try_from(iterations).map_err(|_| SmearError::InvalidSmearingParameter {
                reason: format!("iteration count {iterations} exceeds u32::MAX"),
            })?;
        if iterations > 0 && !parameter.is_finite() {
            return Err(SmearError::InvalidSmearingParameter {
                reason: format!("smearing parameter must be finite, got {parameter}"),
            });
        }
        Ok(Self {
            iterations,
            parameter,
        })
    }

    /// Parameters that leave a field unchanged.
    pub fn identity() -> Self {
        Self {
            iterations: 0,
            parameter: 0.0,
        }
    }

    /// Number of smearing iterations.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Hopping weight applied per iteration.
    pub fn parameter(&self) -> f64 {
        self.parameter
    }

    /// Whether the parameter lies in the usual stable range `(0, 1]`.
    pub fn is_typical(&self) -> bool {
        self.parameter > 0.0 && self.parameter <= 1.0
    }
}

/// Smearing applied at each end of a two-point function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmearingPlan {
    /// Source smearing, passed into the solve.
    pub source: SmearingParameters,
    /// Sink smearing, applied to solved propagators.
    pub sink: SmearingParameters,
}

impl SmearingPlan {
    /// Same smearing at source and sink.
    pub fn uniform(params: SmearingParameters) -> Self {
        Self {
            source: params,
            sink: params,
        }
    }
}

impl From<SmearingParameters> for SmearingPlan {
    fn from(params: SmearingParameters) -> Self {
        Self::uniform(params)
    }
}
