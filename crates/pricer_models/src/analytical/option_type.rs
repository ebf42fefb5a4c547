//! Call/put selector.

use std::fmt;
use std::str::FromStr;

use super::error::AnalyticalError;

/// European option direction.
///
/// Parsing is case-insensitive: `"CALL"`, `"Call"` and `"call"` all give
/// [`OptionType::Call`]. Surrounding whitespace is not stripped.
///
/// # Examples
/// ```
/// use pricer_models::analytical::OptionType;
///
/// let put: OptionType = "PUT".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.to_string(), "put");
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: payoff max(S - K, 0)
    Call,
    /// Right to sell at the strike: payoff max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for [`OptionType::Put`].
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Capitalised label for reports ("Call" / "Put").
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}
