//! Call/put flag.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option type flag.
///
/// Replaces free-form string markers: anything that is not recognisably a
/// call or a put is rejected when parsed.
///
/// # Examples
/// ```
/// use optgrid_core::types::OptionType;
///
/// let call: OptionType = "C".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.toggled(), OptionType::Put);
///
/// assert!("X".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns the other option type.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Flips the option type in place.
    #[inline]
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Returns true for a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionType> for String {
    fn from(value: OptionType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_markers_and_names() {
        for s in ["C", "c", "call", "Call", "CALL", " c "] {
            assert_eq!(s.parse::<OptionType>().unwrap(), OptionType::Call, "{s}");
        }
        for s in ["P", "p", "put", "Put", "PUT"] {
            assert_eq!(s.parse::<OptionType>().unwrap(), OptionType::Put, "{s}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_markers() {
        for s in ["", "X", "calls", "straddle"] {
            match s.parse::<OptionType>() {
                Err(PricingError::InvalidOptionType(raw)) => assert_eq!(raw, s),
                other => panic!("expected InvalidOptionType for {s:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut t = OptionType::Call;
        t.toggle();
        assert_eq!(t, OptionType::Put);
        t.toggle();
        assert_eq!(t, OptionType::Call);
    }

    #[test]
    fn test_display() {
        assert_eq!(OptionType::Call.to_string(), "Call");
        assert_eq!(OptionType::Put.to_string(), "Put");
        assert_eq!(OptionType::default(), OptionType::Call);
    }
}
