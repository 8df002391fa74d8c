//! Linear units and the fixed conversion factors.
//!
//! Distances are produced in the projection's **native** unit (meters).  The
//! caller picks an analysis unit; when it differs from the native unit,
//! recorded distances are multiplied once by that unit's `from_native`
//! factor.  Exactly one conversion path ever applies — if the units already
//! match, the factor is the identity.
//!
//! The factors are fixed constants and are deliberately not "improved"
//! (miles is 0.00062137, not 1/1609.344): the
//! distance threshold is compared strictly, so changing a factor changes
//! which crashes make the cut.

use std::str::FromStr;

use crate::error::CoreError;

/// Analysis linear unit for crash-to-point distances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinearUnit {
    /// The projection's native unit; conversion is the identity.
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl LinearUnit {
    /// The unit distances are produced in before any conversion.
    pub const NATIVE: LinearUnit = LinearUnit::Meters;

    /// Multiplier converting a native-unit (meter) value into this unit.
    #[inline]
    pub fn from_native_factor(self) -> f64 {
        match self {
            LinearUnit::Meters     => 1.0,
            LinearUnit::Kilometers => 0.001,
            LinearUnit::Miles      => 0.000_621_37,
            LinearUnit::Feet       => 3.2808,
        }
    }

    /// Convert a native-unit distance into this unit.
    #[inline]
    pub fn from_native(self, native: f64) -> f64 {
        native * self.from_native_factor()
    }

    /// Convert a distance in this unit back into native units.
    ///
    /// Inverse of [`from_native`](Self::from_native) up to floating-point
    /// rounding.
    #[inline]
    pub fn to_native(self, value: f64) -> f64 {
        value / self.from_native_factor()
    }

    /// Canonical display name, matching the source data's spelling.
    pub fn name(self) -> &'static str {
        match self {
            LinearUnit::Meters     => "Meters",
            LinearUnit::Kilometers => "Kilometers",
            LinearUnit::Miles      => "Miles",
            LinearUnit::Feet       => "Feet",
        }
    }
}

impl FromStr for LinearUnit {
    type Err = CoreError;

    /// Case-insensitive; accepts singular and plural forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meter" | "meters" | "m"          => Ok(LinearUnit::Meters),
            "kilometer" | "kilometers" | "km" => Ok(LinearUnit::Kilometers),
            "mile" | "miles" | "mi"           => Ok(LinearUnit::Miles),
            "foot" | "feet" | "ft"            => Ok(LinearUnit::Feet),
            other => Err(CoreError::UnknownUnit(other.to_string())),
        }
    }
}

impl std::fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
