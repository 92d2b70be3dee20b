use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

/// Which outlier rule removed a round from the aggregation
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum ExclusionReason {
    /// At or below `current rating - 2.5 x population std dev`
    BelowDeviationThreshold = 0,
    /// 100 or more points below the current rating
    BelowAbsoluteGap = 1
}

impl TryFrom<i32> for ExclusionReason {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ExclusionReason::BelowDeviationThreshold),
            1 => Ok(ExclusionReason::BelowAbsoluteGap),
            _ => Err(())
        }
    }
}

/// Diagnostic record emitted for every rating dropped by the outlier filter.
/// Exclusions never change the numeric result; they exist so callers can
/// report what was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingExclusion {
    pub rating: i32,
    pub reason: ExclusionReason
}

#[cfg(test)]
mod tests {
    use crate::model::structures::exclusion::ExclusionReason;
    use strum::IntoEnumIterator;

    #[test]
    fn test_convert_deviation() {
        assert_eq!(ExclusionReason::try_from(0), Ok(ExclusionReason::BelowDeviationThreshold));
    }

    #[test]
    fn test_convert_gap() {
        assert_eq!(ExclusionReason::try_from(1), Ok(ExclusionReason::BelowAbsoluteGap));
    }

    #[test]
    fn test_convert_invalid() {
        assert_eq!(ExclusionReason::try_from(2), Err(()));
    }

    #[test]
    fn test_enumerate() {
        let reasons = ExclusionReason::iter().collect::<Vec<_>>();
        assert_eq!(
            reasons,
            vec![ExclusionReason::BelowDeviationThreshold, ExclusionReason::BelowAbsoluteGap]
        );
    }
}
