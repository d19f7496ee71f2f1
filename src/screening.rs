//! Quick screening: the non-AI scan path with fabricated results
//!
//! The quick scanner has its own category set (broader than the AI
//! analyzer's) and returns canned observation lines after the UI's simulated
//! capture delay.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickScanCategory {
    Refractory,
    Squint,
    Nystagmus,
    Cataract,
    Amblyopia,
    Other,
}

impl QuickScanCategory {
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "refractory" => Some(Self::Refractory),
            "squint" => Some(Self::Squint),
            "nystagmus" => Some(Self::Nystagmus),
            "cataract" => Some(Self::Cataract),
            "amblyopia" => Some(Self::Amblyopia),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Canned result lines for a quick scan. Unknown category ids get the
/// generic completion line.
pub fn quick_scan_results(category_id: &str) -> Vec<&'static str> {
    match QuickScanCategory::parse(category_id) {
        Some(QuickScanCategory::Refractory) => vec![
            "Visual acuity: 20/20 (Normal)",
            "No significant refractive error detected",
            "Recommendation: Continue regular check-ups",
        ],
        Some(QuickScanCategory::Squint) => vec![
            "Eye alignment: Normal",
            "No strabismus detected",
            "Binocular vision: Good",
        ],
        Some(QuickScanCategory::Nystagmus) => vec![
            "Eye movement: Stable",
            "No involuntary movements detected",
            "Fixation: Normal",
        ],
        Some(QuickScanCategory::Cataract) => vec![
            "Lens clarity: Normal",
            "No opacity detected",
            "Visual clarity: Good",
        ],
        Some(QuickScanCategory::Amblyopia) => vec![
            "Binocular vision: Balanced",
            "No lazy eye detected",
            "Visual development: Normal",
        ],
        Some(QuickScanCategory::Other) => vec![
            "External eye: Normal appearance",
            "No signs of inflammation",
            "Conjunctiva: Clear",
            "Eyelids: Normal position",
            "Overall eye health: Good",
        ],
        None => vec!["Scan completed successfully"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_result_lines() {
        for id in ["refractory", "squint", "nystagmus", "cataract", "amblyopia", "other"] {
            assert!(!quick_scan_results(id).is_empty());
            assert!(QuickScanCategory::parse(id).is_some());
        }
    }

    #[test]
    fn test_unknown_category_gets_generic_line() {
        assert_eq!(
            quick_scan_results("retina"),
            vec!["Scan completed successfully"]
        );
    }
}
