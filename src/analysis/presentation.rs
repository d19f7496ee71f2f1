//! Presentation dispatch: the two-branch decision between the retake notice
//! and the full diagnosis summary. No further state beyond this.

use super::types::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Risk banding of the probability value shown in the diagnosis summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Thresholds from the original UI: > 70 high, > 40 moderate, else low.
    pub fn from_probability(probability: u8) -> Self {
        if probability > 70 {
            Self::High
        } else if probability > 40 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

/// What the UI should render for a finished scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResultPresentation {
    /// Image was unusable: advisory notice with retake/cancel actions.
    #[serde(rename_all = "camelCase")]
    Retake {
        findings: Vec<String>,
        recommendations: Vec<String>,
    },
    /// Full diagnosis summary with view/save/done actions.
    #[serde(rename_all = "camelCase")]
    Diagnosis {
        risk_band: RiskBand,
        risk_text: String,
        probability: u8,
        confidence: String,
        severity: String,
        findings: Vec<String>,
        recommendations: Vec<String>,
        requires_consultation: bool,
    },
}

impl ResultPresentation {
    /// The retake flag wins regardless of any other field.
    pub fn from_result(result: &AnalysisResult) -> Self {
        if result.retake_required {
            return Self::Retake {
                findings: result.findings.clone(),
                recommendations: result.recommendations.clone(),
            };
        }

        let risk_band = RiskBand::from_probability(result.probability);
        Self::Diagnosis {
            risk_band,
            risk_text: risk_band.display().to_string(),
            probability: result.probability,
            confidence: result.confidence.as_str().to_string(),
            severity: result.severity.as_str().to_string(),
            findings: result.findings.clone(),
            recommendations: result.recommendations.clone(),
            requires_consultation: result.requires_consultation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parser::parse_analysis;

    #[test]
    fn test_risk_band_thresholds() {
        assert_eq!(RiskBand::from_probability(0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(40), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(41), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(70), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(71), RiskBand::High);
        assert_eq!(RiskBand::from_probability(100), RiskBand::High);
    }

    #[test]
    fn test_glaucoma_65_is_moderate_diagnosis() {
        let result = parse_analysis(
            r#"{"disease":"Glaucoma","probability":65,"confidence":"High","findings":["x"],"recommendations":["y"],"severity":"Moderate","requiresConsultation":true,"retakeRequired":false}"#,
        )
        .unwrap();

        match ResultPresentation::from_result(&result) {
            ResultPresentation::Diagnosis {
                risk_band,
                risk_text,
                confidence,
                severity,
                requires_consultation,
                ..
            } => {
                assert_eq!(risk_band, RiskBand::Moderate);
                assert_eq!(risk_text, "Moderate Risk");
                assert_eq!(confidence, "High");
                assert_eq!(severity, "Moderate");
                assert!(requires_consultation);
            }
            ResultPresentation::Retake { .. } => panic!("expected diagnosis branch"),
        }
    }

    #[test]
    fn test_retake_flag_wins_over_probability() {
        let result = parse_analysis(
            r#"{"disease":"Image Quality Issue","probability":95,"confidence":"Low","findings":["No eye visible in image"],"recommendations":["Retake the photo"],"severity":"Retake Required","requiresConsultation":false,"retakeRequired":true}"#,
        )
        .unwrap();

        match ResultPresentation::from_result(&result) {
            ResultPresentation::Retake { findings, .. } => {
                assert_eq!(findings, vec!["No eye visible in image".to_string()]);
            }
            ResultPresentation::Diagnosis { .. } => panic!("expected retake branch"),
        }
    }
}
