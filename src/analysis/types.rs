//! Shared types for the eye analysis pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Eye condition screened by a scan. Selected in the UI before capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanCategory {
    RefractoryError,
    SquintStrabismus,
    Cataract,
    Glaucoma,
    MacularDegeneration,
}

impl ScanCategory {
    pub const ALL: [ScanCategory; 5] = [
        Self::RefractoryError,
        Self::SquintStrabismus,
        Self::Cataract,
        Self::Glaucoma,
        Self::MacularDegeneration,
    ];

    /// Label used in prompts, results and the UI category cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RefractoryError => "Refractory Error",
            Self::SquintStrabismus => "Squint/Strabismus",
            Self::Cataract => "Cataract",
            Self::Glaucoma => "Glaucoma",
            Self::MacularDegeneration => "Macular Degeneration",
        }
    }

    /// Category-specific inspection hint appended to the analysis prompt.
    pub fn inspection_hint(&self) -> &'static str {
        match self {
            Self::RefractoryError => {
                "Vision clarity issues, focusing problems, eye strain signs"
            }
            Self::SquintStrabismus => "Eye alignment, muscle balance, coordinate movement",
            Self::Cataract => "Lens opacity, clouding, light scattering patterns",
            Self::Glaucoma => "Optic nerve changes, cup-to-disc ratio, pressure signs",
            Self::MacularDegeneration => {
                "Retinal changes, macular appearance, drusen deposits"
            }
        }
    }

    /// Parse a category label. Accepts the display labels and the short ids
    /// the UI uses for its category cards.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "refractory error" | "refractory" => Some(Self::RefractoryError),
            "squint/strabismus" | "squint" | "strabismus" => Some(Self::SquintStrabismus),
            "cataract" => Some(Self::Cataract),
            "glaucoma" => Some(Self::Glaucoma),
            "macular degeneration" | "macular" => Some(Self::MacularDegeneration),
            _ => None,
        }
    }
}

/// Model confidence in its assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Severity grading returned by the model (or authored in the fallback table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "Retake Required")]
    RetakeRequired,
}

impl Severity {
    /// Display text, matching the wire names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::RetakeRequired => "Retake Required",
        }
    }
}

/// One analysis outcome, either decoded from the remote response or taken
/// from the fallback table. Field names match the remote response contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub disease: String,
    pub probability: u8,
    pub confidence: Confidence,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub severity: Severity,
    #[serde(rename = "requiresConsultation")]
    pub requires_consultation: bool,
    #[serde(rename = "retakeRequired", default)]
    pub retake_required: bool,
}

/// Where an analysis result came from. Not shown to the user; the original
/// app substitutes fallback results silently. Kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Remote,
    Fallback,
}

/// A completed scan: the result plus identifying metadata for the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub scan_id: String,
    pub category: String,
    pub analyzed_at: DateTime<Utc>,
    pub source: AnalysisSource,
    pub result: AnalysisResult,
}

/// Configuration for the Gemini vision client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    pub api_key: String,

    /// Base URL (default: https://generativelanguage.googleapis.com)
    pub base_url: String,

    /// Model to use (default: gemini-1.5-flash)
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
        }
    }
}
