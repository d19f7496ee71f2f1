//! Eye image analysis pipeline
//!
//! Capture → request builder → Gemini client → response parser, with a
//! static fallback table covering every remote or parse failure.

pub mod client;
pub mod engine;
pub mod fallback;
pub mod parser;
pub mod presentation;
pub mod prompts;
pub mod types;
pub mod vision;

pub use engine::EyeAnalyzer;
pub use fallback::{fallback_analysis, fallback_analysis_for_label};
pub use presentation::{ResultPresentation, RiskBand};
pub use types::{
    AnalysisReport, AnalysisResult, AnalysisSource, Confidence, GeminiConfig, ScanCategory,
    Severity,
};
