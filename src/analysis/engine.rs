//! Analysis orchestration: capture bytes in, report out.
//!
//! Remote and parse failures never surface to the caller; both degrade
//! silently to the fallback entry for the requested category, exactly as the
//! original app behaves. Only capture preparation failures are errors.

use super::client::GeminiClient;
use super::fallback::fallback_analysis;
use super::parser::parse_analysis;
use super::prompts::build_analysis_prompt;
use super::types::{AnalysisReport, AnalysisSource, GeminiConfig, ScanCategory};
use super::vision::{detect_image_mime, prepare_capture};
use chrono::Utc;

pub struct EyeAnalyzer {
    client: GeminiClient,
}

impl EyeAnalyzer {
    pub fn new(config: GeminiConfig) -> Result<Self, String> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    /// Run one analysis over raw capture bytes.
    pub async fn analyze(
        &self,
        image_data: &[u8],
        category: ScanCategory,
    ) -> Result<AnalysisReport, String> {
        let prepared = prepare_capture(image_data)?;
        let mime_type = detect_image_mime(&prepared);
        let prompt = build_analysis_prompt(category);

        let (result, source) = match self
            .client
            .generate_analysis(&prompt, &prepared, mime_type)
            .await
            .and_then(|text| parse_analysis(&text))
        {
            Ok(result) => (result, AnalysisSource::Remote),
            Err(e) => {
                tracing::warn!(
                    "[Analysis] Falling back to static entry for {}: {}",
                    category.label(),
                    e
                );
                (fallback_analysis(category), AnalysisSource::Fallback)
            }
        };

        Ok(AnalysisReport {
            scan_id: uuid::Uuid::new_v4().to_string(),
            category: category.label().to_string(),
            analyzed_at: Utc::now(),
            source,
            result,
        })
    }
}
