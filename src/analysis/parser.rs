//! Extraction and decoding of the structured payload embedded in the
//! model's free-text response.

use super::types::AnalysisResult;

/// Extract a JSON object from a response that might contain markdown or
/// other text.
///
/// Handles:
/// - ```json code blocks
/// - Plain ``` code blocks
/// - Raw JSON objects (first `{` to last `}`)
pub fn extract_json_object(text: &str) -> Result<String, String> {
    // Try to find JSON in ```json blocks
    if let Some(start) = text.find("```json") {
        let json_start = start + 7;
        if let Some(end) = text[json_start..].find("```") {
            return Ok(text[json_start..json_start + end].trim().to_string());
        }
    }

    // Try plain code blocks
    if let Some(start) = text.find("```") {
        let block_start = start + 3;
        let content_start = text[block_start..]
            .find('\n')
            .map(|i| block_start + i + 1)
            .unwrap_or(block_start);
        if let Some(end) = text[content_start..].find("```") {
            return Ok(text[content_start..content_start + end].trim().to_string());
        }
    }

    // Try to find a raw JSON object. The closing brace must come after the
    // opening one; a stray `}` earlier in the prose is not a match.
    if let Some(start) = text.find('{') {
        if let Some(end) = text[start..].rfind('}') {
            return Ok(text[start..start + end + 1].to_string());
        }
    }

    Err("No JSON object found in response".to_string())
}

/// Decode an analysis result from the raw response text.
///
/// Structural decoding only: field types must match, but values are not
/// re-validated (the original app passed decoded responses through as-is).
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, String> {
    let json_str = extract_json_object(text)?;

    serde_json::from_str(&json_str)
        .map_err(|e| format!("Failed to decode analysis result: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{Confidence, Severity};

    const GLAUCOMA_RESPONSE: &str = r#"{"disease":"Glaucoma","probability":65,"confidence":"High","findings":["x"],"recommendations":["y"],"severity":"Moderate","requiresConsultation":true,"retakeRequired":false}"#;

    #[test]
    fn test_decodes_bare_object_literal() {
        let result = parse_analysis(GLAUCOMA_RESPONSE).unwrap();
        assert_eq!(result.disease, "Glaucoma");
        assert_eq!(result.probability, 65);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.findings, vec!["x".to_string()]);
        assert_eq!(result.recommendations, vec!["y".to_string()]);
        assert_eq!(result.severity, Severity::Moderate);
        assert!(result.requires_consultation);
        assert!(!result.retake_required);
    }

    #[test]
    fn test_decodes_object_surrounded_by_prose() {
        let text = format!("Here is my assessment:\n{}\nStay healthy!", GLAUCOMA_RESPONSE);
        let result = parse_analysis(&text).unwrap();
        assert_eq!(result.disease, "Glaucoma");
    }

    #[test]
    fn test_decodes_fenced_code_block() {
        let text = format!("```json\n{}\n```", GLAUCOMA_RESPONSE);
        let result = parse_analysis(&text).unwrap();
        assert_eq!(result.probability, 65);
    }

    #[test]
    fn test_plain_prose_fails() {
        let err = parse_analysis("The image shows a healthy eye with no issues.");
        assert!(err.is_err());
    }

    #[test]
    fn test_brace_before_opening_brace_is_error_not_panic() {
        // A `}` preceding every `{` must not slice backwards.
        let err = parse_analysis("closing } appears before an opening {");
        assert!(err.is_err());
    }

    #[test]
    fn test_stray_closing_brace_before_object_is_ignored() {
        let text = format!("assessment follows }} here:\n{}", GLAUCOMA_RESPONSE);
        let result = parse_analysis(&text).unwrap();
        assert_eq!(result.disease, "Glaucoma");
    }

    #[test]
    fn test_object_with_wrong_shape_fails() {
        let err = parse_analysis(r#"{"verdict": "fine"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_retake_shape_decodes() {
        let text = r#"{"disease":"Image Quality Issue","probability":0,"confidence":"Low","findings":["No eye visible in image"],"recommendations":["Retake the photo with eye clearly visible"],"severity":"Retake Required","requiresConsultation":false,"retakeRequired":true}"#;
        let result = parse_analysis(text).unwrap();
        assert!(result.retake_required);
        assert_eq!(result.severity, Severity::RetakeRequired);
    }

    #[test]
    fn test_extract_prefers_json_fence() {
        let text = "intro {\"stray\": 1}\n```json\n{\"disease\": \"Cataract\"}\n```";
        let json = extract_json_object(text).unwrap();
        assert_eq!(json, "{\"disease\": \"Cataract\"}");
    }
}
