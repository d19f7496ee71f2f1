//! Prompt construction for the Gemini eye analysis request
//!
//! The prompt defines the entire response contract: it instructs the model
//! to check eye visibility first, then pins down two mutually exclusive
//! output shapes (retake vs. diagnosis) as embedded JSON examples.

use super::types::ScanCategory;

/// Build the analysis instruction for one scan. Pure data transformation.
pub fn build_analysis_prompt(category: ScanCategory) -> String {
    let label = category.label();

    format!(
        r#"You are an expert ophthalmologist AI assistant analyzing an eye image for {label} detection.

Please analyze this eye image and provide a detailed medical assessment focusing on {label}.

FIRST, check if you can see any part of an eye in the image. Only request a retake if the image is completely unusable (totally black, no eye visible at all, or extremely distorted). For acceptable images where you can see at least part of an eye, proceed with analysis even if the quality isn't perfect.

ONLY if the image is completely unusable (no eye visible whatsoever), respond with:
{{
  "disease": "Image Quality Issue",
  "probability": 0,
  "confidence": "Low",
  "findings": ["No eye visible in image", "Image appears to be corrupted or blank", "Please retake the photo"],
  "recommendations": ["Retake the photo with eye clearly visible", "Ensure adequate lighting", "Hold camera steady and focus on the eye"],
  "severity": "Retake Required",
  "requiresConsultation": false,
  "retakeRequired": true
}}

For all other cases where you can see at least part of an eye (even if blurry or partial), provide your analysis in this JSON format:
{{
  "disease": "{label}",
  "probability": [percentage 0-100],
  "confidence": "High/Medium/Low",
  "findings": ["finding1", "finding2", "finding3"],
  "recommendations": ["recommendation1", "recommendation2", "recommendation3"],
  "severity": "Normal/Mild/Moderate/Severe",
  "requiresConsultation": boolean,
  "retakeRequired": false
}}

Important guidelines:
1. Be LENIENT with image quality - only request retake if NO eye is visible at all
2. Work with what you can see in the image, even if not perfect quality
3. If image quality is poor but eye is visible, mention it in findings but still provide analysis
4. Base probability on visible signs specific to {label}
5. Include specific anatomical observations when possible
6. Provide actionable recommendations
7. Recommend professional consultation for concerning findings
8. Adjust confidence based on image quality but don't reject unless completely unusable

Focus specifically on detecting signs of:
- {hint}"#,
        label = label,
        hint = category.inspection_hint(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_category() {
        let prompt = build_analysis_prompt(ScanCategory::Glaucoma);
        assert!(prompt.contains("Glaucoma detection"));
        assert!(prompt.contains("Optic nerve changes"));
    }

    #[test]
    fn test_prompt_contains_both_shapes() {
        let prompt = build_analysis_prompt(ScanCategory::Cataract);
        assert!(prompt.contains("\"retakeRequired\": true"));
        assert!(prompt.contains("\"retakeRequired\": false"));
        assert!(prompt.contains("\"severity\": \"Retake Required\""));
    }

    #[test]
    fn test_prompt_hint_varies_by_category() {
        let a = build_analysis_prompt(ScanCategory::Cataract);
        let b = build_analysis_prompt(ScanCategory::SquintStrabismus);
        assert!(a.contains("Lens opacity"));
        assert!(b.contains("Eye alignment"));
        assert_ne!(a, b);
    }
}
