//! Scan commands
//!
//! Wires the capture flow to the analysis engine: the UI hands over the
//! image handle its camera produced, gets back a report plus the
//! presentation dispatch. Also hosts the quick-scan mock path and the
//! Gemini API key plumbing.

use crate::analysis::presentation::ResultPresentation;
use crate::analysis::types::{AnalysisReport, GeminiConfig, ScanCategory};
use crate::analysis::vision::load_capture;
use crate::analysis::EyeAnalyzer;
use crate::credentials::{validate_api_key, CredentialManager};
use crate::screening;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tauri::State;
use tokio::sync::Mutex;

const GEMINI_PROVIDER: &str = "gemini";

/// State for the eye analyzer
pub struct AnalyzerState {
    analyzer: Mutex<Option<Arc<EyeAnalyzer>>>,
}

impl AnalyzerState {
    pub fn new() -> Self {
        Self {
            analyzer: Mutex::new(None),
        }
    }
}

impl Default for AnalyzerState {
    fn default() -> Self {
        Self::new()
    }
}

/// In-flight flag: at most one analysis per scan screen. A second trigger
/// while one is pending is a no-op for the remote client.
pub struct ScanInFlight(pub Arc<AtomicBool>);

impl Default for ScanInFlight {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }
}

/// Clears the in-flight flag when the analysis finishes, even on early
/// return.
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    /// Try to claim the flag. None if a scan is already pending.
    fn try_claim(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Scan payload returned to the UI: the report plus the two-branch
/// presentation dispatch already resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub report: AnalysisReport,
    pub presentation: ResultPresentation,
}

/// Initialize the analyzer with an API key. If none is passed, falls back
/// to the environment and then the credential manager.
#[tauri::command]
pub async fn init_analyzer(
    api_key: Option<String>,
    state: State<'_, AnalyzerState>,
) -> Result<(), String> {
    let key = match api_key {
        Some(k) if !k.is_empty() => {
            validate_api_key(&k)?;
            k
        }
        _ => get_gemini_api_key()?,
    };

    let config = GeminiConfig {
        api_key: key,
        ..GeminiConfig::default()
    };
    let analyzer = EyeAnalyzer::new(config)?;

    let mut guard = state.analyzer.lock().await;
    *guard = Some(Arc::new(analyzer));

    tracing::info!("[Scan] Analyzer initialized");
    Ok(())
}

/// Analyze a captured eye image for the given scan category.
#[tauri::command]
pub async fn analyze_capture(
    image_path: String,
    category: String,
    state: State<'_, AnalyzerState>,
    in_flight: State<'_, ScanInFlight>,
) -> Result<ScanOutcome, String> {
    let _guard = InFlightGuard::try_claim(&in_flight.0)
        .ok_or("Analysis already in progress")?;

    let category = ScanCategory::parse(&category)
        .ok_or_else(|| format!("Unknown scan category: {}", category))?;

    let guard = state.analyzer.lock().await;
    let analyzer = guard
        .as_ref()
        .ok_or("Analyzer not initialized. Call init_analyzer first.")?
        .clone();
    drop(guard); // Release lock before the long-running request

    let image_data = load_capture(&PathBuf::from(image_path)).await?;
    let report = analyzer.analyze(&image_data, category).await?;

    tracing::info!(
        "[Scan] {} analysis complete ({:?})",
        report.category,
        report.source
    );

    let presentation = ResultPresentation::from_result(&report.result);
    Ok(ScanOutcome { report, presentation })
}

/// The non-AI quick scan: fabricated observation lines per category.
#[tauri::command]
pub fn quick_scan_results(category_id: String) -> Vec<&'static str> {
    screening::quick_scan_results(&category_id)
}

/// Category metadata for the scan screen cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCategoryInfo {
    pub label: &'static str,
    pub inspection_hint: &'static str,
}

#[tauri::command]
pub fn get_scan_categories() -> Vec<ScanCategoryInfo> {
    ScanCategory::ALL
        .iter()
        .map(|c| ScanCategoryInfo {
            label: c.label(),
            inspection_hint: c.inspection_hint(),
        })
        .collect()
}

/// Check whether a Gemini API key is available from any source.
#[tauri::command]
pub async fn check_api_key() -> Result<bool, String> {
    if std::env::var("GEMINI_API_KEY").is_ok() {
        return Ok(true);
    }
    Ok(CredentialManager::has_api_key(GEMINI_PROVIDER))
}

/// Store the Gemini API key after validating it.
#[tauri::command]
pub async fn set_api_key(api_key: String) -> Result<(), String> {
    validate_api_key(&api_key)?;
    CredentialManager::store_api_key(GEMINI_PROVIDER, &api_key)?;
    tracing::info!("[Scan] API key stored");
    Ok(())
}

#[tauri::command]
pub async fn delete_api_key() -> Result<(), String> {
    CredentialManager::delete_api_key(GEMINI_PROVIDER)
}

/// Resolve the Gemini API key: environment first, then credential manager.
fn get_gemini_api_key() -> Result<String, String> {
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        validate_api_key(&key)?;
        return Ok(key);
    }

    let key = CredentialManager::get_api_key(GEMINI_PROVIDER).map_err(|_| {
        "No Gemini API key found. Set GEMINI_API_KEY in .env or configure in settings."
            .to_string()
    })?;

    validate_api_key(&key)?;
    Ok(key)
}
