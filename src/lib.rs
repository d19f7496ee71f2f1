pub mod analysis;
mod commands;
pub mod content;
mod credentials;
pub mod dashboard;
pub mod screening;
pub mod session;

use commands::*;
use session::MockSessionProvider;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env (GEMINI_API_KEY); during dev the CWD is the project root.
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path("../.env");
    }

    // Initialize tracing with RUST_LOG env filter.
    // Use RUST_LOG=debug for verbose per-operation logs.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,netra_lib=info")),
        )
        .init();

    let analyzer_state = AnalyzerState::default();
    let scan_in_flight = ScanInFlight::default();
    let session_state = SessionState::new(Arc::new(MockSessionProvider::new()));

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(analyzer_state)
        .manage(scan_in_flight)
        .manage(session_state)
        .invoke_handler(tauri::generate_handler![
            // Scan commands
            init_analyzer,
            analyze_capture,
            quick_scan_results,
            get_scan_categories,
            check_api_key,
            set_api_key,
            delete_api_key,
            // Session commands
            session_restore,
            sign_in,
            sign_up,
            sign_in_with_google,
            sign_out,
            current_session,
            // Content commands
            get_health_articles,
            get_eye_care_tips,
            get_eye_exercises,
            get_nutrition_guide,
            get_explore_sections,
            // Dashboard commands
            get_dashboard,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
