//! Dashboard command

use crate::dashboard::{overview, DashboardOverview};

#[tauri::command]
pub fn get_dashboard() -> DashboardOverview {
    overview()
}
