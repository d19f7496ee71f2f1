//! Content commands: read-only access to the educational datasets.

use crate::content::articles::{Article, ARTICLES};
use crate::content::exercises::{Exercise, EXERCISES};
use crate::content::nutrition::{NutritionInfo, NUTRITION};
use crate::content::tips::{Tip, TIPS};
use crate::content::{explore_sections, ExploreSection};

#[tauri::command]
pub fn get_health_articles() -> Vec<Article> {
    ARTICLES.clone()
}

#[tauri::command]
pub fn get_eye_care_tips() -> Vec<Tip> {
    TIPS.clone()
}

#[tauri::command]
pub fn get_eye_exercises() -> Vec<Exercise> {
    EXERCISES.clone()
}

#[tauri::command]
pub fn get_nutrition_guide() -> Vec<NutritionInfo> {
    NUTRITION.clone()
}

#[tauri::command]
pub fn get_explore_sections() -> Vec<ExploreSection> {
    explore_sections()
}
