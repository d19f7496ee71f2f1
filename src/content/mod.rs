//! Static educational content served to the explore screens. Authored
//! datasets, read-only at runtime.

pub mod articles;
pub mod exercises;
pub mod nutrition;
pub mod tips;

use serde::Serialize;

/// One entry on the explore screen.
#[derive(Debug, Clone, Serialize)]
pub struct ExploreSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub route: &'static str,
}

pub fn explore_sections() -> Vec<ExploreSection> {
    vec![
        ExploreSection {
            title: "Health Articles",
            subtitle: "Evidence-based eye health information",
            route: "/health-articles",
        },
        ExploreSection {
            title: "Eye Care Tips",
            subtitle: "Daily habits for healthy vision",
            route: "/eye-care-tips",
        },
        ExploreSection {
            title: "Eye Exercises",
            subtitle: "Simple exercises to maintain eye health",
            route: "/eye-exercises",
        },
        ExploreSection {
            title: "Eye Nutrition",
            subtitle: "Foods that support eye health",
            route: "/eye-nutrition",
        },
    ]
}
