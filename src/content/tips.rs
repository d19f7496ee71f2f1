//! Eye care tips dataset

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

pub static TIPS: Lazy<Vec<Tip>> = Lazy::new(|| {
    vec![
        Tip {
            title: "20-20-20 Rule",
            summary: "Every 20 minutes, look at something 20 feet away for 20 seconds.",
            details: "This simple rule helps reduce digital eye strain by relaxing the focusing muscles in your eyes. Set a timer to remind yourself to take these breaks throughout the day. Look out a window or at a distant object to give your eyes a rest from close-up work.",
        },
        Tip {
            title: "Proper Lighting",
            summary: "Optimal lighting conditions for reading and screen use.",
            details: "Use ambient lighting that's about half as bright as your screen. Position screens perpendicular to windows to reduce glare. Avoid working in complete darkness with only screen light, as this creates harsh contrast that strains your eyes.",
        },
        Tip {
            title: "Eye Protection",
            summary: "When and how to protect your eyes from UV and injury.",
            details: "Wear UV-blocking sunglasses outdoors and safety glasses during activities that could cause eye injury. Choose sunglasses that block 99-100% of UV rays. Use protective eyewear when playing sports, doing yard work, or working with chemicals.",
        },
        Tip {
            title: "Blink More Often",
            summary: "Conscious blinking helps maintain eye moisture.",
            details: "When focusing on screens, we blink less frequently, leading to dry eyes. Make a conscious effort to blink fully and frequently. Consider using artificial tears if you experience persistent dryness.",
        },
        Tip {
            title: "Adjust Screen Settings",
            summary: "Optimize your display for comfortable viewing.",
            details: "Adjust brightness to match your surroundings, increase text size to reduce squinting, and use dark mode in low-light conditions. Position your screen 20-24 inches away from your eyes with the top at or below eye level.",
        },
        Tip {
            title: "Stay Hydrated",
            summary: "Proper hydration supports healthy tear production.",
            details: "Drink plenty of water throughout the day to maintain overall health and support natural tear production. Dehydration can contribute to dry eyes and general eye discomfort.",
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tips_are_complete() {
        assert_eq!(TIPS.len(), 6);
        for tip in TIPS.iter() {
            assert!(!tip.title.is_empty());
            assert!(!tip.details.is_empty());
        }
    }
}
