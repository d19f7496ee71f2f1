//! Eye nutrition dataset

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NutritionInfo {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub foods: Vec<&'static str>,
    pub benefits: &'static str,
}

pub static NUTRITION: Lazy<Vec<NutritionInfo>> = Lazy::new(|| {
    vec![
        NutritionInfo {
            title: "Omega-3 Rich Foods",
            summary: "Fish, walnuts, and flax seeds support retinal health.",
            details: "DHA, an omega-3 fatty acid, is concentrated in the retina. Regular intake may reduce risk of dry eyes and macular degeneration.",
            foods: vec!["Salmon", "Mackerel", "Sardines", "Walnuts", "Flax seeds", "Chia seeds", "Tuna"],
            benefits: "Supports retinal function, reduces inflammation, and may prevent dry eye syndrome.",
        },
        NutritionInfo {
            title: "Antioxidant Powerhouses",
            summary: "Leafy greens, berries, and colorful vegetables protect against oxidative damage.",
            details: "Lutein and zeaxanthin in spinach, kale, and corn act as natural sunglasses, filtering harmful blue light.",
            foods: vec!["Spinach", "Kale", "Collard greens", "Corn", "Blueberries", "Carrots", "Bell peppers"],
            benefits: "Filters blue light, reduces risk of cataracts and macular degeneration, protects against oxidative stress.",
        },
        NutritionInfo {
            title: "Vitamin A Sources",
            summary: "Carrots, sweet potatoes, and liver support night vision.",
            details: "Vitamin A is essential for rhodopsin production, the protein that allows you to see in low light conditions.",
            foods: vec!["Carrots", "Sweet potatoes", "Liver", "Egg yolks", "Cantaloupe", "Apricots", "Mangoes"],
            benefits: "Essential for night vision, prevents night blindness, maintains healthy cornea.",
        },
        NutritionInfo {
            title: "Vitamin C Rich Foods",
            summary: "Citrus fruits and vegetables support blood vessel health in the eyes.",
            details: "Vitamin C helps maintain healthy blood vessels in the retina and may reduce risk of cataracts.",
            foods: vec!["Oranges", "Strawberries", "Broccoli", "Brussels sprouts", "Kiwi", "Papaya", "Red peppers"],
            benefits: "Supports blood vessel health, may reduce cataract risk, aids in collagen production.",
        },
        NutritionInfo {
            title: "Zinc Sources",
            summary: "Nuts, seeds, and legumes help transport vitamin A to the retina.",
            details: "Zinc helps transport vitamin A from the liver to the retina and supports overall eye health.",
            foods: vec!["Pumpkin seeds", "Chickpeas", "Cashews", "Almonds", "Quinoa", "Dark chocolate", "Oysters"],
            benefits: "Helps vitamin A absorption, supports night vision, may slow age-related macular degeneration.",
        },
        NutritionInfo {
            title: "Vitamin E Foods",
            summary: "Nuts and seeds provide vitamin E to protect eye cells from damage.",
            details: "Vitamin E is a powerful antioxidant that helps protect eye cells from free radical damage.",
            foods: vec!["Almonds", "Sunflower seeds", "Hazelnuts", "Avocado", "Olive oil", "Wheat germ", "Spinach"],
            benefits: "Protects cell membranes, may reduce risk of cataracts and age-related macular degeneration.",
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_entries_list_foods() {
        assert_eq!(NUTRITION.len(), 6);
        for info in NUTRITION.iter() {
            assert_eq!(info.foods.len(), 7);
            assert!(!info.benefits.is_empty());
        }
    }
}
