//! Health articles dataset

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

pub static ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            title: "Understanding Digital Eye Strain",
            summary: "Learn about symptoms and prevention of computer vision syndrome.",
            details: "Digital eye strain affects 70% of adults who spend 2+ hours on screens daily. Symptoms include dry eyes, headaches, and blurred vision. The condition is also known as Computer Vision Syndrome (CVS) and can be managed through proper screen habits, regular breaks, and appropriate lighting.",
        },
        Article {
            title: "Age-Related Macular Degeneration",
            summary: "Early detection and management strategies for AMD.",
            details: "AMD is the leading cause of vision loss in adults over 50. Regular eye exams can detect early changes before symptoms appear. There are two types: dry AMD (more common, progresses slowly) and wet AMD (less common, progresses rapidly). Risk factors include age, genetics, smoking, and UV exposure.",
        },
        Article {
            title: "Diabetic Retinopathy Prevention",
            summary: "How diabetes affects your eyes and prevention tips.",
            details: "Diabetic retinopathy can cause permanent vision loss. Annual dilated eye exams are crucial for early detection and treatment. High blood sugar damages blood vessels in the retina. Prevention includes maintaining good blood sugar control, blood pressure management, and regular exercise.",
        },
        Article {
            title: "Glaucoma: The Silent Thief of Sight",
            summary: "Understanding the importance of early glaucoma detection.",
            details: "Glaucoma often has no early symptoms, earning it the nickname \"silent thief of sight.\" It gradually damages the optic nerve, usually due to increased eye pressure. Regular comprehensive eye exams are essential, especially for those over 40 or with family history.",
        },
        Article {
            title: "Cataracts: Causes and Treatment",
            summary: "Learn about cataract development and modern treatment options.",
            details: "Cataracts are a natural part of aging, causing the eye's lens to become cloudy. Symptoms include blurred vision, sensitivity to light, and difficulty seeing at night. Modern cataract surgery is highly successful, with over 95% success rate in improving vision.",
        },
    ]
});
