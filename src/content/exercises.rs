//! Eye exercises dataset

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub instructions: &'static str,
}

pub static EXERCISES: Lazy<Vec<Exercise>> = Lazy::new(|| {
    vec![
        Exercise {
            title: "Focus Shifting",
            summary: "Hold a finger 10 inches away, focus on it, then shift to something 20 feet away.",
            details: "Repeat 10 times. This exercise helps improve focus flexibility and reduces eye strain from prolonged near work.",
            instructions: "1. Hold your finger 10 inches from your face\n2. Focus on your finger for 3 seconds\n3. Shift focus to an object 20 feet away\n4. Focus on the distant object for 3 seconds\n5. Return focus to your finger\n6. Repeat 10 times",
        },
        Exercise {
            title: "Palming",
            summary: "Cover closed eyes with palms for 30 seconds to relax eye muscles.",
            details: "This relaxation technique helps reduce eye fatigue and can be done anywhere, anytime you feel eye strain.",
            instructions: "1. Sit comfortably and close your eyes\n2. Place your palms gently over your closed eyes\n3. Ensure no light enters through your fingers\n4. Relax and breathe deeply for 30 seconds\n5. Remove hands slowly and open eyes",
        },
        Exercise {
            title: "Figure Eight",
            summary: "Trace imaginary figure eights with your eyes to improve eye movement.",
            details: "Trace slowly for 30 seconds clockwise, then counterclockwise. This improves eye muscle coordination.",
            instructions: "1. Sit with your back straight\n2. Look straight ahead\n3. Slowly trace a large figure 8 with your eyes\n4. Complete 5 clockwise figure 8s\n5. Rest for 5 seconds\n6. Complete 5 counterclockwise figure 8s",
        },
        Exercise {
            title: "Eye Rolling",
            summary: "Gentle circular eye movements to relax eye muscles.",
            details: "Helps improve blood circulation around the eyes and relieves tension from the eye muscles.",
            instructions: "1. Close your eyes gently\n2. Roll your eyes in a circular motion clockwise\n3. Complete 5 slow rotations\n4. Rest for 3 seconds\n5. Roll eyes counterclockwise 5 times\n6. Keep movements slow and controlled",
        },
        Exercise {
            title: "Blinking Exercise",
            summary: "Rapid blinking followed by gentle eye closure to lubricate eyes.",
            details: "Helps combat dry eyes and refreshes the tear film across your cornea.",
            instructions: "1. Blink rapidly for 10 seconds\n2. Close your eyes gently for 5 seconds\n3. Open eyes and look around normally\n4. Repeat the cycle 3 times\n5. Focus on complete, gentle blinks",
        },
        Exercise {
            title: "Near and Far Focus",
            summary: "Alternate focusing between near and far objects to exercise focusing muscles.",
            details: "Strengthens the ciliary muscles responsible for changing the shape of your lens for focusing.",
            instructions: "1. Hold a pen 6 inches from your nose\n2. Focus on the pen tip for 5 seconds\n3. Look at an object across the room\n4. Focus on the distant object for 5 seconds\n5. Return to the pen\n6. Repeat 10 times",
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercises_have_numbered_instructions() {
        assert_eq!(EXERCISES.len(), 6);
        for exercise in EXERCISES.iter() {
            assert!(exercise.instructions.starts_with("1."));
        }
    }
}
