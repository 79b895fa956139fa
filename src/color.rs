use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Grade;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` colours along a hue ramp from green (best) to red (worst).
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let step = if n > 1 { 130.0 / (n - 1) as f32 } else { 0.0 };
    (0..n)
        .map(|i| {
            let hue = 130.0 - i as f32 * step;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Grade → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per grade so a bar keeps its colour across rosters.
#[derive(Debug, Clone)]
pub struct GradeColors {
    mapping: BTreeMap<Grade, Color32>,
}

impl Default for GradeColors {
    fn default() -> Self {
        let palette = generate_palette(Grade::ALL.len());
        GradeColors {
            mapping: Grade::ALL.into_iter().zip(palette).collect(),
        }
    }
}

impl GradeColors {
    pub fn color_for(&self, grade: Grade) -> Color32 {
        self.mapping
            .get(&grade)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(1).len(), 1);
        assert_eq!(generate_palette(6).len(), 6);
    }

    #[test]
    fn every_grade_gets_a_distinct_colour() {
        let colors = GradeColors::default();
        let mut seen: Vec<Color32> = Grade::ALL.iter().map(|g| colors.color_for(*g)).collect();
        seen.dedup();
        assert_eq!(seen.len(), Grade::ALL.len());
    }
}
