use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: service name → Color32
// ---------------------------------------------------------------------------

/// Maps each service to a distinct colour for filter swatches, chart bars,
/// and the recent-feedback feed.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CategoryColors {
    /// Build a colour map from the services present in the data.
    pub fn new(services: &[String]) -> Self {
        let palette = generate_palette(services.len());
        let mapping: BTreeMap<String, Color32> =
            services.iter().cloned().zip(palette).collect();

        CategoryColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a service.
    pub fn color_for(&self, service: &str) -> Color32 {
        self.mapping
            .get(service)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_get_distinct_colours() {
        let services: Vec<String> = ["Haircut", "Workshop", "Yoga Class"]
            .map(String::from)
            .to_vec();
        let colors = CategoryColors::new(&services);

        let a = colors.color_for("Haircut");
        let b = colors.color_for("Workshop");
        let c = colors.color_for("Yoga Class");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn unknown_services_fall_back_to_gray() {
        let colors = CategoryColors::new(&[]);
        assert_eq!(colors.color_for("Massage"), Color32::GRAY);
    }

    #[test]
    fn palette_size_matches_request() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }
}
