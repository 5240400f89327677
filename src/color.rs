use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Source file → Color32
// ---------------------------------------------------------------------------

/// One colour per uploaded file, used for the sample markers and the file
/// table. Hues are spread evenly around the wheel.
#[derive(Debug, Clone)]
pub struct FileColors {
    colors: Vec<Color32>,
    default_color: Color32,
}

impl FileColors {
    pub fn new(file_count: usize) -> Self {
        let colors = (0..file_count)
            .map(|i| {
                let hue = 360.0 * i as f32 / file_count as f32;
                let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
                let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| (c * 255.0) as u8);
                Color32::from_rgb(r, g, b)
            })
            .collect();

        Self {
            colors,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, file_index: usize) -> Color32 {
        self.colors
            .get(file_index)
            .copied()
            .unwrap_or(self.default_color)
    }
}
