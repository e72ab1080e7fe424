//! Panel colours and text sizing

use eframe::egui::{self, Color32, Stroke};

/// Window and panel background
pub const BASE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

const INPUT_LIFT: f32 = 0.08;
const BORDER_DELTA: f32 = 0.18;

/// Colours derived from one base colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub base: Color32,
    pub foreground: Color32,
    pub input: Color32,
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::derive(BASE)
    }
}

impl Theme {
    pub fn derive(base: Color32) -> Self {
        let luminance = luminance(base);

        let foreground = if luminance > 140.0 {
            Color32::BLACK
        } else {
            Color32::WHITE
        };
        let border = if luminance < 128.0 {
            lighten(base, BORDER_DELTA)
        } else {
            darken(base, BORDER_DELTA)
        };

        Self {
            base,
            foreground,
            input: lighten(base, INPUT_LIFT),
            border,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if luminance(self.base) < 128.0 {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = self.base;
        visuals.window_fill = self.base;
        visuals.extreme_bg_color = self.input;
        visuals.override_text_color = Some(self.foreground);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);

        ctx.set_visuals(visuals);
    }
}

/// Rec. 709 luma on 0..=255 channels
pub fn luminance(color: Color32) -> f32 {
    0.2126 * color.r() as f32 + 0.7152 * color.g() as f32 + 0.0722 * color.b() as f32
}

fn lighten(color: Color32, factor: f32) -> Color32 {
    let channel = |c: u8| (c as f32 + (255.0 - c as f32) * factor).round().min(255.0) as u8;
    Color32::from_rgb(channel(color.r()), channel(color.g()), channel(color.b()))
}

fn darken(color: Color32, factor: f32) -> Color32 {
    let channel = |c: u8| (c as f32 * (1.0 - factor)).clamp(0.0, 255.0) as u8;
    Color32::from_rgb(channel(color.r()), channel(color.g()), channel(color.b()))
}

/// Summary text size in points for a panel of the given height
pub fn text_size(panel_height: f32) -> f32 {
    let text_height = (panel_height * 0.55).floor();
    (text_height / 20.0).floor().clamp(8.0, 12.0)
}
