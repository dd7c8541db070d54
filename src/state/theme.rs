use egui::{Color32, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    pub fn plot_bg(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(20, 20, 20),
            Theme::Light => Color32::from_rgb(255, 255, 255),
        }
    }

    pub fn grid_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgba_premultiplied(100, 100, 100, 60),
            Theme::Light => Color32::from_rgba_premultiplied(180, 180, 180, 80),
        }
    }

    /// Color of the state abbreviation drawn inside each marker.
    pub fn marker_text_color(&self) -> Color32 {
        Color32::WHITE
    }

    /// Color of the axis-selection label currently bound to its axis.
    pub fn active_label_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_gray(235),
            Theme::Light => Color32::from_gray(20),
        }
    }

    /// Color of the unselected axis-selection labels.
    pub fn inactive_label_color(&self) -> Color32 {
        Color32::from_gray(128)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
