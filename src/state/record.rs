use egui::Color32;

/// One row of the health/demographics dataset: a single US state.
/// Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthRecord {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub smokes: f64,
    pub obesity: f64,
}

/// Fields selectable for the X axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XField {
    Poverty,
    Age,
    Income,
}

/// Fields selectable for the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YField {
    Healthcare,
    Smokes,
    Obesity,
}

impl XField {
    pub const ALL: [XField; 3] = [XField::Poverty, XField::Age, XField::Income];

    pub fn value(&self, r: &HealthRecord) -> f64 {
        match self {
            XField::Poverty => r.poverty,
            XField::Age => r.age,
            XField::Income => r.income,
        }
    }

    /// Short label used in tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            XField::Poverty => "Poverty",
            XField::Age => "Age",
            XField::Income => "Income",
        }
    }

    /// Full text of the clickable axis-selection label.
    pub fn axis_label(&self) -> &'static str {
        match self {
            XField::Poverty => "In Poverty (%)",
            XField::Age => "Age (Median)",
            XField::Income => "Household Income (Median)",
        }
    }

    /// Unit suffix appended to tooltip values. Income is formatted as
    /// currency separately and carries no suffix.
    pub fn unit_suffix(&self) -> &'static str {
        match self {
            XField::Poverty => "%",
            XField::Age => " yrs",
            XField::Income => "",
        }
    }

    /// Marker (fill, stroke) colors when this field drives the X axis.
    pub fn colors(&self) -> (Color32, Color32) {
        match self {
            XField::Poverty => (
                Color32::from_rgb(0x89, 0xbd, 0xd3),
                Color32::from_rgb(0x3a, 0x87, 0x9e),
            ),
            XField::Age => (
                Color32::from_rgb(0xa9, 0xc6, 0x53),
                Color32::from_rgb(0x70, 0xc6, 0x53),
            ),
            XField::Income => (
                Color32::from_rgb(0xff, 0xad, 0x33),
                Color32::from_rgb(0xe6, 0x8a, 0x00),
            ),
        }
    }
}

impl YField {
    pub const ALL: [YField; 3] = [YField::Healthcare, YField::Smokes, YField::Obesity];

    pub fn value(&self, r: &HealthRecord) -> f64 {
        match self {
            YField::Healthcare => r.healthcare,
            YField::Smokes => r.smokes,
            YField::Obesity => r.obesity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YField::Healthcare => "Healthcare",
            YField::Smokes => "Smokes",
            YField::Obesity => "Obesity",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            YField::Healthcare => "Lacks Healthcare (%)",
            YField::Smokes => "Smokes (%)",
            YField::Obesity => "Obese (%)",
        }
    }

    pub fn unit_suffix(&self) -> &'static str {
        "%"
    }

    /// Marker (fill, stroke) colors when this field drives the Y axis.
    pub fn colors(&self) -> (Color32, Color32) {
        match self {
            YField::Healthcare => (
                Color32::from_rgb(0xff, 0x99, 0x99),
                Color32::from_rgb(0xff, 0x66, 0x66),
            ),
            YField::Smokes => (
                Color32::from_rgb(0xff, 0xaa, 0x80),
                Color32::from_rgb(0xff, 0x77, 0x33),
            ),
            YField::Obesity => (
                Color32::from_rgb(0xcc, 0xcc, 0x00),
                Color32::from_rgb(0x99, 0x99, 0x00),
            ),
        }
    }
}

/// The field whose palette currently colors the markers: whichever axis
/// field was clicked last. The default chart starts on the poverty palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteField {
    X(XField),
    Y(YField),
}

impl PaletteField {
    pub fn colors(&self) -> (Color32, Color32) {
        match self {
            PaletteField::X(f) => f.colors(),
            PaletteField::Y(f) => f.colors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HealthRecord {
        HealthRecord {
            state: "Alaska".to_string(),
            abbr: "AK".to_string(),
            poverty: 11.2,
            age: 33.3,
            income: 64222.0,
            healthcare: 14.9,
            smokes: 19.9,
            obesity: 29.7,
        }
    }

    #[test]
    fn field_accessors_pick_the_right_column() {
        let r = sample();
        assert_eq!(XField::Poverty.value(&r), 11.2);
        assert_eq!(XField::Age.value(&r), 33.3);
        assert_eq!(XField::Income.value(&r), 64222.0);
        assert_eq!(YField::Healthcare.value(&r), 14.9);
        assert_eq!(YField::Smokes.value(&r), 19.9);
        assert_eq!(YField::Obesity.value(&r), 29.7);
    }

    #[test]
    fn every_field_has_a_distinct_color_pair() {
        let mut pairs: Vec<(Color32, Color32)> =
            XField::ALL.iter().map(|f| f.colors()).collect();
        pairs.extend(YField::ALL.iter().map(|f| f.colors()));
        for i in 0..pairs.len() {
            for j in (i + 1)..pairs.len() {
                assert_ne!(pairs[i], pairs[j]);
            }
        }
    }
}
