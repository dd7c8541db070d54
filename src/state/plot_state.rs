use crate::state::record::{HealthRecord, PaletteField, XField, YField};

/// Duration of the axis re-binding animation, in seconds.
pub const TRANSITION_SECS: f64 = 0.5;

/// Direction for table column sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// An in-flight animation from the previous axis bindings to the current
/// ones. The panel interpolates marker positions, colors, and axis ticks
/// between the `from_*` fields and the fields now active on `PlotState`.
#[derive(Debug, Clone, Copy)]
pub struct AxisTransition {
    pub from_x: XField,
    pub from_y: YField,
    pub from_palette: PaletteField,
    /// `egui` time (seconds) when the transition started.
    pub started: f64,
}

impl AxisTransition {
    /// Eased progress in [0, 1]; 1.0 once the transition has finished.
    pub fn progress(&self, now: f64) -> f32 {
        let t = ((now - self.started) / TRANSITION_SECS).clamp(0.0, 1.0) as f32;
        // Cubic ease-in-out.
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        }
    }

    pub fn finished(&self, now: f64) -> bool {
        now - self.started >= TRANSITION_SECS
    }
}

/// The controller state: the loaded dataset, the active axis selections,
/// the in-flight transition, and the table-view state. All drawn geometry
/// is derived from this plus the current viewport rect, so a resize is a
/// full re-render that preserves the selections by construction.
pub struct PlotState {
    pub records: Vec<HealthRecord>,
    pub x_field: XField,
    pub y_field: YField,
    /// Palette of the last-clicked field; drives the marker colors.
    pub palette: PaletteField,
    pub transition: Option<AxisTransition>,
    pub show_data_table: bool,
    /// Table sort state: (column_index, direction). None = original order.
    pub table_sort: Option<(usize, SortDirection)>,
    /// Display name of the loaded data source (file stem).
    pub source_name: String,
}

impl PlotState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            x_field: XField::Poverty,
            y_field: YField::Healthcare,
            palette: PaletteField::X(XField::Poverty),
            transition: None,
            show_data_table: false,
            table_sort: None,
            source_name: String::new(),
        }
    }

    /// Replace the dataset. Selections are kept; any running transition is
    /// dropped since its source positions no longer exist.
    pub fn set_records(&mut self, records: Vec<HealthRecord>, source_name: String) {
        self.records = records;
        self.source_name = source_name;
        self.transition = None;
        self.table_sort = None;
    }

    /// Bind a new field to the X axis and start the transition. Clicking
    /// the already-active field is a no-op.
    pub fn select_x(&mut self, field: XField, now: f64) {
        if field == self.x_field {
            return;
        }
        self.transition = Some(AxisTransition {
            from_x: self.x_field,
            from_y: self.y_field,
            from_palette: self.palette,
            started: now,
        });
        self.x_field = field;
        self.palette = PaletteField::X(field);
    }

    /// Bind a new field to the Y axis and start the transition. Clicking
    /// the already-active field is a no-op.
    pub fn select_y(&mut self, field: YField, now: f64) {
        if field == self.y_field {
            return;
        }
        self.transition = Some(AxisTransition {
            from_x: self.x_field,
            from_y: self.y_field,
            from_palette: self.palette,
            started: now,
        });
        self.y_field = field;
        self.palette = PaletteField::Y(field);
    }

    pub fn x_values(&self, field: XField) -> Vec<f64> {
        self.records.iter().map(|r| field.value(r)).collect()
    }

    pub fn y_values(&self, field: YField) -> Vec<f64> {
        self.records.iter().map(|r| field.value(r)).collect()
    }

    /// Cycle a table column through ascending / descending / original order.
    pub fn cycle_sort(&mut self, col: usize) {
        self.table_sort = match self.table_sort {
            Some((c, SortDirection::Ascending)) if c == col => {
                Some((col, SortDirection::Descending))
            }
            Some((c, SortDirection::Descending)) if c == col => None,
            _ => Some((col, SortDirection::Ascending)),
        };
    }

    /// Row order for the table view under the current sort state.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.records.len()).collect();
        if let Some((col, dir)) = self.table_sort {
            indices.sort_by(|&a, &b| {
                let ra = &self.records[a];
                let rb = &self.records[b];
                let cmp = match col {
                    0 => ra.state.cmp(&rb.state),
                    1 => ra.abbr.cmp(&rb.abbr),
                    _ => {
                        let va = numeric_column(ra, col);
                        let vb = numeric_column(rb, col);
                        va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
                    }
                };
                match dir {
                    SortDirection::Ascending => cmp,
                    SortDirection::Descending => cmp.reverse(),
                }
            });
        }
        indices
    }
}

impl Default for PlotState {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_column(r: &HealthRecord, col: usize) -> f64 {
    match col {
        2 => r.poverty,
        3 => r.age,
        4 => r.income,
        5 => r.healthcare,
        6 => r.smokes,
        _ => r.obesity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, poverty: f64, healthcare: f64) -> HealthRecord {
        HealthRecord {
            state: state.to_string(),
            abbr: state[..2.min(state.len())].to_uppercase(),
            poverty,
            age: 35.0,
            income: 50000.0,
            healthcare,
            smokes: 18.0,
            obesity: 28.0,
        }
    }

    #[test]
    fn default_selection_is_poverty_vs_healthcare() {
        let s = PlotState::new();
        assert_eq!(s.x_field, XField::Poverty);
        assert_eq!(s.y_field, YField::Healthcare);
    }

    #[test]
    fn exactly_one_field_active_per_axis_after_any_clicks() {
        let mut s = PlotState::new();
        s.select_x(XField::Age, 0.0);
        s.select_x(XField::Income, 1.0);
        s.select_y(YField::Obesity, 2.0);
        s.select_y(YField::Smokes, 3.0);
        // The active selection is a single enum value per axis; verify the
        // last click on each axis won.
        assert_eq!(s.x_field, XField::Income);
        assert_eq!(s.y_field, YField::Smokes);
    }

    #[test]
    fn reselecting_active_field_is_idempotent() {
        let mut s = PlotState::new();
        s.select_x(XField::Poverty, 10.0);
        assert_eq!(s.x_field, XField::Poverty);
        assert!(s.transition.is_none(), "no transition for a no-op click");
        s.select_y(YField::Healthcare, 10.0);
        assert!(s.transition.is_none());
    }

    #[test]
    fn selection_change_records_previous_fields() {
        let mut s = PlotState::new();
        s.select_x(XField::Income, 5.0);
        let t = s.transition.expect("transition started");
        assert_eq!(t.from_x, XField::Poverty);
        assert_eq!(t.from_y, YField::Healthcare);
        assert_eq!(t.from_palette, PaletteField::X(XField::Poverty));
        assert_eq!(t.started, 5.0);
        assert_eq!(s.palette, PaletteField::X(XField::Income));
    }

    #[test]
    fn palette_follows_the_last_clicked_field() {
        let mut s = PlotState::new();
        assert_eq!(s.palette, PaletteField::X(XField::Poverty));
        s.select_y(YField::Obesity, 0.0);
        assert_eq!(s.palette, PaletteField::Y(YField::Obesity));
        s.select_x(XField::Age, 1.0);
        assert_eq!(s.palette, PaletteField::X(XField::Age));
    }

    #[test]
    fn transition_progress_ramps_and_finishes() {
        let t = AxisTransition {
            from_x: XField::Poverty,
            from_y: YField::Healthcare,
            from_palette: PaletteField::X(XField::Poverty),
            started: 0.0,
        };
        assert_eq!(t.progress(0.0), 0.0);
        assert_eq!(t.progress(TRANSITION_SECS), 1.0);
        assert_eq!(t.progress(10.0), 1.0);
        let mid = t.progress(TRANSITION_SECS / 2.0);
        assert!(mid > 0.4 && mid < 0.6);
        assert!(!t.finished(0.1));
        assert!(t.finished(TRANSITION_SECS));
    }

    #[test]
    fn selections_survive_dataset_independent_rerender() {
        // A viewport resize rebuilds everything from (records, x, y, rect);
        // the fields themselves must be untouched by reads.
        let mut s = PlotState::new();
        s.set_records(vec![record("Alpha", 10.0, 5.0)], "data".into());
        s.select_x(XField::Age, 0.0);
        s.select_y(YField::Smokes, 0.0);
        let _ = s.x_values(s.x_field);
        let _ = s.y_values(s.y_field);
        assert_eq!(s.x_field, XField::Age);
        assert_eq!(s.y_field, YField::Smokes);
    }

    #[test]
    fn sort_cycles_ascending_descending_original() {
        let mut s = PlotState::new();
        s.set_records(
            vec![record("Bravo", 20.0, 15.0), record("Alpha", 10.0, 5.0)],
            "data".into(),
        );
        assert_eq!(s.sorted_indices(), vec![0, 1]);

        s.cycle_sort(2); // poverty ascending
        assert_eq!(s.sorted_indices(), vec![1, 0]);

        s.cycle_sort(2); // descending
        assert_eq!(s.sorted_indices(), vec![0, 1]);

        s.cycle_sort(2); // back to original order
        assert!(s.table_sort.is_none());
        assert_eq!(s.sorted_indices(), vec![0, 1]);
    }
}
