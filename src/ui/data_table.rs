use crate::state::plot_state::{PlotState, SortDirection};
use crate::ui::tooltip::format_income;

const COLUMNS: [&str; 8] = [
    "State",
    "Abbr",
    "Poverty (%)",
    "Age (Median)",
    "Income (Median)",
    "Lacks Healthcare (%)",
    "Smokes (%)",
    "Obese (%)",
];

/// Sortable table of the loaded dataset. Clicking a header cycles
/// ascending, descending, then back to file order.
pub fn show_table_view(state: &mut PlotState, ui: &mut egui::Ui) {
    if state.records.is_empty() {
        ui.label("No data loaded.");
        return;
    }

    use egui_extras::{Column, TableBuilder};

    let sorted_indices = state.sorted_indices();
    let current_sort = state.table_sort;
    let clicked_col: std::cell::Cell<Option<usize>> = std::cell::Cell::new(None);

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(90.0), COLUMNS.len())
        .min_scrolled_height(300.0);

    table
        .header(20.0, |mut header| {
            for (col_idx, title) in COLUMNS.iter().enumerate() {
                header.col(|ui| {
                    let arrow = match current_sort {
                        Some((c, SortDirection::Ascending)) if c == col_idx => " ^",
                        Some((c, SortDirection::Descending)) if c == col_idx => " v",
                        _ => "",
                    };
                    if ui.button(format!("{title}{arrow}")).clicked() {
                        clicked_col.set(Some(col_idx));
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, sorted_indices.len(), |mut row| {
                let record = &state.records[sorted_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&record.state);
                });
                row.col(|ui| {
                    ui.label(&record.abbr);
                });
                for (value, is_income) in [
                    (record.poverty, false),
                    (record.age, false),
                    (record.income, true),
                    (record.healthcare, false),
                    (record.smokes, false),
                    (record.obesity, false),
                ] {
                    row.col(|ui| {
                        if !value.is_finite() {
                            ui.label("-");
                        } else if is_income {
                            ui.label(format_income(value));
                        } else {
                            ui.label(format!("{value:.1}"));
                        }
                    });
                }
            });
        });

    if let Some(col) = clicked_col.get() {
        state.cycle_sort(col);
    }
}
