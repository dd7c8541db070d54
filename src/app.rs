use std::path::Path;
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::data::loader;
use crate::state::plot_state::PlotState;
use crate::state::record::HealthRecord;
use crate::state::theme::Theme;
use crate::ui::data_table;
use crate::ui::scatter_panel::{self, ScatterAction};

pub const VERSION: &str = "0.1.0";

/// Dataset loaded on startup when present.
pub const DEFAULT_DATA_PATH: &str = "assets/data.csv";

/// A CSV load running on a worker thread so the UI stays responsive.
struct PendingLoad {
    source_name: String,
    result: Arc<Mutex<Option<Result<Vec<HealthRecord>, String>>>>,
}

/// The main application: the plot controller state plus app-level chrome.
pub struct StatePlotApp {
    pub state: PlotState,
    pub theme: Theme,
    /// Transient error shown in the footer until dismissed.
    pub error_message: Option<String>,
    pending_load: Option<PendingLoad>,
}

impl StatePlotApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::default();
        cc.egui_ctx.set_visuals(theme.visuals());

        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(14.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(20.0),
        );
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        cc.egui_ctx.set_style(style);

        let mut app = Self {
            state: PlotState::new(),
            theme,
            error_message: None,
            pending_load: None,
        };

        let default = Path::new(DEFAULT_DATA_PATH);
        if default.exists() {
            app.load_csv(default);
        } else {
            tracing::info!("no dataset at {DEFAULT_DATA_PATH}; waiting for Open CSV");
        }
        app
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.load_csv(&path);
        }
    }

    /// Parse a data file on a worker thread. A new request replaces any
    /// load still in flight.
    fn load_csv(&mut self, path: &Path) {
        let path_buf = path.to_path_buf();
        let result: Arc<Mutex<Option<Result<Vec<HealthRecord>, String>>>> =
            Arc::new(Mutex::new(None));
        let result_clone = Arc::clone(&result);

        std::thread::spawn(move || {
            let loaded = loader::load_csv(&path_buf);
            *result_clone.lock().unwrap() = Some(loaded);
        });

        self.pending_load = Some(PendingLoad {
            source_name: loader::source_name(path),
            result,
        });
    }

    /// Apply a finished load, if any. On failure the render is aborted:
    /// the previous dataset (possibly none) stays on screen and the error
    /// goes to the log and the footer.
    fn poll_pending_load(&mut self) {
        let Some(pending) = &self.pending_load else {
            return;
        };
        let mut lock = pending.result.lock().unwrap();
        if let Some(result) = lock.take() {
            let source_name = pending.source_name.clone();
            drop(lock);
            self.pending_load = None;
            match result {
                Ok(records) => {
                    tracing::info!("loaded {} records from {source_name}", records.len());
                    self.state.set_records(records, source_name);
                    self.error_message = None;
                }
                Err(e) => {
                    tracing::error!("failed to load dataset: {e}");
                    self.error_message = Some(e);
                }
            }
        }
    }
}

impl eframe::App for StatePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.theme.visuals());

        self.poll_pending_load();

        // --- Header panel ---
        let mut open_csv = false;
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.visuals_mut().override_text_color =
                        Some(ui.visuals().strong_text_color());
                    ui.heading("State Health Risks");
                    ui.visuals_mut().override_text_color = None;

                    ui.separator();

                    if ui.button("Open CSV").clicked() {
                        open_csv = true;
                    }

                    let view_label = if self.state.show_data_table {
                        "Chart View"
                    } else {
                        "Table View"
                    };
                    if ui.button(view_label).clicked() {
                        self.state.show_data_table = !self.state.show_data_table;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_label = match self.theme {
                            Theme::Dark => "Light Mode",
                            Theme::Light => "Dark Mode",
                        };
                        if ui.button(theme_label).clicked() {
                            self.theme = self.theme.toggle();
                        }
                        ui.separator();
                        ui.small(format!("v{VERSION}"));
                    });
                });
            });

        if open_csv {
            self.open_file_dialog();
        }

        // --- Footer panel ---
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(16, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let count = self.state.records.len();
                    let status = if count == 0 {
                        "no data".to_string()
                    } else {
                        format!("{count} states ({})", self.state.source_name)
                    };
                    ui.label(egui::RichText::new(status).weak());

                    if let Some(msg) = &self.error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::from_rgb(255, 80, 80), msg);
                        if ui.small_button("dismiss").clicked() {
                            self.error_message = None;
                        }
                    }
                });
            });

        // --- Central panel ---
        let mut action = ScatterAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.show_data_table {
                data_table::show_table_view(&mut self.state, ui);
            } else {
                action = scatter_panel::show_scatter_panel(&self.state, ui, &self.theme);
            }
        });

        let now = ctx.input(|i| i.time);
        match action {
            ScatterAction::None => {}
            ScatterAction::SelectX(field) => self.state.select_x(field, now),
            ScatterAction::SelectY(field) => self.state.select_y(field, now),
        }

        // Drop the transition once it has run its 500 ms.
        if self
            .state
            .transition
            .map_or(false, |tr| tr.finished(now))
        {
            self.state.transition = None;
        }

        // --- Loading indicator ---
        if self.pending_load.is_some() {
            egui::Window::new("Loading")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading dataset...");
                    });
                });
            ctx.request_repaint();
        }
    }
}
