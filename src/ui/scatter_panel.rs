use std::f32::consts::FRAC_PI_2;

use egui::epaint::TextShape;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::render::scale::{format_tick_value, LinearScale};
use crate::state::plot_state::PlotState;
use crate::state::record::{XField, YField};
use crate::state::theme::Theme;
use crate::ui::tooltip;

/// Actions the scatter panel can request from the app.
pub enum ScatterAction {
    None,
    SelectX(XField),
    SelectY(YField),
}

/// Chart margins in pixels; the label groups live in the bottom and left
/// margins.
const MARGIN_TOP: f32 = 20.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 100.0;
const MARGIN_LEFT: f32 = 100.0;

const MARKER_RADIUS: f32 = 15.0;
const MARKER_STROKE_WIDTH: f32 = 1.5;

/// Render the scatter chart into the available space. The whole layout is
/// rebuilt from the current rect every frame, so a viewport resize is a
/// full re-render and the active selections carry over untouched.
pub fn show_scatter_panel(state: &PlotState, ui: &mut egui::Ui, theme: &Theme) -> ScatterAction {
    let mut action = ScatterAction::None;

    if state.records.is_empty() {
        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No data loaded").strong().size(16.0));
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "Place the dataset at assets/data.csv or use \"Open CSV\" above.",
                )
                .weak(),
            );
        });
        return action;
    }

    let available = ui.available_size();
    let total_height = available.y.max(300.0);
    let total_width = available.x.max(400.0);
    let (_, total_rect) = ui.allocate_space(Vec2::new(total_width, total_height));
    let response = ui.interact(total_rect, egui::Id::new("scatter_plot"), Sense::hover());

    let plot_rect = Rect::from_min_max(
        Pos2::new(total_rect.left() + MARGIN_LEFT, total_rect.top() + MARGIN_TOP),
        Pos2::new(
            total_rect.right() - MARGIN_RIGHT,
            total_rect.bottom() - MARGIN_BOTTOM,
        ),
    );
    let width = plot_rect.width();
    let height = plot_rect.height();

    let now = ui.input(|i| i.time);
    let painter = ui.painter_at(total_rect);
    painter.rect_filled(plot_rect, 0.0, theme.plot_bg());

    // --- Scales: target scales for the active fields, blended with the
    // previous fields' scales while a transition is in flight. ---
    let x_to = LinearScale::x_scale(&state.x_values(state.x_field), width);
    let y_to = LinearScale::y_scale(&state.y_values(state.y_field), height);

    let (t, from_x_field, from_y_field, palette_from) = match &state.transition {
        Some(tr) => (tr.progress(now), tr.from_x, tr.from_y, tr.from_palette),
        None => (1.0, state.x_field, state.y_field, state.palette),
    };
    let x_from = LinearScale::x_scale(&state.x_values(from_x_field), width);
    let y_from = LinearScale::y_scale(&state.y_values(from_y_field), height);

    let x_axis = LinearScale::lerp(&x_from, &x_to, t);
    let y_axis = LinearScale::lerp(&y_from, &y_to, t);

    let (fill_from, stroke_from) = palette_from.colors();
    let (fill_to, stroke_to) = state.palette.colors();
    let fill = lerp_color(fill_from, fill_to, t);
    let stroke_color = lerp_color(stroke_from, stroke_to, t);

    draw_grid_and_axes(&painter, theme, plot_rect, &x_axis, &y_axis);

    // --- Markers with embedded abbreviation labels ---
    let marker_font = FontId::proportional(10.0);
    let mut positions: Vec<Pos2> = Vec::with_capacity(state.records.len());
    for record in &state.records {
        let px_from = x_from.apply(from_x_field.value(record));
        let px_to = x_to.apply(state.x_field.value(record));
        let py_from = y_from.apply(from_y_field.value(record));
        let py_to = y_to.apply(state.y_field.value(record));
        let px = px_from + (px_to - px_from) * t;
        let py = py_from + (py_to - py_from) * t;
        let pos = Pos2::new(plot_rect.left() + px, plot_rect.top() + py);
        positions.push(pos);

        painter.circle_filled(pos, MARKER_RADIUS, fill);
        painter.circle_stroke(pos, MARKER_RADIUS, Stroke::new(MARKER_STROKE_WIDTH, stroke_color));
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            &record.abbr,
            marker_font.clone(),
            theme.marker_text_color(),
        );
    }

    // --- Axis-selection label groups ---
    if let Some(field) = draw_x_label_group(ui, &painter, state, theme, plot_rect) {
        action = ScatterAction::SelectX(field);
    }
    if let Some(field) = draw_y_label_group(ui, &painter, state, theme, plot_rect) {
        action = ScatterAction::SelectY(field);
    }

    // --- Hover tooltip over the nearest marker ---
    if response.hovered() {
        if let Some(mouse_pos) = response.hover_pos() {
            draw_marker_tooltip(&painter, state, &positions, mouse_pos);
        }
    }

    // Keep repainting while the transition runs.
    if state.transition.is_some() && t < 1.0 {
        ui.ctx().request_repaint();
    }

    action
}

fn draw_grid_and_axes(
    painter: &egui::Painter,
    theme: &Theme,
    plot_rect: Rect,
    x_axis: &LinearScale,
    y_axis: &LinearScale,
) {
    let text_color = painter.ctx().style().visuals.text_color();
    let dim_color = text_color.gamma_multiply(0.6);
    let tick_font = FontId::proportional(10.0);

    painter.rect_stroke(plot_rect, 0.0, Stroke::new(1.0, dim_color), StrokeKind::Outside);

    // X ticks: grid line, tick mark, tick label below the axis.
    for tick in x_axis.ticks() {
        let sx = plot_rect.left() + x_axis.apply(tick);
        if sx < plot_rect.left() - 0.5 || sx > plot_rect.right() + 0.5 {
            continue;
        }
        painter.vline(
            sx,
            plot_rect.top()..=plot_rect.bottom(),
            Stroke::new(1.0, theme.grid_color()),
        );
        painter.vline(
            sx,
            plot_rect.bottom()..=(plot_rect.bottom() + 5.0),
            Stroke::new(1.0, dim_color),
        );
        painter.text(
            Pos2::new(sx, plot_rect.bottom() + 7.0),
            Align2::CENTER_TOP,
            format_tick_value(tick),
            tick_font.clone(),
            dim_color,
        );
    }

    // Y ticks: grid line, tick mark, tick label left of the axis.
    for tick in y_axis.ticks() {
        let sy = plot_rect.top() + y_axis.apply(tick);
        if sy < plot_rect.top() - 0.5 || sy > plot_rect.bottom() + 0.5 {
            continue;
        }
        painter.hline(
            plot_rect.left()..=plot_rect.right(),
            sy,
            Stroke::new(1.0, theme.grid_color()),
        );
        painter.hline(
            (plot_rect.left() - 5.0)..=plot_rect.left(),
            sy,
            Stroke::new(1.0, dim_color),
        );
        painter.text(
            Pos2::new(plot_rect.left() - 7.0, sy),
            Align2::RIGHT_CENTER,
            format_tick_value(tick),
            tick_font.clone(),
            dim_color,
        );
    }
}

/// Three stacked labels centered under the X axis; returns a field when one
/// of the inactive labels is clicked.
fn draw_x_label_group(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    state: &PlotState,
    theme: &Theme,
    plot_rect: Rect,
) -> Option<XField> {
    let mut clicked = None;
    let base_y = plot_rect.bottom() + 40.0;

    for (i, field) in XField::ALL.iter().enumerate() {
        let active = *field == state.x_field;
        let color = label_color(theme, active);
        let font = label_font(active);
        let galley = painter.layout_no_wrap(field.axis_label().to_string(), font, color);
        let size = galley.size();
        let center = Pos2::new(plot_rect.center().x, base_y + i as f32 * 20.0);
        let rect = Rect::from_center_size(center, size);

        let resp = ui
            .interact(rect, egui::Id::new("x_axis_label").with(i), Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if resp.clicked() && !active {
            clicked = Some(*field);
        }
        painter.galley(rect.min, galley, color);
    }
    clicked
}

/// Three rotated labels stacked left of the Y axis; returns a field on
/// click.
fn draw_y_label_group(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    state: &PlotState,
    theme: &Theme,
    plot_rect: Rect,
) -> Option<YField> {
    let mut clicked = None;

    for (i, field) in YField::ALL.iter().enumerate() {
        let active = *field == state.y_field;
        let color = label_color(theme, active);
        let font = label_font(active);
        let galley = painter.layout_no_wrap(field.axis_label().to_string(), font, color);
        let text_len = galley.size().x;
        let text_height = galley.size().y;

        // Offsets 40/60/80 px left of the plot area, one column of
        // rotated labels per selectable field.
        let label_x = plot_rect.left() - 40.0 - i as f32 * 20.0;
        let center_y = plot_rect.center().y;

        let hit_rect = Rect::from_center_size(
            Pos2::new(label_x, center_y),
            Vec2::new(text_height, text_len),
        );
        let resp = ui
            .interact(hit_rect, egui::Id::new("y_axis_label").with(i), Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if resp.clicked() && !active {
            clicked = Some(*field);
        }

        // Rotate -90 degrees around the galley origin so the text reads
        // bottom-to-top along the axis.
        let pos = Pos2::new(label_x - text_height / 2.0, center_y + text_len / 2.0);
        painter.add(TextShape::new(pos, galley, color).with_angle(-FRAC_PI_2));
    }
    clicked
}

fn label_color(theme: &Theme, active: bool) -> Color32 {
    if active {
        theme.active_label_color()
    } else {
        theme.inactive_label_color()
    }
}

fn label_font(active: bool) -> FontId {
    if active {
        FontId::proportional(14.0)
    } else {
        FontId::proportional(13.0)
    }
}

/// Show the tooltip for the marker under the pointer, if any.
fn draw_marker_tooltip(
    painter: &egui::Painter,
    state: &PlotState,
    positions: &[Pos2],
    mouse_pos: Pos2,
) {
    let mut best: Option<(usize, f32)> = None;
    for (i, pos) in positions.iter().enumerate() {
        let dist = pos.distance(mouse_pos);
        if dist <= MARKER_RADIUS && best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    let Some((idx, _)) = best else { return };

    let record = &state.records[idx];
    let text = tooltip::tooltip_text(record, state.x_field, state.y_field);

    let font = FontId::proportional(11.0);
    let text_color = painter.ctx().style().visuals.text_color();
    let galley = painter.layout_no_wrap(text, font, text_color);
    let anchor = positions[idx];
    let tooltip_pos = Pos2::new(
        anchor.x + MARKER_RADIUS + 6.0,
        anchor.y - galley.size().y - 6.0,
    );
    let bg_rect = Rect::from_min_size(
        Pos2::new(tooltip_pos.x - 5.0, tooltip_pos.y - 3.0),
        galley.size() + Vec2::new(10.0, 6.0),
    );

    let bg_color = painter.ctx().style().visuals.window_fill;
    let (_, stroke_color) = state.palette.colors();
    painter.rect_filled(bg_rect, 3.0, bg_color.gamma_multiply(0.92));
    painter.rect_stroke(bg_rect, 3.0, Stroke::new(0.5, stroke_color), StrokeKind::Outside);
    painter.galley(tooltip_pos, galley, text_color);
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    if t >= 1.0 {
        return b;
    }
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round() as u8 };
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}
