use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::data::model::Grade;
use crate::state::AppState;

const BAR_WIDTH: f64 = 0.7;
/// Gap between a bar's top and its count label, in students.
const LABEL_OFFSET: f64 = 0.2;

// ---------------------------------------------------------------------------
// Grade bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the grade distribution; a click on a bar selects that grade.
pub fn grade_chart(ui: &mut Ui, state: &mut AppState) {
    let bars: Vec<(Grade, usize)> = match state.distribution() {
        Some(dist) => dist.iter().map(|(g, n)| (*g, *n)).collect(),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a roster to grade it  (File → Open roster…)");
            });
            return;
        }
    };

    let chart_bars: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(i, (grade, count))| {
            let mut bar = Bar::new(i as f64, *count as f64)
                .name(format!("{grade}: {count}"))
                .width(BAR_WIDTH)
                .fill(state.colors.color_for(*grade));
            if state.selected_grade == Some(*grade) {
                bar = bar.stroke((2.0, ui.visuals().strong_text_color()));
            }
            bar
        })
        .collect();

    let labels: Vec<String> = bars.iter().map(|(g, _)| g.to_string()).collect();
    let counts: Vec<usize> = bars.iter().map(|(_, n)| *n).collect();
    let count_texts = count_labels(&counts);
    let top = counts.iter().max().copied().unwrap_or(0) as f64 + 1.0;

    let response = Plot::new("grade_chart")
        .x_axis_label("Grade")
        .y_axis_label("Students")
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .include_y(top)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(chart_bars));
            for ([x, y], text) in count_texts {
                plot_ui.text(Text::new(PlotPoint::new(x, y), text));
            }
            plot_ui.pointer_coordinate()
        });

    if response.response.clicked() {
        if let Some(idx) = response
            .inner
            .and_then(|p| bar_at([p.x, p.y], &counts))
        {
            state.select_grade(bars[idx].0);
        }
    }
}

/// Grade label under an integral x position, blank between bars.
fn axis_label(labels: &[String], x: f64) -> String {
    if x.fract() != 0.0 || x < 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}

/// Count label anchored just above each bar.
fn count_labels(counts: &[usize]) -> Vec<([f64; 2], String)> {
    counts
        .iter()
        .enumerate()
        .map(|(i, n)| ([i as f64, *n as f64 + LABEL_OFFSET], n.to_string()))
        .collect()
}

/// Index of the bar containing plot point `[x, y]`, if any.
fn bar_at(point: [f64; 2], counts: &[usize]) -> Option<usize> {
    let [x, y] = point;
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > BAR_WIDTH / 2.0 {
        return None;
    }
    let idx = idx as usize;
    let height = *counts.get(idx)? as f64;
    (y >= 0.0 && y <= height).then_some(idx)
}
