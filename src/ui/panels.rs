use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::format_score;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Side panel – students in the selected grade
// ---------------------------------------------------------------------------

/// Render the drill-down list for the grade picked on the chart.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    let Some(grade) = state.selected_grade else {
        ui.heading("Students");
        ui.separator();
        ui.label("Click a bar to list its students.");
        return;
    };

    let students = state.selected_students();
    ui.heading(format!("Grade {grade}"));
    ui.label(format!("{} student(s)", students.len()));
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(100.0))
        .column(Column::auto().at_least(60.0))
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Marks");
            });
        })
        .body(|mut body| {
            for rec in students {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(rec.name());
                    });
                    row.col(|ui| {
                        ui.label(format_score(rec.score()));
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open roster…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_run = state.run.is_some();
            if ui
                .add_enabled(has_run, egui::Button::new("Export summary…"))
                .clicked()
            {
                export_summary_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(path) = &state.input_path {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.strong(name);
            ui.separator();
        }

        if let Some(stats) = state.statistics() {
            ui.label(format!(
                "{} students   mean {:.2}   σ {:.2}",
                stats.count, stats.mean, stats.stddev
            ));
            ui.separator();
            ui.label(format!("saved to {}", state.settings.output_path.display()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open student roster")
        .add_filter("Roster", &["csv", "txt"])
        .pick_file();

    if let Some(path) = file {
        state.open_roster(&path);
    }
}

pub fn export_summary_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export grade summary")
        .add_filter("JSON", &["json"])
        .set_file_name("grade_summary.json")
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_summary(&path) {
            log::error!("Failed to export summary: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
