use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::GradeColors;
use crate::data::model::{AnnotatedRecord, Grade, GradeDistribution, Statistics};
use crate::data::processor::{grade_file, RosterProcessor};
use crate::data::summary::Summary;
use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: Settings,

    /// Graded roster (None until the user opens a file).
    pub run: Option<RosterProcessor>,

    /// Roster the current run was read from.
    pub input_path: Option<PathBuf>,

    /// Grade whose students are listed in the side panel.
    pub selected_grade: Option<Grade>,

    pub colors: GradeColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            run: None,
            input_path: None,
            selected_grade: None,
            colors: GradeColors::default(),
            status_message: None,
        }
    }

    /// Grade `path` and write the output file. On failure the previous run
    /// stays on screen and the error goes to the status line.
    pub fn open_roster(&mut self, path: &Path) {
        let output = self.settings.output_path.clone();
        match grade_file(path, &output).with_context(|| format!("grading {}", path.display())) {
            Ok(run) => {
                self.run = Some(run);
                self.input_path = Some(path.to_path_buf());
                self.selected_grade = None;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to grade roster: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn statistics(&self) -> Option<Statistics> {
        self.run.as_ref().and_then(|r| r.statistics().ok())
    }

    pub fn distribution(&self) -> Option<&GradeDistribution> {
        self.run.as_ref().and_then(|r| r.distribution().ok())
    }

    /// Drill-down query behind a bar click.
    pub fn selected_students(&self) -> &[AnnotatedRecord] {
        match (&self.run, self.selected_grade) {
            (Some(run), Some(grade)) => run.lookup(grade).unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Clicking the selected bar again clears the selection.
    pub fn select_grade(&mut self, grade: Grade) {
        if self.selected_grade == Some(grade) {
            self.selected_grade = None;
        } else {
            self.selected_grade = Some(grade);
        }
    }

    pub fn export_summary(&self, path: &Path) -> Result<()> {
        let run = self.run.as_ref().context("no roster loaded")?;
        let summary = Summary::new(&run.statistics()?, run.distribution()?);
        summary
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Summary exported to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(dir: &Path) -> AppState {
        AppState::new(Settings {
            output_path: dir.join("grades_output.csv"),
            ..Settings::default()
        })
    }

    #[test]
    fn opening_a_roster_enables_drill_down() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("roster.csv");
        std::fs::write(&input, "Name,Marks\nAlice,90\nBob,70\nCarol,50\nDan,52\n").unwrap();

        let mut state = state_in(dir.path());
        state.open_roster(&input);
        assert!(state.status_message.is_none());
        assert!(state.settings.output_path.exists());
        assert_eq!(state.input_path.as_deref(), Some(input.as_path()));

        state.select_grade(Grade::B);
        let names: Vec<&str> = state.selected_students().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Carol", "Dan"]);

        state.select_grade(Grade::B);
        assert!(state.selected_students().is_empty());
    }

    #[test]
    fn failed_open_reports_and_keeps_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.open_roster(&dir.path().join("missing.csv"));

        assert!(state.run.is_none());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert!(!state.settings.output_path.exists());
    }

    #[test]
    fn export_summary_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("roster.csv");
        std::fs::write(&input, "Name,Marks\nAlice,90\nBob,70\n").unwrap();

        let mut state = state_in(dir.path());
        assert!(state.export_summary(&dir.path().join("none.json")).is_err());

        state.open_roster(&input);
        let out = dir.path().join("summary.json");
        state.export_summary(&out).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["count"], 2);
    }
}
