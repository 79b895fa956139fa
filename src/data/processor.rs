use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{GradeError, GradeResult};
use super::grouping::{group, lookup};
use super::loader;
use super::model::{AnnotatedRecord, Grade, GradeDistribution, GradeGroups, Record, Statistics};
use super::stats::{classify, compute_statistics};
use super::writer::{save_file, serialize};

// ---------------------------------------------------------------------------
// Pipeline stage
// ---------------------------------------------------------------------------

/// How far a [`RosterProcessor`] has progressed. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Unloaded,
    Loaded,
    Computed,
    Classified,
    Serialized,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Unloaded => "unloaded",
            Stage::Loaded => "loaded",
            Stage::Computed => "computed",
            Stage::Classified => "classified",
            Stage::Serialized => "serialized",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// RosterProcessor
// ---------------------------------------------------------------------------

/// One grading run: load → compute statistics → classify → serialize.
#[derive(Debug, Clone)]
pub struct RosterProcessor {
    stage: Stage,
    records: Vec<Record>,
    stats: Option<Statistics>,
    annotated: Vec<AnnotatedRecord>,
    distribution: GradeDistribution,
    groups: GradeGroups,
}

impl Default for RosterProcessor {
    fn default() -> Self {
        Self {
            stage: Stage::Unloaded,
            records: Vec::new(),
            stats: None,
            annotated: Vec::new(),
            distribution: GradeDistribution::new(),
            groups: GradeGroups::new(),
        }
    }
}

impl RosterProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Transition guard: `operation` may only run at exactly `expected`.
    fn require(&self, operation: &'static str, expected: Stage) -> GradeResult<()> {
        if self.stage != expected {
            return Err(GradeError::InvalidState {
                operation,
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }

    /// View guard: data produced by `expected` stays readable afterwards.
    fn require_at_least(&self, operation: &'static str, expected: Stage) -> GradeResult<()> {
        if self.stage < expected {
            return Err(GradeError::InvalidState {
                operation,
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }

    // -- transitions --

    /// Parse the roster. The processor stays unloaded if parsing fails.
    pub fn load<R: Read>(&mut self, input: R) -> GradeResult<()> {
        self.require("load", Stage::Unloaded)?;
        self.records = loader::parse(input)?;
        self.stage = Stage::Loaded;
        log::info!("Loaded roster with {} students", self.records.len());
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> GradeResult<()> {
        self.require("load", Stage::Unloaded)?;
        self.load(File::open(path)?)
    }

    pub fn compute_statistics(&mut self) -> GradeResult<Statistics> {
        self.require("compute statistics", Stage::Loaded)?;
        let stats = compute_statistics(&self.records)?;
        log::debug!(
            "mean = {:.4}, stddev = {:.4} over {} students",
            stats.mean,
            stats.stddev,
            stats.count
        );
        self.stats = Some(stats);
        self.stage = Stage::Computed;
        Ok(stats)
    }

    /// Grade every record, then build the distribution and groups.
    pub fn classify(&mut self) -> GradeResult<()> {
        self.require("classify", Stage::Computed)?;
        let stats = self.statistics()?;

        self.annotated = self
            .records
            .iter()
            .map(|r| AnnotatedRecord {
                record: r.clone(),
                grade: classify(r.score, &stats),
            })
            .collect();
        for rec in &self.annotated {
            log::debug!("{rec}");
        }

        let (distribution, groups) = group(&self.annotated);
        self.distribution = distribution;
        self.groups = groups;
        self.stage = Stage::Classified;
        Ok(())
    }

    /// Render the output file contents. Terminal: a roster is serialized once.
    pub fn serialize(&mut self) -> GradeResult<String> {
        self.require("serialize", Stage::Classified)?;
        let text = serialize(&self.annotated);
        self.stage = Stage::Serialized;
        Ok(text)
    }

    // -- read-only views --

    #[cfg(test)]
    pub fn records(&self) -> GradeResult<&[Record]> {
        self.require_at_least("read records", Stage::Loaded)?;
        Ok(&self.records)
    }

    pub fn statistics(&self) -> GradeResult<Statistics> {
        self.require_at_least("read statistics", Stage::Computed)?;
        self.stats.ok_or(GradeError::InvalidState {
            operation: "read statistics",
            expected: Stage::Computed,
            actual: self.stage,
        })
    }

    #[cfg(test)]
    pub fn annotated(&self) -> GradeResult<&[AnnotatedRecord]> {
        self.require_at_least("read grades", Stage::Classified)?;
        Ok(&self.annotated)
    }

    pub fn distribution(&self) -> GradeResult<&GradeDistribution> {
        self.require_at_least("read distribution", Stage::Classified)?;
        Ok(&self.distribution)
    }

    pub fn groups(&self) -> GradeResult<&GradeGroups> {
        self.require_at_least("read groups", Stage::Classified)?;
        Ok(&self.groups)
    }

    /// Students holding `grade`, in input order.
    pub fn lookup(&self, grade: Grade) -> GradeResult<&[AnnotatedRecord]> {
        Ok(lookup(self.groups()?, grade))
    }
}

// ---------------------------------------------------------------------------
// Whole-file pipeline
// ---------------------------------------------------------------------------

/// Grade `input` and write the annotated roster to `output`.
///
/// The output is rendered before the file is created, so any failure up to
/// that point leaves no output file behind.
pub fn grade_file(input: &Path, output: &Path) -> GradeResult<RosterProcessor> {
    let mut processor = RosterProcessor::new();
    processor.load_file(input)?;
    processor.compute_statistics()?;
    processor.classify()?;
    let text = processor.serialize()?;

    save_file(output, &text)?;
    log::info!("Results saved to {}", output.display());
    Ok(processor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "Name,Marks\nAlice,90\nBob,70\nCarol,50\n";

    fn classified() -> RosterProcessor {
        let mut p = RosterProcessor::new();
        p.load(ROSTER.as_bytes()).unwrap();
        p.compute_statistics().unwrap();
        p.classify().unwrap();
        p
    }

    #[test]
    fn runs_all_stages_in_order() {
        let mut p = classified();
        assert_eq!(p.stage(), Stage::Classified);
        assert_eq!(p.records().unwrap().len(), 3);

        let grades: Vec<Grade> = p.annotated().unwrap().iter().map(|a| a.grade).collect();
        assert_eq!(grades, vec![Grade::APlus, Grade::BPlus, Grade::B]);

        let dist: Vec<(Grade, usize)> =
            p.distribution().unwrap().iter().map(|(g, n)| (*g, *n)).collect();
        assert_eq!(dist, vec![(Grade::APlus, 1), (Grade::BPlus, 1), (Grade::B, 1)]);

        let text = p.serialize().unwrap();
        assert_eq!(
            text,
            "Name, Marks, Grade\nAlice, 90.0, A+\nBob, 70.0, B+\nCarol, 50.0, B\n"
        );
        assert_eq!(p.stage(), Stage::Serialized);

        // Views stay readable after the terminal stage.
        assert_eq!(p.lookup(Grade::B).unwrap()[0].name(), "Carol");
    }

    #[test]
    fn stages_out_of_order_are_rejected() {
        let mut p = RosterProcessor::new();
        assert!(matches!(
            p.compute_statistics(),
            Err(GradeError::InvalidState {
                expected: Stage::Loaded,
                actual: Stage::Unloaded,
                ..
            })
        ));
        assert!(matches!(p.classify(), Err(GradeError::InvalidState { .. })));
        assert!(matches!(p.serialize(), Err(GradeError::InvalidState { .. })));
        assert!(matches!(p.statistics(), Err(GradeError::InvalidState { .. })));

        p.load(ROSTER.as_bytes()).unwrap();
        assert!(matches!(p.load(ROSTER.as_bytes()), Err(GradeError::InvalidState { .. })));
        assert!(matches!(p.classify(), Err(GradeError::InvalidState { .. })));
        assert!(matches!(p.lookup(Grade::O), Err(GradeError::InvalidState { .. })));
    }

    #[test]
    fn serialized_is_terminal() {
        let mut p = classified();
        p.serialize().unwrap();
        assert!(matches!(
            p.serialize(),
            Err(GradeError::InvalidState {
                actual: Stage::Serialized,
                ..
            })
        ));
    }

    #[test]
    fn failed_parse_leaves_processor_unloaded() {
        let mut p = RosterProcessor::new();
        let err = p.load("Name,Marks\nOnlyOneField\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GradeError::Parse { .. }));
        assert_eq!(p.stage(), Stage::Unloaded);
    }

    #[test]
    fn empty_roster_stops_at_statistics() {
        let mut p = RosterProcessor::new();
        p.load("Name,Marks\n".as_bytes()).unwrap();
        assert!(matches!(p.compute_statistics(), Err(GradeError::EmptyInput)));
        assert_eq!(p.stage(), Stage::Loaded);
    }

    #[test]
    fn grade_file_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("roster.csv");
        let output = dir.path().join("grades_output.csv");
        std::fs::write(&input, ROSTER).unwrap();

        let p = grade_file(&input, &output).unwrap();
        assert_eq!(p.stage(), Stage::Serialized);
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("Name, Marks, Grade\n"));
        assert!(written.contains("Alice, 90.0, A+\n"));
    }

    #[test]
    fn failed_grade_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("grades_output.csv");

        let bad = dir.path().join("bad.csv");
        std::fs::write(&bad, "Name,Marks\nAlice,ninety\n").unwrap();
        assert!(grade_file(&bad, &output).is_err());

        let empty = dir.path().join("empty.csv");
        std::fs::write(&empty, "Name,Marks\n").unwrap();
        assert!(matches!(grade_file(&empty, &output), Err(GradeError::EmptyInput)));

        let missing = dir.path().join("missing.csv");
        assert!(matches!(grade_file(&missing, &output), Err(GradeError::Io(_))));

        assert!(!output.exists());
    }
}
