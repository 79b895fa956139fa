use std::fmt;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Grade – one rung of the ladder
// ---------------------------------------------------------------------------

/// Letter grade assigned from a score's distance to the class mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    O,
    APlus,
    A,
    BPlus,
    B,
    Fail,
}

impl Grade {
    /// Every grade, best first.
    pub const ALL: [Grade; 6] = [
        Grade::O,
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::Fail,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::Fail => "Fail",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record / AnnotatedRecord – one roster row
// ---------------------------------------------------------------------------

/// A student row as read from the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub score: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// A [`Record`] with the grade it was classified into.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    pub record: Record,
    pub grade: Grade,
}

impl AnnotatedRecord {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn score(&self) -> f64 {
        self.record.score
    }
}

impl fmt::Display for AnnotatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Marks: {}, Grade: {}",
            self.record.name,
            format_score(self.record.score),
            self.grade
        )
    }
}

/// Integral scores keep one decimal (`90.0`); anything else uses the
/// shortest representation that parses back to the same value.
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Mean and population standard deviation of a loaded roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
}

/// Grade → number of students, in first-encounter order.
pub type GradeDistribution = IndexMap<Grade, usize>;

/// Grade → students with that grade, in input order.
pub type GradeGroups = IndexMap<Grade, Vec<AnnotatedRecord>>;
