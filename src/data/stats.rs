use super::error::{GradeError, GradeResult};
use super::model::{Grade, Record, Statistics};

// ---------------------------------------------------------------------------
// Aggregate statistics
// ---------------------------------------------------------------------------

/// Mean and population standard deviation (divides by `n`, not `n - 1`).
pub fn compute_statistics(records: &[Record]) -> GradeResult<Statistics> {
    if records.is_empty() {
        return Err(GradeError::EmptyInput);
    }
    let n = records.len() as f64;

    let mean = records.iter().map(|r| r.score).sum::<f64>() / n;
    let variance = records
        .iter()
        .map(|r| (r.score - mean).powi(2))
        .sum::<f64>()
        / n;

    Ok(Statistics {
        count: records.len(),
        mean,
        stddev: variance.sqrt(),
    })
}

// ---------------------------------------------------------------------------
// Grade ladder
// ---------------------------------------------------------------------------

/// Rungs checked top-down: a score earns the grade of the first rung whose
/// threshold `mean + k * stddev` it reaches.
const LADDER: [(f64, Grade); 5] = [
    (2.0, Grade::O),
    (1.2, Grade::APlus),
    (0.5, Grade::A),
    (-0.2, Grade::BPlus),
    (-1.5, Grade::B),
];

/// Classify a score against the class statistics.
///
/// | Threshold       | Grade |
/// |-----------------|-------|
/// | >= mean + 2.0σ  | O     |
/// | >= mean + 1.2σ  | A+    |
/// | >= mean + 0.5σ  | A     |
/// | >= mean - 0.2σ  | B+    |
/// | >= mean - 1.5σ  | B     |
/// | otherwise       | Fail  |
pub fn classify(score: f64, stats: &Statistics) -> Grade {
    LADDER
        .iter()
        .find(|(k, _)| score >= stats.mean + k * stats.stddev)
        .map(|&(_, grade)| grade)
        .unwrap_or(Grade::Fail)
}
