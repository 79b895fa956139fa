use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use super::error::GradeResult;
use super::model::{GradeDistribution, Statistics};

/// Class-level summary exported as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
    /// Grade label → count, in first-encounter order.
    pub distribution: IndexMap<String, usize>,
}

impl Summary {
    pub fn new(stats: &Statistics, distribution: &GradeDistribution) -> Self {
        Summary {
            count: stats.count,
            mean: stats.mean,
            stddev: stats.stddev,
            distribution: distribution
                .iter()
                .map(|(grade, n)| (grade.label().to_string(), *n))
                .collect(),
        }
    }

    pub fn to_json(&self) -> GradeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> GradeResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
