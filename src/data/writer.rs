use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::GradeResult;
use super::model::{format_score, AnnotatedRecord};

pub const OUTPUT_HEADER: &str = "Name, Marks, Grade";

/// Render annotated rows in input order under the `Name, Marks, Grade` header.
///
/// Names are written verbatim; a name containing a comma yields a row with
/// an extra column.
pub fn serialize(annotated: &[AnnotatedRecord]) -> String {
    let mut out = String::with_capacity(32 * (annotated.len() + 1));
    out.push_str(OUTPUT_HEADER);
    out.push('\n');
    for rec in annotated {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{}, {}, {}",
            rec.name(),
            format_score(rec.score()),
            rec.grade
        );
    }
    out
}

/// Write already-rendered output to `path`, replacing any existing file.
pub fn save_file(path: &Path, contents: &str) -> GradeResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse;
    use crate::data::model::{Grade, Record};

    fn sample() -> Vec<AnnotatedRecord> {
        vec![
            AnnotatedRecord {
                record: Record::new("Alice", 90.0),
                grade: Grade::APlus,
            },
            AnnotatedRecord {
                record: Record::new("Bob", 70.25),
                grade: Grade::BPlus,
            },
            AnnotatedRecord {
                record: Record::new("Carol", 50.0),
                grade: Grade::B,
            },
        ]
    }

    #[test]
    fn writes_header_then_rows_in_input_order() {
        let text = serialize(&sample());
        assert_eq!(
            text,
            "Name, Marks, Grade\nAlice, 90.0, A+\nBob, 70.25, B+\nCarol, 50.0, B\n"
        );
    }

    #[test]
    fn empty_roster_is_header_only() {
        assert_eq!(serialize(&[]), "Name, Marks, Grade\n");
    }

    #[test]
    fn output_parses_back_to_the_same_records() {
        let annotated = sample();
        let reparsed = parse(serialize(&annotated).as_bytes()).unwrap();
        let original: Vec<Record> = annotated.into_iter().map(|a| a.record).collect();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn save_file_writes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_file(&path, "Name, Marks, Grade\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Name, Marks, Grade\n");
    }
}
