use std::io::{BufRead, BufReader, Read};

use super::error::{GradeError, GradeResult};
use super::model::Record;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse a roster.
///
/// Layout: the first physical line is a header (skipped, never validated),
/// every following line is `name,score`. Fields are split on plain commas
/// with no quoting, both are trimmed and anything after the second field is
/// ignored. A blank line is a row with one field. The first malformed row
/// aborts the load.
pub fn parse<R: Read>(input: R) -> GradeResult<Vec<Record>> {
    let mut lines = BufReader::new(input).lines();

    // Header.
    if lines.next().transpose()?.is_none() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        records.push(parse_row(&line, i as u64 + 2)?);
    }
    Ok(records)
}

fn parse_row(row: &str, line: u64) -> GradeResult<Record> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();

    let [name, score, ..] = fields.as_slice() else {
        return Err(GradeError::Parse {
            line,
            reason: format!("expected `name,score`, found {} field(s)", fields.len()),
        });
    };

    let score = score.parse::<f64>().map_err(|_| GradeError::Parse {
        line,
        reason: format!("'{score}' is not a number"),
    })?;

    Ok(Record::new(*name, score))
}
