//! Reader for the `id,x,y,value` snapshot tables.
//!
//! Every world and resource snapshot shares one layout: a header row
//! followed by comma-separated rows of `id, x, y, value`. The id column is
//! ignored. Blank lines are skipped.

use std::path::Path;

use seabed_types::Coord;

use crate::error::WorldError;

/// One parsed data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Row {
    /// 1-indexed line number in the source file.
    pub line: usize,
    /// Cell the row addresses.
    pub at: Coord,
    /// Raw value column, trimmed. May be empty.
    pub value: String,
}

/// Read every data row of a snapshot table.
///
/// Rows whose coordinates fall outside `width x height` are rejected.
pub(crate) fn read_rows(path: &Path, width: usize, height: usize) -> Result<Vec<Row>, WorldError> {
    let contents = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(path, &contents, width, height)
}

fn parse_rows(
    path: &Path,
    contents: &str,
    width: usize,
    height: usize,
) -> Result<Vec<Row>, WorldError> {
    let mut lines = contents.lines().enumerate();
    if lines.next().is_none() {
        return Err(WorldError::parse(path, 0, "missing header row"));
    }

    let mut rows = Vec::new();
    for (index, raw) in lines {
        let line = index.saturating_add(1);
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        let [_id, x, y, value] = fields.as_slice() else {
            return Err(WorldError::parse(
                path,
                line,
                format!("expected 4 columns, found {}", fields.len()),
            ));
        };

        let x = parse_axis(path, line, "x", x)?;
        let y = parse_axis(path, line, "y", y)?;
        if x >= width || y >= height {
            return Err(WorldError::parse(
                path,
                line,
                format!("cell ({x}, {y}) outside {width}x{height} grid"),
            ));
        }

        rows.push(Row {
            line,
            at: Coord::new(x, y),
            value: (*value).to_owned(),
        });
    }
    Ok(rows)
}

fn parse_axis(path: &Path, line: usize, name: &str, raw: &str) -> Result<usize, WorldError> {
    raw.parse::<usize>()
        .map_err(|e| WorldError::parse(path, line, format!("invalid {name} coordinate {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Vec<Row>, WorldError> {
        parse_rows(Path::new("test.csv"), contents, 4, 4)
    }

    #[test]
    fn skips_header_and_blank_lines() {
        let rows = parse("id,x,y,value\n0,1,2,3.5\n\n1,3,3,\n");
        assert!(rows.is_ok());
        let rows = rows.ok().unwrap_or_default();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.first().map(|r| (r.line, r.at)), Some((2, Coord::new(1, 2))));
        assert_eq!(rows.get(1).map(|r| r.value.as_str()), Some(""));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let rows = parse("id,x,y,value\r\n0,0,0,1\r\n");
        let rows = rows.ok().unwrap_or_default();
        assert_eq!(rows.first().map(|r| r.value.as_str()), Some("1"));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse("id,x,y,value\n0,1,2\n");
        assert!(matches!(err, Err(WorldError::Parse { line: 2, .. })));
    }

    #[test]
    fn rejects_negative_coordinate() {
        let err = parse("id,x,y,value\n0,-1,2,0\n");
        assert!(matches!(err, Err(WorldError::Parse { line: 2, .. })));
    }

    #[test]
    fn rejects_out_of_bounds_cell() {
        let err = parse("id,x,y,value\n0,4,0,0\n");
        assert!(matches!(err, Err(WorldError::Parse { .. })));
    }

    #[test]
    fn rejects_empty_file() {
        assert!(matches!(parse(""), Err(WorldError::Parse { line: 0, .. })));
    }
}
