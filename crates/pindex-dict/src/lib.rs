//! Parsing for the flat pinyin dictionary format.
//!
//! One entry per line:
//!
//! ```text
//! U+3007: líng,yuán,xīng  # 〇
//! ```
//!
//! Blank lines and `#` comment lines are ignored. Malformed lines are
//! skipped, never fatal; only I/O failures abort a read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pindex_pinyin::normalize_syllable;

/// One parsed source line, readings still tone-marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// `U+XXXX` label; carried for diagnostics, never persisted.
    pub code_point: String,
    pub readings: Vec<String>,
    pub hanzi: String,
}

/// One row destined for the lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRow {
    pub pinyin: String,
    pub hanzi: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DictionaryEntry {
    /// Expand into rows, one per reading that survives normalization.
    ///
    /// Every row carries the entry's full glyph field, so an entry with
    /// three readings yields three rows sharing one `hanzi` value.
    pub fn rows(&self) -> Vec<MapRow> {
        self.readings
            .iter()
            .map(|r| normalize_syllable(r))
            .filter(|p| !p.is_empty())
            .map(|pinyin| MapRow {
                pinyin,
                hanzi: self.hanzi.clone(),
            })
            .collect()
    }
}

/// Parse one source line into an entry.
///
/// Returns `None` for blank lines, comment lines, and lines missing the
/// `#` glyph delimiter or the `:` after the code point label.
pub fn parse_line(line: &str) -> Option<DictionaryEntry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (data, rest) = line.split_once('#')?;
    // glyph field runs to the next '#', if any
    let hanzi = rest.split_once('#').map_or(rest, |(glyph, _)| glyph).trim();
    if hanzi.is_empty() {
        return None;
    }

    let (code_point, readings) = data.split_once(':')?;
    let readings = readings
        .split(',')
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();

    Some(DictionaryEntry {
        code_point: code_point.trim().to_string(),
        readings,
        hanzi: hanzi.to_string(),
    })
}

/// Stream the source file and collect every row to insert.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<MapRow>, DictError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Some(entry) => rows.extend(entry.rows()),
            None => {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    tracing::debug!("skipping malformed line {}", idx + 1);
                    skipped += 1;
                }
            }
        }
    }

    if skipped > 0 {
        tracing::debug!("{} malformed lines skipped", skipped);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_for(line: &str) -> Vec<MapRow> {
        parse_line(line).map(|e| e.rows()).unwrap_or_default()
    }

    #[test]
    fn multi_reading_entry_expands_to_one_row_per_reading() {
        let rows = rows_for("U+3007: líng,yuán,xīng  # 〇");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], MapRow { pinyin: "ling".into(), hanzi: "〇".into() });
        assert_eq!(rows[1], MapRow { pinyin: "yuan".into(), hanzi: "〇".into() });
        assert_eq!(rows[2], MapRow { pinyin: "xing".into(), hanzi: "〇".into() });
    }

    #[test]
    fn single_reading_entry() {
        let rows = rows_for("U+4E00: yī  # 一");
        assert_eq!(rows, vec![MapRow { pinyin: "yi".into(), hanzi: "一".into() }]);
    }

    #[test]
    fn code_point_label_is_carried() {
        let entry = parse_line("U+4E00: yī  # 一").unwrap();
        assert_eq!(entry.code_point, "U+4E00");
        assert_eq!(entry.readings, vec!["yī"]);
        assert_eq!(entry.hanzi, "一");
    }

    #[test]
    fn comment_and_blank_lines_yield_nothing() {
        assert_eq!(parse_line("# just a comment"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn malformed_lines_yield_nothing() {
        // no glyph delimiter
        assert_eq!(parse_line("U+4E00: yī"), None);
        // no colon before the readings
        assert_eq!(parse_line("U+4E00 yī # 一"), None);
        // glyph field empty after trimming
        assert_eq!(parse_line("U+4E00: yī #   "), None);
    }

    #[test]
    fn glyph_field_stops_at_a_second_delimiter() {
        let entry = parse_line("U+4E00: yī  # 一 # trailing note").unwrap();
        assert_eq!(entry.hanzi, "一");
    }

    #[test]
    fn unnormalizable_reading_produces_no_row() {
        let rows = rows_for("U+0030: 0,líng  # 0");
        assert_eq!(rows, vec![MapRow { pinyin: "ling".into(), hanzi: "0".into() }]);
    }

    #[test]
    fn empty_list_segments_are_dropped() {
        let rows = rows_for("U+4E00: yī,,  # 一");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn read_rows_streams_a_whole_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinyin.txt");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "# source dictionary").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "U+3007: líng,yuán,xīng  # 〇").unwrap();
        writeln!(f, "U+4E00: yī  # 一").unwrap();
        writeln!(f, "not a valid line").unwrap();
        drop(f);

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].pinyin, "yi");
    }

    #[test]
    fn read_rows_propagates_missing_file() {
        assert!(read_rows("does/not/exist.txt").is_err());
    }
}
