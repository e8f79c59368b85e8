//! Parser for the Apertium UDLexicons English lexicon (CoNLL-UL format).
//!
//! Each line carries an index, wordform, lemma, UPOS, and a feature bundle;
//! the stored tag is the UPOS joined with the bundle by `|`, matching the
//! Universal Dependencies entries in the feature-mapping table.

use crate::ParseError;
use lexicon_utils::normalize::normalize;
use lexicon_utils::{FeatureEntry, Source};
use std::io::BufRead;

pub fn read_analyses(reader: impl BufRead) -> Result<Vec<FeatureEntry>, ParseError> {
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < 7 {
            return Err(ParseError::malformed(number, "expected at least 7 fields"));
        }
        // Skips multiword expressions, which carry a range index.
        if columns[0].starts_with("0-") {
            continue;
        }
        let wordform = normalize(columns[2]);
        let lemma = normalize(columns[3]);
        if lemma == "_" {
            continue;
        }
        let tags = format!("{}|{}", columns[4], columns[6]);
        entries.push(FeatureEntry {
            wordform,
            source: Source::UdLexicons,
            lemma,
            tags,
        });
    }
    if entries.is_empty() {
        return Err(ParseError::NoData);
    }
    log::info!("Collected {} UDLexicon analyses", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_analyses_assembles_ud_tags() {
        let data = "\
0\tID\tdogs\tdog\tNOUN\t_\tNumber=Plur\t_\n\
0-1\tID\tof course\t_\tADV\t_\t_\t_\n\
0\tID\tof\t_\tADP\t_\t_\t_\n\
0\tID\tran\trun\tVERB\t_\tTense=Past\t_\n";
        let entries = read_analyses(Cursor::new(data)).unwrap();
        // The multiword range and the underscore lemma are both skipped.
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].wordform, "dogs");
        assert_eq!(entries[0].lemma, "dog");
        assert_eq!(entries[0].tags, "NOUN|Number=Plur");
        assert_eq!(entries[1].tags, "VERB|Tense=Past");
    }

    #[test]
    fn test_short_line_is_malformed() {
        let data = "0\tID\tdogs\tdog\n";
        assert!(matches!(
            read_analyses(Cursor::new(data)),
            Err(ParseError::Malformed { line: 1, .. })
        ));
    }
}
