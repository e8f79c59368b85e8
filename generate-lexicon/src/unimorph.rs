//! Parser for the UniMorph English paradigm file.
//!
//! The file is three-column TSV: lemma, wordform, feature bundle. Paradigms
//! are separated by blank lines.

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
        let mut columns = line.split('\t');
        let (Some(lemma), Some(wordform), Some(tags), None) = (
            columns.next(),
            columns.next(),
            columns.next(),
            columns.next(),
        ) else {
            return Err(ParseError::malformed(number, "expected 3 tab-separated fields"));
        };
        // Tags are left untouched; casefolding them would break lookups
        // against the feature-mapping table ("V;PST" is not "v;pst").
        entries.push(FeatureEntry {
            wordform: normalize(wordform),
            source: Source::UniMorph,
            lemma: normalize(lemma),
            tags: tags.to_string(),
        });
    }
    if entries.is_empty() {
        return Err(ParseError::NoData);
    }
    log::info!("Collected {} UniMorph analyses", entries.len());
    Ok(entries)
}
