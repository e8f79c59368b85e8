//! Parser for WikiPron scrape files: two-column TSV of wordform and
//! space-separated broad IPA.

use crate::ParseError;
use lexicon_utils::normalize::normalize;
use lexicon_utils::{Dialect, PronunciationEntry, PronunciationStandard, Source};
use std::io::BufRead;

pub fn read_pronunciations(
    reader: impl BufRead,
    dialect: Dialect,
) -> Result<Vec<PronunciationEntry>, ParseError> {
    let source = match dialect {
        Dialect::Uk => Source::WikiPronUk,
        Dialect::Us => Source::WikiPronUs,
    };
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some((wordform, pronunciation)) = line.split_once('\t') else {
            return Err(ParseError::malformed(number, "expected 2 tab-separated fields"));
        };
        entries.push(PronunciationEntry {
            wordform: normalize(wordform),
            dialect,
            source,
            standard: PronunciationStandard::Ipa,
            pronunciation: normalize(pronunciation),
        });
    }
    if entries.is_empty() {
        return Err(ParseError::NoData);
    }
    log::info!("Collected {} {source} pronunciations", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_pronunciations() {
        let data = "walk\tw ɔː k\nwalked\tw ɔː k t\n";
        let entries = read_pronunciations(Cursor::new(data), Dialect::Uk).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].wordform, "walk");
        assert_eq!(entries[0].pronunciation, "w ɔː k");
        assert_eq!(entries[0].source, Source::WikiPronUk);
        assert_eq!(entries[0].standard, PronunciationStandard::Ipa);
    }

    #[test]
    fn test_dialect_selects_source() {
        let data = "walk\tw ɑ k\n";
        let entries = read_pronunciations(Cursor::new(data), Dialect::Us).unwrap();
        assert_eq!(entries[0].source, Source::WikiPronUs);
        assert_eq!(entries[0].dialect, Dialect::Us);
    }

    #[test]
    fn test_missing_tab_is_malformed() {
        assert!(matches!(
            read_pronunciations(Cursor::new("walk w ɔː k\n"), Dialect::Uk),
            Err(ParseError::Malformed { line: 1, .. })
        ));
    }
}
