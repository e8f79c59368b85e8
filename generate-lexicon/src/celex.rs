//! Parsers for the CELEX2 English `.cd` files.
//!
//! CELEX is distributed under a proprietary use agreement, so the caller is
//! responsible for obtaining the archive; these functions read the extracted
//! `english/efw/efw.cd` (frequencies), `english/eml/eml.cd` (lemmas),
//! `english/emw/emw.cd` (wordforms), and `english/epw/epw.cd`
//! (pronunciations) files.

use crate::ParseError;
use lexicon_utils::normalize::normalize;
use lexicon_utils::{
    Dialect, FeatureEntry, FrequencyEntry, PronunciationEntry, PronunciationStandard, Source,
};
use std::collections::HashMap;
use std::io::BufRead;

/// Splits a single line of CELEX into its backslash-separated fields.
fn parse_row(line: &str) -> Vec<&str> {
    line.trim_end().split('\\').collect()
}

fn field<'a>(row: &[&'a str], index: usize, line: usize) -> Result<&'a str, ParseError> {
    row.get(index).copied().ok_or_else(|| {
        ParseError::malformed(line, format!("expected at least {} fields", index + 1))
    })
}

/// Reads wordform frequencies from `efw.cd`. Per-million values are left at
/// zero until the source total is known.
pub fn read_frequencies(reader: impl BufRead) -> Result<Vec<FrequencyEntry>, ParseError> {
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let row = parse_row(&line);
        let wordform = normalize(field(&row, 1, number)?);
        // Skips multiword entries.
        if wordform.contains(' ') {
            continue;
        }
        let raw_frequency = field(&row, 3, number)?
            .parse::<u64>()
            .map_err(|_| ParseError::malformed(number, "invalid frequency field"))?;
        entries.push(FrequencyEntry {
            wordform,
            source: Source::Celex,
            raw_frequency,
            freq_per_million: 0.0,
        });
    }
    if entries.is_empty() {
        return Err(ParseError::NoData);
    }
    log::info!("Collected {} CELEX frequencies", entries.len());
    Ok(entries)
}

/// Reads the lemma ID table from `eml.cd`, for resolving wordform rows.
pub fn read_lemmas(reader: impl BufRead) -> Result<HashMap<u64, String>, ParseError> {
    let mut lemmas = HashMap::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let row = parse_row(&line);
        let id = field(&row, 0, number)?
            .parse::<u64>()
            .map_err(|_| ParseError::malformed(number, "invalid lemma ID"))?;
        let lemma = normalize(field(&row, 1, number)?);
        if lemma.contains(' ') {
            continue;
        }
        lemmas.insert(id, lemma);
    }
    if lemmas.is_empty() {
        return Err(ParseError::NoData);
    }
    Ok(lemmas)
}

/// Reads morphological analyses from `emw.cd`, resolving each wordform's
/// lemma ID against the `eml.cd` table.
pub fn read_analyses(
    reader: impl BufRead,
    lemmas: &HashMap<u64, String>,
) -> Result<Vec<FeatureEntry>, ParseError> {
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let row = parse_row(&line);
        let wordform = normalize(field(&row, 1, number)?);
        if wordform.contains(' ') {
            continue;
        }
        let lemma_id = field(&row, 3, number)?
            .parse::<u64>()
            .map_err(|_| ParseError::malformed(number, "invalid lemma ID"))?;
        // A few wordforms carry lemma IDs that point to nothing.
        let Some(lemma) = lemmas.get(&lemma_id) else {
            log::debug!("Ignoring wordform missing lemma ID: {wordform} ({lemma_id})");
            continue;
        };
        let tags = field(&row, 4, number)?.to_string();
        entries.push(FeatureEntry {
            wordform,
            source: Source::Celex,
            lemma: lemma.clone(),
            tags,
        });
    }
    if entries.is_empty() {
        return Err(ParseError::NoData);
    }
    log::info!("Collected {} CELEX analyses", entries.len());
    Ok(entries)
}

/// Reads DISC pronunciations from `epw.cd`.
pub fn read_pronunciations(reader: impl BufRead) -> Result<Vec<PronunciationEntry>, ParseError> {
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let row = parse_row(&line);
        let wordform = normalize(field(&row, 1, number)?);
        if wordform.contains(' ') {
            continue;
        }
        // Eliminates syllable boundaries, known to be inconsistent.
        let pronunciation = field(&row, 6, number)?.replace('-', "");
        entries.push(PronunciationEntry {
            wordform,
            dialect: Dialect::Uk,
            source: Source::Celex,
            standard: PronunciationStandard::Disc,
            pronunciation,
        });
    }
    if entries.is_empty() {
        return Err(ParseError::NoData);
    }
    log::info!("Collected {} CELEX pronunciations", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_frequencies() {
        let data = "1\\a\\6\\1016564\n2\\Aachen\\2\\1\n3\\ad hoc\\4\\12\n";
        let entries = read_frequencies(Cursor::new(data)).unwrap();
        // Multiword "ad hoc" is skipped.
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].wordform, "a");
        assert_eq!(entries[0].raw_frequency, 1016564);
        assert_eq!(entries[1].wordform, "aachen");
        assert_eq!(entries[1].source, Source::Celex);
    }

    #[test]
    fn test_read_frequencies_rejects_empty_input() {
        assert!(matches!(
            read_frequencies(Cursor::new("")),
            Err(ParseError::NoData)
        ));
    }

    #[test]
    fn test_read_frequencies_rejects_bad_count() {
        let data = "1\\a\\6\\not-a-number\n";
        assert!(matches!(
            read_frequencies(Cursor::new(data)),
            Err(ParseError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_read_analyses_resolves_lemmas() {
        let lemma_data = "19\\abandon\\28550\n20\\abandonment\\411\n";
        let lemmas = read_lemmas(Cursor::new(lemma_data)).unwrap();
        assert_eq!(lemmas[&19], "abandon");

        let wordform_data = "\
40\\abandon\\18212\\19\\i\n\
41\\abandoned\\5061\\19\\a1S\n\
42\\abandons\\91\\999\\e3S\n";
        let entries = read_analyses(Cursor::new(wordform_data), &lemmas).unwrap();
        // The row with the dangling lemma ID 999 is dropped.
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].wordform, "abandon");
        assert_eq!(entries[0].lemma, "abandon");
        assert_eq!(entries[0].tags, "i");
        assert_eq!(entries[1].tags, "a1S");
    }

    #[test]
    fn test_read_pronunciations_strips_syllable_boundaries() {
        let data = "40\\abandon\\18212\\19\\1\\P\\@-'b{n-d@n\n";
        let entries = read_pronunciations(Cursor::new(data)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pronunciation, "@'b{nd@n");
        assert_eq!(entries[0].standard, PronunciationStandard::Disc);
        assert_eq!(entries[0].dialect, Dialect::Uk);
    }
}
