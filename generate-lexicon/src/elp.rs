//! Parser for the English Lexicon Project morphological annotations
//! (`ELP.csv`): per-wordform segmentations and morph counts.

use crate::ParseError;
use lexicon_utils::normalize::normalize;
use lexicon_utils::{SegmentationEntry, Source};
use std::io::Read;

#[derive(Debug, serde::Deserialize)]
struct ElpRow {
    #[serde(rename = "Word")]
    word: String,
    #[serde(rename = "MorphSp")]
    morph_sp: String,
    #[serde(rename = "NMorph")]
    nmorph: String,
}

pub fn read_segmentations(reader: impl Read) -> Result<Vec<SegmentationEntry>, ParseError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for row in csv_reader.deserialize() {
        let row: ElpRow = row?;
        // Skips lines without a morphological analysis.
        if row.morph_sp == "NULL" || row.morph_sp.is_empty() {
            continue;
        }
        let Ok(nmorph) = row.nmorph.parse::<u32>() else {
            log::debug!(
                "Ignoring analysis with unparseable morph count: {} ({:?})",
                row.word,
                row.nmorph
            );
            continue;
        };
        entries.push(SegmentationEntry {
            wordform: normalize(&row.word),
            source: Source::Elp,
            nmorph,
            segmentation: row.morph_sp,
        });
    }
    if entries.is_empty() {
        return Err(ParseError::NoData);
    }
    log::info!("Collected {} ELP analyses", entries.len());
    Ok(entries)
}
