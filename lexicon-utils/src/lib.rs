pub mod features;
pub mod normalize;
pub mod xsampa;

use serde::{Deserialize, Serialize};

/// A data source contributing rows to the lexicon.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
pub enum Source {
    #[serde(rename = "CELEX")]
    Celex,
    #[serde(rename = "UDLexicons")]
    UdLexicons,
    #[serde(rename = "UniMorph")]
    UniMorph,
    #[serde(rename = "WikiPron UK")]
    WikiPronUk,
    #[serde(rename = "WikiPron US")]
    WikiPronUs,
    #[serde(rename = "ELP")]
    Elp,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Source::Celex => "CELEX",
            Source::UdLexicons => "UDLexicons",
            Source::UniMorph => "UniMorph",
            Source::WikiPronUk => "WikiPron UK",
            Source::WikiPronUs => "WikiPron US",
            Source::Elp => "ELP",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Dialect {
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "US")]
    Us,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Uk => write!(f, "UK"),
            Dialect::Us => write!(f, "US"),
        }
    }
}

/// Transcription standard a pronunciation is written in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum PronunciationStandard {
    #[serde(rename = "DISC")]
    Disc,
    #[serde(rename = "IPA")]
    Ipa,
}

impl std::fmt::Display for PronunciationStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PronunciationStandard::Disc => write!(f, "DISC"),
            PronunciationStandard::Ipa => write!(f, "IPA"),
        }
    }
}

/// A raw wordform frequency from one corpus.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FrequencyEntry {
    pub wordform: String,
    pub source: Source,
    pub raw_frequency: u64,
    /// Frequency per million tokens, filled in once the source total is known.
    pub freq_per_million: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PronunciationEntry {
    pub wordform: String,
    pub dialect: Dialect,
    pub source: Source,
    pub standard: PronunciationStandard,
    pub pronunciation: String,
}

/// A morphological analysis: a wordform, its lemma, and a tag string in the
/// source's native tagging system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeatureEntry {
    pub wordform: String,
    pub source: Source,
    pub lemma: String,
    pub tags: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentationEntry {
    pub wordform: String,
    pub source: Source,
    pub nmorph: u32,
    pub segmentation: String,
}

/// The in-memory lexicon the source parsers populate and the export reads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lexicon {
    pub frequencies: Vec<FrequencyEntry>,
    pub pronunciations: Vec<PronunciationEntry>,
    pub features: Vec<FeatureEntry>,
    pub segmentations: Vec<SegmentationEntry>,
}

impl Lexicon {
    /// Sums raw frequencies for one source.
    pub fn total_frequency(&self, source: Source) -> u64 {
        self.frequencies
            .iter()
            .filter(|entry| entry.source == source)
            .map(|entry| entry.raw_frequency)
            .sum()
    }

    /// Fills in per-million frequencies for one source from its total count,
    /// rounded to two decimal places.
    pub fn fill_freq_per_million(&mut self, source: Source) {
        let total = self.total_frequency(source);
        if total == 0 {
            return;
        }
        for entry in self
            .frequencies
            .iter_mut()
            .filter(|entry| entry.source == source)
        {
            let per_million = entry.raw_frequency as f64 * 1_000_000.0 / total as f64;
            entry.freq_per_million = (per_million * 100.0).round() / 100.0;
        }
    }

    /// The sources with at least one row of any kind, in display order.
    pub fn sources(&self) -> Vec<Source> {
        let mut sources: Vec<Source> = self
            .frequencies
            .iter()
            .map(|entry| entry.source)
            .chain(self.pronunciations.iter().map(|entry| entry.source))
            .chain(self.features.iter().map(|entry| entry.source))
            .chain(self.segmentations.iter().map(|entry| entry.source))
            .collect();
        sources.sort();
        sources.dedup();
        sources
    }
}
