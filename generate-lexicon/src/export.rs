//! Assembles the flat export from an in-memory lexicon: either "long"
//! tab-separated rows (one per stored record) or a "wide" JSON object keyed
//! by wordform.
//!
//! Cross-system tag columns are computed on demand through
//! [`lexicon_utils::features::tag_to_tag`]; a lookup miss leaves the cell
//! empty rather than failing, since most tags fall outside the mapping
//! table.

use indexmap::IndexMap;
use itertools::Itertools;
use lexicon_utils::features::{self, TagSystem};
use lexicon_utils::{Lexicon, Source};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Tab-separated values, one row per stored record.
    Long,
    /// JSON keyed by wordform, aggregating every selected value.
    Wide,
}

/// The columns a user can select for export. Declaration order is column
/// order in the long format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Field {
    RawFrequency,
    FreqPerMillion,
    Pronunciation,
    CelexTags,
    UdTags,
    UniMorphTags,
    Segmentation,
    Nmorph,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::RawFrequency,
        Field::FreqPerMillion,
        Field::Pronunciation,
        Field::CelexTags,
        Field::UdTags,
        Field::UniMorphTags,
        Field::Segmentation,
        Field::Nmorph,
    ];

    fn column(self) -> &'static str {
        match self {
            Field::RawFrequency => "raw_frequency",
            Field::FreqPerMillion => "freq_per_million",
            Field::Pronunciation => "pronunciation",
            Field::CelexTags => "celex_tags",
            Field::UdTags => "ud_tags",
            Field::UniMorphTags => "um_tags",
            Field::Segmentation => "segmentation",
            Field::Nmorph => "nmorph",
        }
    }

    /// The tagging system a tag column asks for, if it is a tag column.
    fn tag_target(self) -> Option<TagSystem> {
        match self {
            Field::CelexTags => Some(TagSystem::Celex),
            Field::UdTags => Some(TagSystem::Ud),
            Field::UniMorphTags => Some(TagSystem::UniMorph),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ExportRequest {
    pub sources: Vec<Source>,
    pub fields: BTreeSet<Field>,
    pub format: ExportFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("no sources or fields selected")]
    EmptySelection,
}

/// The tagging system a feature source stores its tags in.
fn native_system(source: Source) -> Option<TagSystem> {
    match source {
        Source::Celex => Some(TagSystem::Celex),
        Source::UniMorph => Some(TagSystem::UniMorph),
        Source::UdLexicons => Some(TagSystem::Ud),
        _ => None,
    }
}

struct Record {
    wordform: String,
    source: Source,
    cells: IndexMap<Field, Value>,
}

/// Flattens the lexicon into one record per stored row, carrying only the
/// selected fields.
fn records(lexicon: &Lexicon, request: &ExportRequest) -> Vec<Record> {
    let fields = &request.fields;
    let mut records = Vec::new();
    for &source in &request.sources {
        for entry in lexicon
            .frequencies
            .iter()
            .filter(|entry| entry.source == source)
        {
            let mut cells = IndexMap::new();
            if fields.contains(&Field::RawFrequency) {
                cells.insert(Field::RawFrequency, json!(entry.raw_frequency));
            }
            if fields.contains(&Field::FreqPerMillion) {
                cells.insert(Field::FreqPerMillion, json!(entry.freq_per_million));
            }
            if !cells.is_empty() {
                records.push(Record {
                    wordform: entry.wordform.clone(),
                    source,
                    cells,
                });
            }
        }
        if fields.contains(&Field::Pronunciation) {
            for entry in lexicon
                .pronunciations
                .iter()
                .filter(|entry| entry.source == source)
            {
                records.push(Record {
                    wordform: entry.wordform.clone(),
                    source,
                    cells: IndexMap::from([(
                        Field::Pronunciation,
                        json!(entry.pronunciation),
                    )]),
                });
            }
        }
        if let Some(native) = native_system(source)
            && fields.iter().any(|field| field.tag_target().is_some())
        {
            for entry in lexicon
                .features
                .iter()
                .filter(|entry| entry.source == source)
            {
                let mut cells = IndexMap::new();
                for &field in fields {
                    let Some(target) = field.tag_target() else {
                        continue;
                    };
                    let translated = if target == native {
                        Some(entry.tags.as_str())
                    } else {
                        features::tag_to_tag(native, target, &entry.tags)
                    };
                    // A miss just omits the cell; the record itself is kept,
                    // so the long writer still emits the row with restvals.
                    if let Some(tags) = translated {
                        cells.insert(field, json!(tags));
                    }
                }
                records.push(Record {
                    wordform: entry.wordform.clone(),
                    source,
                    cells,
                });
            }
        }
        for entry in lexicon
            .segmentations
            .iter()
            .filter(|entry| entry.source == source)
        {
            let mut cells = IndexMap::new();
            if fields.contains(&Field::Segmentation) {
                cells.insert(Field::Segmentation, json!(entry.segmentation));
            }
            if fields.contains(&Field::Nmorph) {
                cells.insert(Field::Nmorph, json!(entry.nmorph));
            }
            if !cells.is_empty() {
                records.push(Record {
                    wordform: entry.wordform.clone(),
                    source,
                    cells,
                });
            }
        }
    }
    records
}

fn check_selection(request: &ExportRequest) -> Result<(), ExportError> {
    if request.sources.is_empty() || request.fields.is_empty() {
        return Err(ExportError::EmptySelection);
    }
    Ok(())
}

/// Writes the long format: a TSV whose header carries only the selected
/// columns, with `NA` for cells a record does not populate.
pub fn write_long_tsv(
    lexicon: &Lexicon,
    request: &ExportRequest,
    mut sink: impl Write,
) -> Result<(), ExportError> {
    check_selection(request)?;
    let selected: Vec<Field> = request.fields.iter().copied().collect();
    let header = ["wordform", "source"]
        .into_iter()
        .chain(selected.iter().map(|field| field.column()))
        .join("\t");
    writeln!(sink, "{header}")?;
    for record in records(lexicon, request) {
        let mut row = vec![record.wordform.clone(), record.source.to_string()];
        for field in &selected {
            row.push(match record.cells.get(field) {
                Some(Value::String(text)) => text.clone(),
                Some(value) => value.to_string(),
                None => "NA".to_string(),
            });
        }
        writeln!(sink, "{}", row.iter().join("\t"))?;
    }
    Ok(())
}

/// Display label for one selected value in the wide format.
fn label(source: Source, field: Field) -> String {
    match field {
        Field::RawFrequency => format!("{source} (Raw frequency)"),
        Field::FreqPerMillion => format!("{source} (Frequency per million words)"),
        Field::Pronunciation => match source {
            Source::Celex => format!("{source} (DISC)"),
            _ => format!("{source} (IPA)"),
        },
        Field::CelexTags => format!("{source} (CELEX tags)"),
        Field::UdTags => format!("{source} (Universal Dependency-style tags)"),
        Field::UniMorphTags => format!("{source} (UniMorph-style tags)"),
        Field::Segmentation => format!("{source} (Segmentation)"),
        Field::Nmorph => format!("{source} (Number of morphs)"),
    }
}

/// Writes the wide format: a JSON object keyed by wordform, where each
/// selected field contributes a labeled list of values (a wordform can carry
/// several records per source).
pub fn write_wide_json(
    lexicon: &Lexicon,
    request: &ExportRequest,
    sink: impl Write,
) -> Result<(), ExportError> {
    check_selection(request)?;
    let mut aggregated: BTreeMap<String, BTreeMap<String, Vec<Value>>> = BTreeMap::new();
    for record in records(lexicon, request) {
        for (&field, value) in &record.cells {
            aggregated
                .entry(record.wordform.clone())
                .or_default()
                .entry(label(record.source, field))
                .or_default()
                .push(value.clone());
        }
    }
    serde_json::to_writer_pretty(sink, &aggregated)?;
    Ok(())
}

pub fn write(
    lexicon: &Lexicon,
    request: &ExportRequest,
    sink: impl Write,
) -> Result<(), ExportError> {
    match request.format {
        ExportFormat::Long => write_long_tsv(lexicon, request, sink),
        ExportFormat::Wide => write_wide_json(lexicon, request, sink),
    }
}
