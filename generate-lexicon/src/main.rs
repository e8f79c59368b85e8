use anyhow::Context;
use clap::Parser;
use generate_lexicon::export::{self, ExportFormat, ExportRequest, Field};
use generate_lexicon::{celex, elp, udlexicons, unimorph, wikipron};
use indicatif::{ProgressBar, ProgressStyle};
use lexicon_utils::{Dialect, Lexicon, Source};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Builds a multi-source English lexicon from local copies of the source
/// datasets and writes a flat export.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing extracted CELEX2 data (proprietary use agreement)
    #[arg(long)]
    celex: Option<PathBuf>,
    /// UniMorph `eng` paradigm file (CC BY-SA 2.0)
    #[arg(long)]
    unimorph: Option<PathBuf>,
    /// Apertium UDLexicons `UDLex_English-Apertium.conllul` file (GPL 3.0)
    #[arg(long)]
    udlexicons: Option<PathBuf>,
    /// WikiPron UK broad-transcription TSV (CC BY-SA 3.0 Unported)
    #[arg(long)]
    wikipron_uk: Option<PathBuf>,
    /// WikiPron US broad-transcription TSV (CC BY-SA 3.0 Unported)
    #[arg(long)]
    wikipron_us: Option<PathBuf>,
    /// ELP annotations CSV (CC BY-NC 4.0)
    #[arg(long)]
    elp: Option<PathBuf>,
    /// Export file to write
    #[arg(long, default_value = "lexicon.tsv")]
    output: PathBuf,
    /// Long rows as TSV, or wide per-wordform JSON
    #[arg(long, value_enum, default_value = "long")]
    format: ExportFormat,
    /// Sources to export (defaults to everything ingested)
    #[arg(long, value_enum, value_delimiter = ',')]
    sources: Vec<SourceArg>,
    /// Fields to export (defaults to all of them)
    #[arg(long, value_enum, value_delimiter = ',')]
    fields: Vec<Field>,
}

/// Command-line spelling of [`Source`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum SourceArg {
    Celex,
    UdLexicons,
    UniMorph,
    WikiPronUk,
    WikiPronUs,
    Elp,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Source {
        match arg {
            SourceArg::Celex => Source::Celex,
            SourceArg::UdLexicons => Source::UdLexicons,
            SourceArg::UniMorph => Source::UniMorph,
            SourceArg::WikiPronUk => Source::WikiPronUk,
            SourceArg::WikiPronUs => Source::WikiPronUs,
            SourceArg::Elp => Source::Elp,
        }
    }
}

/// Resolves the source selection: everything ingested, unless the user named
/// a subset.
fn select_sources(requested: &[SourceArg], ingested: Vec<Source>) -> Vec<Source> {
    if requested.is_empty() {
        return ingested;
    }
    let mut sources: Vec<Source> = requested.iter().map(|&arg| arg.into()).collect();
    sources.sort();
    sources.dedup();
    for source in sources.iter().filter(|source| !ingested.contains(source)) {
        log::warn!("Source {source} was requested but no data for it was read");
    }
    sources
}

fn open_with_progress(path: &Path) -> anyhow::Result<impl BufRead> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let pb = ProgressBar::new(file.metadata()?.len());
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    Ok(BufReader::new(pb.wrap_read(file)))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut lexicon = Lexicon::default();

    if let Some(celex_dir) = &args.celex {
        let frequencies =
            celex::read_frequencies(open_with_progress(&celex_dir.join("english/efw/efw.cd"))?)
                .context("Failed to read CELEX frequencies")?;
        lexicon.frequencies.extend(frequencies);
        lexicon.fill_freq_per_million(Source::Celex);

        let lemmas =
            celex::read_lemmas(open_with_progress(&celex_dir.join("english/eml/eml.cd"))?)
                .context("Failed to read CELEX lemmas")?;
        let analyses = celex::read_analyses(
            open_with_progress(&celex_dir.join("english/emw/emw.cd"))?,
            &lemmas,
        )
        .context("Failed to read CELEX analyses")?;
        lexicon.features.extend(analyses);

        let pronunciations = celex::read_pronunciations(open_with_progress(
            &celex_dir.join("english/epw/epw.cd"),
        )?)
        .context("Failed to read CELEX pronunciations")?;
        lexicon.pronunciations.extend(pronunciations);
    }

    if let Some(path) = &args.unimorph {
        let analyses = unimorph::read_analyses(open_with_progress(path)?)
            .context("Failed to read UniMorph analyses")?;
        lexicon.features.extend(analyses);
    }

    if let Some(path) = &args.udlexicons {
        let analyses = udlexicons::read_analyses(open_with_progress(path)?)
            .context("Failed to read UDLexicons analyses")?;
        lexicon.features.extend(analyses);
    }

    if let Some(path) = &args.wikipron_uk {
        let pronunciations = wikipron::read_pronunciations(open_with_progress(path)?, Dialect::Uk)
            .context("Failed to read WikiPron UK pronunciations")?;
        lexicon.pronunciations.extend(pronunciations);
    }

    if let Some(path) = &args.wikipron_us {
        let pronunciations = wikipron::read_pronunciations(open_with_progress(path)?, Dialect::Us)
            .context("Failed to read WikiPron US pronunciations")?;
        lexicon.pronunciations.extend(pronunciations);
    }

    if let Some(path) = &args.elp {
        let segmentations = elp::read_segmentations(open_with_progress(path)?)
            .context("Failed to read ELP segmentations")?;
        lexicon.segmentations.extend(segmentations);
    }

    let ingested = lexicon.sources();
    if ingested.is_empty() {
        anyhow::bail!("No data sources selected; pass at least one input path (see --help)");
    }
    let sources = select_sources(&args.sources, ingested);

    let fields = if args.fields.is_empty() {
        Field::ALL.into_iter().collect()
    } else {
        args.fields.iter().copied().collect()
    };
    let request = ExportRequest {
        sources,
        fields,
        format: args.format,
    };

    let sink = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("Failed to create {}", args.output.display()))?,
    );
    export::write(&lexicon, &request, sink).context("Failed to write export")?;
    log::info!("Wrote {}", args.output.display());
    Ok(())
}
