//! Converts between different morphological feature systems.
//!
//! * For CELEX, see the CELEX English manual (ch. 3).
//! * For UniMorph, see the UniMorph schema documentation.
//! * For Universal Dependencies, see the UD feature inventory.
//!
//! Use [`tag_to_tag`] to retrieve actual mappings.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// One of the three morphological tagging systems the lexicon stores.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TagSystem {
    Celex,
    UniMorph,
    Ud,
}

impl std::fmt::Display for TagSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TagSystem::Celex => "CELEX",
            TagSystem::UniMorph => "UniMorph",
            TagSystem::Ud => "UD",
        };
        write!(f, "{name}")
    }
}

const SYSTEMS: [TagSystem; 3] = [TagSystem::Celex, TagSystem::UniMorph, TagSystem::Ud];

/// A row's entry for one system: either a single tag, or several tags that
/// all denote the same concept. Synonyms all map forward to the same target,
/// but only the first synonym is ever produced as a translation result.
#[derive(Clone, Copy)]
enum TagSet {
    Single(&'static str),
    Synonyms(&'static [&'static str]),
}

use TagSet::{Single, Synonyms};

struct Row {
    celex: TagSet,
    unimorph: TagSet,
    ud: TagSet,
}

impl Row {
    fn get(&self, system: TagSystem) -> TagSet {
        match system {
            TagSystem::Celex => self.celex,
            TagSystem::UniMorph => self.unimorph,
            TagSystem::Ud => self.ud,
        }
    }

    /// The CELEX tag, for error messages.
    fn name(&self) -> &'static str {
        match self.celex {
            Single(tag) => tag,
            Synonyms(tags) => tags[0],
        }
    }
}

// Hand-curated, deliberately partial: it covers core adjective, adverb, noun,
// and verb morphology and nothing else. Imperatives, first/second-person
// presents, gerunds, and the finer proper-noun gender distinctions are
// excluded because the source systems' coverage of them is inconsistent.
const ROWS: &[Row] = &[
    // Adverb.
    Row {
        celex: Single("B"),
        unimorph: Single("ADV"),
        ud: Single("ADV|_"),
    },
    // Positive adjective.
    Row {
        celex: Single("b"),
        unimorph: Single("ADJ"),
        ud: Single("ADJ|_"),
    },
    // Comparative adjective.
    Row {
        celex: Single("c"),
        unimorph: Single("ADJ;CMPR"),
        ud: Single("ADJ|Degree=Cmp"),
    },
    // Superlative adjective.
    Row {
        celex: Single("s"),
        unimorph: Single("ADJ;RL"),
        ud: Single("ADJ|Degree=Sup"),
    },
    // Infinitive.
    Row {
        celex: Single("i"),
        unimorph: Single("V;NFIN"),
        ud: Single("VERB|VerbForm=Inf"),
    },
    // Present participle.
    Row {
        celex: Single("pe"),
        unimorph: Single("V.PTCP;PRS"),
        ud: Single("VERB|Tense=Pres|VerbForm=Part"),
    },
    // Past participle.
    Row {
        celex: Single("pa"),
        unimorph: Single("V.PTCP;PST"),
        ud: Single("VERB|Tense=Past|VerbForm=Part"),
    },
    // Simple past.
    Row {
        celex: Single("a1S"),
        unimorph: Single("V;PST"),
        ud: Single("VERB|Tense=Past"),
    },
    // 3sg present.
    Row {
        celex: Single("e3S"),
        unimorph: Single("V;SG;3;PRS"),
        ud: Single("VERB|Number=Sing|Person=3|Tense=Pres"),
    },
    // Noun singular.
    Row {
        celex: Single("S"),
        unimorph: Single("N;SG"),
        ud: Synonyms(&[
            "NOUN|Number=Sing",
            "PROPN|Number=Sing",
            "PROPN|Gender=Fem|Number=Sing",
            "PROPN|Gender=Masc|Number=Sing",
        ]),
    },
    // Noun plural.
    Row {
        celex: Single("P"),
        unimorph: Single("N;PL"),
        ud: Synonyms(&[
            "NOUN|Number=Plur",
            "PROPN|Number=Plur",
            "PROPN|Gender=Fem|Number=Plur",
            "PROPN|Gender=Masc|Number=Plur",
        ]),
    },
];

fn insert(
    map: &mut BTreeMap<&'static str, &'static str>,
    from: TagSystem,
    key: &'static str,
    value: &'static str,
) {
    if let Some(previous) = map.insert(key, value)
        && previous != value
    {
        // The curated table is not supposed to contain colliding rows;
        // last write wins, as a flagged fallback.
        log::warn!("duplicate {from} tag {key:?}: {previous:?} replaced by {value:?}");
    }
}

/// Flattens the canonical rows into a single directed mapping.
fn direction(from: TagSystem, to: TagSystem) -> BTreeMap<&'static str, &'static str> {
    let mut map = BTreeMap::new();
    for row in ROWS {
        match (row.get(from), row.get(to)) {
            (Single(from_tag), Single(to_tag)) => insert(&mut map, from, from_tag, to_tag),
            // Only the first synonym is taken as the forward target.
            (Single(from_tag), Synonyms(to_tags)) => insert(&mut map, from, from_tag, to_tags[0]),
            (Synonyms(from_tags), Single(to_tag)) => {
                for &from_tag in from_tags {
                    insert(&mut map, from, from_tag, to_tag);
                }
            }
            (Synonyms(_), Synonyms(_)) => {
                unreachable!("many-to-many mapping in row {:?}", row.name())
            }
        }
    }
    map
}

static MAPS: LazyLock<BTreeMap<(TagSystem, TagSystem), BTreeMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        // First pass: a row carrying synonym lists for two systems would make
        // some direction many-to-many, which is unsupported. That is a bug in
        // the table itself, so refuse to build.
        for row in ROWS {
            let lists = SYSTEMS
                .iter()
                .filter(|&&system| matches!(row.get(system), Synonyms(_)))
                .count();
            assert!(
                lists <= 1,
                "unexpected many-to-many mapping in row {:?}",
                row.name()
            );
        }
        // Second pass: materialize the six directed flat maps.
        let mut maps = BTreeMap::new();
        for from in SYSTEMS {
            for to in SYSTEMS {
                if from != to {
                    maps.insert((from, to), direction(from, to));
                }
            }
        }
        maps
    });

/// Maps a morphological tag in one feature system to another.
///
/// Returns the tag in the target system, or `None` if the table does not
/// cover the source tag; most tags in most datasets are out of scope, so a
/// miss is routine and cheap. Asking for a same-system "translation" is a
/// caller bug and panics.
pub fn tag_to_tag(from: TagSystem, to: TagSystem, tag: &str) -> Option<&'static str> {
    assert!(from != to, "no-op mapping from {from} to {to}");
    MAPS[&(from, to)].get(tag).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adverbs_all_directions() {
        assert_eq!(
            tag_to_tag(TagSystem::Celex, TagSystem::UniMorph, "B"),
            Some("ADV")
        );
        assert_eq!(tag_to_tag(TagSystem::Celex, TagSystem::Ud, "B"), Some("ADV|_"));
        assert_eq!(
            tag_to_tag(TagSystem::UniMorph, TagSystem::Celex, "ADV"),
            Some("B")
        );
        assert_eq!(
            tag_to_tag(TagSystem::UniMorph, TagSystem::Ud, "ADV"),
            Some("ADV|_")
        );
        assert_eq!(
            tag_to_tag(TagSystem::Ud, TagSystem::Celex, "ADV|_"),
            Some("B")
        );
        assert_eq!(
            tag_to_tag(TagSystem::Ud, TagSystem::UniMorph, "ADV|_"),
            Some("ADV")
        );
    }

    #[test]
    fn test_noun_singulars() {
        // These are a bit more complicated: four UD variants collapse onto
        // one CELEX/UniMorph concept.
        assert_eq!(
            tag_to_tag(TagSystem::Celex, TagSystem::UniMorph, "S"),
            Some("N;SG")
        );
        assert_eq!(
            tag_to_tag(TagSystem::UniMorph, TagSystem::Celex, "N;SG"),
            Some("S")
        );
        for ud_tag in [
            "NOUN|Number=Sing",
            "PROPN|Number=Sing",
            "PROPN|Gender=Fem|Number=Sing",
            "PROPN|Gender=Masc|Number=Sing",
        ] {
            assert_eq!(tag_to_tag(TagSystem::Ud, TagSystem::Celex, ud_tag), Some("S"));
            assert_eq!(
                tag_to_tag(TagSystem::Ud, TagSystem::UniMorph, ud_tag),
                Some("N;SG")
            );
        }
    }

    #[test]
    fn test_verbs() {
        assert_eq!(
            tag_to_tag(TagSystem::Celex, TagSystem::Ud, "e3S"),
            Some("VERB|Number=Sing|Person=3|Tense=Pres")
        );
        assert_eq!(
            tag_to_tag(TagSystem::Ud, TagSystem::UniMorph, "VERB|Tense=Past"),
            Some("V;PST")
        );
        assert_eq!(
            tag_to_tag(TagSystem::UniMorph, TagSystem::Celex, "V.PTCP;PRS"),
            Some("pe")
        );
    }

    #[test]
    fn test_collapse_is_not_round_trippable() {
        // Forward translation into UD only ever reproduces the first listed
        // variant, even though all variants map backward to the same tag.
        assert_eq!(
            tag_to_tag(TagSystem::Celex, TagSystem::Ud, "S"),
            Some("NOUN|Number=Sing")
        );
        assert_eq!(
            tag_to_tag(TagSystem::UniMorph, TagSystem::Ud, "N;PL"),
            Some("NOUN|Number=Plur")
        );
        let forward = tag_to_tag(TagSystem::Ud, TagSystem::Celex, "PROPN|Number=Sing").unwrap();
        assert_eq!(
            tag_to_tag(TagSystem::Celex, TagSystem::Ud, forward),
            Some("NOUN|Number=Sing")
        );
    }

    #[test]
    fn test_unknown_tag_is_a_silent_miss() {
        assert_eq!(tag_to_tag(TagSystem::Celex, TagSystem::Ud, "zzz-not-a-tag"), None);
        assert_eq!(tag_to_tag(TagSystem::Ud, TagSystem::UniMorph, ""), None);
    }

    #[test]
    #[should_panic(expected = "no-op mapping")]
    fn test_same_system_is_rejected() {
        tag_to_tag(TagSystem::Celex, TagSystem::Celex, "B");
    }

    #[test]
    fn test_repeated_lookups_are_identical() {
        let first = tag_to_tag(TagSystem::Celex, TagSystem::UniMorph, "pa");
        let second = tag_to_tag(TagSystem::Celex, TagSystem::UniMorph, "pa");
        assert_eq!(first, Some("V.PTCP;PST"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_single_pairs_round_trip() {
        // Wherever both sides of a row are single tags, the forward and
        // backward maps must agree.
        for row in ROWS {
            for from in SYSTEMS {
                for to in SYSTEMS {
                    if from == to {
                        continue;
                    }
                    if let (Single(from_tag), Single(to_tag)) = (row.get(from), row.get(to)) {
                        assert_eq!(tag_to_tag(from, to, from_tag), Some(to_tag));
                        assert_eq!(tag_to_tag(to, from, to_tag), Some(from_tag));
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_row_covered_in_every_direction() {
        for row in ROWS {
            for from in SYSTEMS {
                for to in SYSTEMS {
                    if from == to {
                        continue;
                    }
                    let from_tags: Vec<&str> = match row.get(from) {
                        Single(tag) => vec![tag],
                        Synonyms(tags) => tags.to_vec(),
                    };
                    for tag in from_tags {
                        assert!(
                            tag_to_tag(from, to, tag).is_some(),
                            "{from} tag {tag:?} has no {to} mapping"
                        );
                    }
                }
            }
        }
    }
}
