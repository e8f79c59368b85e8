//! X-SAMPA conversion functions for English.
//!
//! Table based on: https://en.wikipedia.org/wiki/X-SAMPA

use std::collections::BTreeMap;
use std::sync::LazyLock;

// IPA segment, X-SAMPA equivalent. Input pronunciations carry one segment
// per space-separated token, so lookup is exact per segment.
const IPA_XSAMPA_MAP: &[(&str, &str)] = &[
    ("a", "a"),
    ("b", "b"),
    ("ɓ", "b<"),
    ("c", "c"),
    ("d", "d"),
    ("ɖ", "d"),
    ("e", "e"),
    ("f", "f"),
    ("ɡ", "g"),
    ("h", "h"),
    ("i", "i"),
    ("j", "j"),
    ("k", "k"),
    ("l", "l"),
    ("ɭ", "l"),
    ("m", "m"),
    ("n", "n"),
    ("ɳ", "n"),
    ("o", "o"),
    ("p", "p"),
    ("ɸ", "p\\"),
    ("q", "q"),
    ("r", "r"),
    ("ɹ", "r\\"),
    ("ɻ", "r\\"),
    ("s", "s"),
    ("ʂ", "s"),
    ("ɕ", "s\\"),
    ("t", "t"),
    ("ʈ", "t"),
    ("u", "u"),
    ("v", "v"),
    ("ʋ", "v\\"),
    ("w", "w"),
    ("x", "x"),
    ("y", "y"),
    ("z", "z"),
    ("ə", "@"),
    ("ɘ", "@\\"),
    ("ɚ", "@`"),
    ("æ", "{"),
    ("ʉ", "}"),
    ("ɨ", "1"),
    ("ø", "2"),
    ("ɜ", "3"),
    ("ɾ", "4"),
    ("ɫ", "5"),
    ("ɐ", "6"),
    ("ɵ", "8"),
    ("œ", "9"),
    ("ʔ", "?"),
    ("ʰ", "h"),
    ("ɑ", "A"),
    ("ç", "C"),
    ("ð", "D"),
    ("ɛ", "E"),
    ("ɪ", "I"),
    ("ɲ", "J"),
    ("ɬ", "K"),
    ("ŋ", "N"),
    ("ɔ", "O"),
    ("ɒ", "Q"),
    ("ʁ", "R"),
    ("ʃ", "S"),
    ("θ", "T"),
    ("ʊ", "U"),
    ("ʌ", "V"),
    ("ʍ", "W"),
    ("χ", "X"),
    ("ʏ", "Y"),
    ("ʒ", "Z"),
    ("t͡s", "ts"),
    ("t͡ʃ", "tS"),
    ("t͡ɕ", "ts\\"),
    ("d͡ʒ", "dZ"),
    ("l̩", "l="),
    ("n̩", "n="),
    ("ɝ", "<?"),
    ("ɪ̯", "I^"),
    ("ɫ̩", "5="),
    ("aː", "a:"),
    ("eː", "e:"),
    ("iː", "i:"),
    ("oː", "o:"),
    ("uː", "u:"),
    ("æː", "{:"),
    ("ɑː", "A:"),
    ("ɔː", "O:"),
    ("ʊː", "U:"),
    ("ʌː", "V:"),
    ("ɛː", "E:"),
    ("ɪː", "I:"),
    ("œː", "9:"),
    ("ɜː", "3:"),
    ("ʊ̯", "U^"),
    ("ɝː", "<? ɝ ?>:"),
    ("m̩", "m_="),
    ("əː", "@:"),
    ("n̩", "n_="),
];

static TABLE: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| IPA_XSAMPA_MAP.iter().copied().collect());

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum XsampaError {
    #[error("no X-SAMPA equivalent for IPA segment {0:?}")]
    UnknownSegment(String),
}

/// Maps a space-separated sequence of IPA segments to X-SAMPA.
pub fn ipa_to_xsampa(ipa: &str) -> Result<String, XsampaError> {
    let segments = ipa
        .split_whitespace()
        .map(|segment| {
            TABLE
                .get(segment)
                .copied()
                .ok_or_else(|| XsampaError::UnknownSegment(segment.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(segments.join(" "))
}
