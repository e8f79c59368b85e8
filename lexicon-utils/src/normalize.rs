use unicode_normalization::UnicodeNormalization;

/// Performs basic Unicode normalization and casefolding on a field.
///
/// Every wordform and lemma passes through here before it is stored, so
/// lookups across sources agree on one canonical spelling. Casefolding is
/// simple lowercasing, not full Unicode case folding: "ß" stays "ß" rather
/// than expanding to "ss", which is the right call for English data where
/// the letter only appears in loanwords.
pub fn normalize(field: &str) -> String {
    field.nfc().collect::<String>().to_lowercase()
}
