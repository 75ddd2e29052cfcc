//! Tone-mark handling for Hanyu Pinyin syllables.

use unicode_normalization::UnicodeNormalization;

/// Map a tone-marked vowel to its base ASCII letter.
///
/// The umlaut vowels map to `v`, the conventional ASCII stand-in for `ü`.
fn base_vowel(c: char) -> Option<char> {
    match c {
        'ā' | 'á' | 'ǎ' | 'à' => Some('a'),
        'ē' | 'é' | 'ě' | 'è' => Some('e'),
        'ī' | 'í' | 'ǐ' | 'ì' => Some('i'),
        'ō' | 'ó' | 'ǒ' | 'ò' => Some('o'),
        'ū' | 'ú' | 'ǔ' | 'ù' => Some('u'),
        'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' | 'ü' => Some('v'),
        _ => None,
    }
}

/// Strip tone marks from one pinyin syllable and reduce it to `a`-`z`.
///
/// Input is NFC-composed first so decomposed tone marks (base vowel plus
/// combining accent) behave like the precomposed forms. Characters without
/// a tone mapping pass through unchanged and are then removed by the
/// alphabetic filter, so stray digits or punctuation in a malformed reading
/// disappear. Returns an empty string when nothing survives; callers
/// discard those readings.
pub fn normalize_syllable(syllable: &str) -> String {
    let stripped: String = syllable
        .nfc()
        .map(|c| base_vowel(c).unwrap_or(c))
        .collect();

    // ü can slip past the map inside an unexpected cluster
    stripped
        .replace('ü', "v")
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}
