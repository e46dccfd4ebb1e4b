//! Locale-aware ordering for product names.
//!
//! Raw code-point order is wrong for Thai: leading vowels (เ แ โ ใ ไ) are
//! written before the consonant they follow in speech, and dictionaries sort
//! by that consonant. Tone marks and other diacritics only break ties. Latin
//! text compares case-insensitively first, lowercase before uppercase on ties.
//!
//! Comparison happens at three levels:
//! 1. primary: leading vowels swapped behind their consonant, diacritics
//!    dropped, letters lowercased;
//! 2. secondary: same as primary but keeping diacritics;
//! 3. tertiary: lowercase sorts before uppercase, then raw code points.

use std::cmp::Ordering;

fn is_thai_consonant(c: char) -> bool { ('\u{0E01}'..='\u{0E2E}').contains(&c) }

fn is_thai_leading_vowel(c: char) -> bool { ('\u{0E40}'..='\u{0E44}').contains(&c) }

/// Mai taikhu, tone marks, thanthakhat, nikhahit and yamakkan.
fn is_thai_diacritic(c: char) -> bool { ('\u{0E47}'..='\u{0E4E}').contains(&c) }

/// Reorders leading vowels behind the following consonant.
fn logical_order(s: &str) -> Vec<char> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match (chars[i], chars.get(i + 1)) {
            (vowel, Some(&next)) if is_thai_leading_vowel(vowel) && is_thai_consonant(next) => {
                out.push(next);
                out.push(vowel);
                i += 2;
            }
            (c, _) => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn fold(chars: &[char], keep_diacritics: bool) -> Vec<char> {
    chars
        .iter()
        .filter(|c| keep_diacritics || !is_thai_diacritic(**c))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Case level: lowercase letters sort before their uppercase forms.
fn case_key(chars: &[char]) -> Vec<bool> { chars.iter().map(|c| c.is_uppercase()).collect() }

/// Compares two strings the way a Thai/English dictionary orders them.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (la, lb) = (logical_order(a), logical_order(b));
    fold(&la, false)
        .cmp(&fold(&lb, false))
        .then_with(|| fold(&la, true).cmp(&fold(&lb, true)))
        .then_with(|| case_key(&la).cmp(&case_key(&lb)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare(a, b));
        v
    }

    #[test]
    fn test_leading_vowel_sorts_by_consonant() {
        // Code-point order would put ชุดไทย before เครื่องประดับ.
        assert_eq!(
            sorted(&["ชุดไทยจิตรลดา", "เครื่องประดับ", "กางเกง"]),
            vec!["กางเกง", "เครื่องประดับ", "ชุดไทยจิตรลดา"]
        );
        assert_eq!(compare("เก", "ข"), Ordering::Less);
        assert_eq!(compare("กา", "เก"), Ordering::Less);
    }

    #[test]
    fn test_tone_marks_break_ties_only() {
        assert_eq!(compare("ขา", "ข่า"), Ordering::Less);
        assert_eq!(compare("ข่า", "ขาว"), Ordering::Less);
    }

    #[test]
    fn test_latin_case_insensitive() {
        assert_eq!(sorted(&["denim", "Cotton", "apron"]), vec!["apron", "Cotton", "denim"]);
        assert_eq!(compare("a", "A"), Ordering::Less);
        assert_eq!(compare("Thai", "Thai"), Ordering::Equal);
    }
}
