//! Obfuscation normalizer.
//!
//! Rewrites spelled-out and deliberately disguised numerals into digit
//! sequences so the scanner can find phone-shaped spans. The rewrite is an
//! ordered cascade of substitutions where each stage operates on the output
//! of the previous one. The stage order is load-bearing:
//!
//! 1. strip decimal numeric character references (`&#NN;`)
//! 2. repair leet-speak misspellings of number words ("th1rteen")
//! 3. mixed digit compounds: tens word + digit ("twenty 1" -> "twenty-one")
//! 4. word compounds: tens word + ones word ("twenty-one" -> "21")
//! 5. magnitude suffixes ("hundred" -> "00", "thousand" -> "000")
//! 6. standalone number words ("five" -> "5")
//! 7. single-letter substitutions ("oh"/"o" -> "0", "i"/"l" -> "1")
//!
//! Stage 2 must precede stage 7 or the generic letter rules would turn
//! "th1rteen" into noise before the word is recognized. Stages 3-4 must
//! precede stage 6 or "twenty one" would become "201" instead of "21".
//!
//! Stage 7 applies everywhere, including inside ordinary words ("call"
//! becomes "ca11"). The output is therefore only meaningful as scanner
//! input, never as cleaned prose.

use once_cell::sync::Lazy;
use regex::Regex;

/// One substitution pass: pattern applied to the whole text, all occurrences.
struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid substitution pattern"),
            replacement: replacement.to_string(),
        }
    }
}

/// Leet-speak repairs, most specific first (stage 2).
const LEET_REPAIRS: &[(&str, &str)] = &[
    ("th0usand", "thousand"),
    ("th1rteen", "thirteen"),
    ("f0urteen", "fourteen"),
    ("e1ghteen", "eighteen"),
    ("n1neteen", "nineteen"),
    ("f1fteen", "fifteen"),
    ("s1xteen", "sixteen"),
    ("th1rty", "thirty"),
    ("e1ghty", "eighty"),
    ("n1nety", "ninety"),
    ("fourty", "forty"),
    ("f0urty", "forty"),
    ("e1ght", "eight"),
    ("f0rty", "forty"),
    ("f1fty", "fifty"),
    ("s1xty", "sixty"),
    ("zer0", "zero"),
    ("f0ur", "four"),
    ("f1ve", "five"),
    ("n1ne", "nine"),
    ("0ne", "one"),
    ("tw0", "two"),
    ("s1x", "six"),
];

/// Tens words with their leading digit (stages 3-4).
const TENS: &[(&str, char)] = &[
    ("twenty", '2'),
    ("thirty", '3'),
    ("forty", '4'),
    ("fifty", '5'),
    ("sixty", '6'),
    ("seventy", '7'),
    ("eighty", '8'),
    ("ninety", '9'),
];

/// Ones words with their digit (stages 3-4).
const ONES: &[(&str, char)] = &[
    ("one", '1'),
    ("two", '2'),
    ("three", '3'),
    ("four", '4'),
    ("five", '5'),
    ("six", '6'),
    ("seven", '7'),
    ("eight", '8'),
    ("nine", '9'),
];

/// Standalone number words (stage 6). Teens and tens come before the ones
/// words they contain ("seventeen" and "seventy" before "seven").
const WORD_DIGITS: &[(&str, &str)] = &[
    ("seventeen", "17"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventy", "70"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("twenty", "20"),
    ("thirty", "30"),
    ("eighty", "80"),
    ("ninety", "90"),
    ("three", "3"),
    ("seven", "7"),
    ("eight", "8"),
    ("forty", "40"),
    ("fifty", "50"),
    ("sixty", "60"),
    ("zero", "0"),
    ("four", "4"),
    ("five", "5"),
    ("nine", "9"),
    ("one", "1"),
    ("two", "2"),
    ("six", "6"),
    ("ten", "10"),
];

/// The full ordered rule table. Built once; applied top to bottom.
static RULES: Lazy<Vec<Rule>> = Lazy::new(build_rules);

fn build_rules() -> Vec<Rule> {
    let mut rules = Vec::new();

    // Stage 1: numeric character references are stripped, not decoded.
    rules.push(Rule::new(r"&#\d{1,3};", ""));

    // Stage 2: misspelled numeral words.
    for (wrong, right) in LEET_REPAIRS {
        rules.push(Rule::new(wrong, right));
    }

    // Stage 3: tens word followed by a literal digit, with up to three
    // separator characters in between, becomes the compound word that
    // stage 4 then resolves.
    for (tens, _) in TENS {
        for (ones, digit) in ONES {
            rules.push(Rule::new(
                &format!(r"{tens}[\W_]{{0,3}}{digit}"),
                &format!("{tens}-{ones}"),
            ));
        }
    }

    // Stage 4: compound words, separator-invariant (twenty-one, twentyone,
    // twenty_one, twenty one all resolve the same way).
    for (tens, tens_digit) in TENS {
        for (ones, ones_digit) in ONES {
            rules.push(Rule::new(
                &format!(r"{tens}[ _-]{{0,3}}{ones}"),
                &format!("{tens_digit}{ones_digit}"),
            ));
        }
    }

    // Stage 5: magnitude words function as bare suffixes. Assumes no
    // "three hundred and four" style usage.
    rules.push(Rule::new("hundred", "00"));
    rules.push(Rule::new("thousand", "000"));

    // Stage 6: remaining standalone number words.
    for (word, digits) in WORD_DIGITS {
        rules.push(Rule::new(word, digits));
    }

    // Stage 7: letter-for-digit substitutions. "oh" before "o".
    rules.push(Rule::new("oh", "0"));
    rules.push(Rule::new("o", "0"));
    rules.push(Rule::new("i", "1"));
    rules.push(Rule::new("l", "1"));

    rules
}

/// Normalizes obfuscated numerals in `text` into digit sequences.
///
/// Lower-cases the input, then runs the full rule cascade. Punctuation and
/// whitespace survive, interleaved with the digits the rules produce.
pub fn normalize(text: &str) -> String {
    let mut text = text.to_lowercase();
    for rule in RULES.iter() {
        text = rule.pattern.replace_all(&text, &rule.replacement).into_owned();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelled_out_digits() {
        assert_eq!(
            normalize("two one five five five five one two three four"),
            "2 1 5 5 5 5 1 2 3 4"
        );
    }

    #[test]
    fn test_compound_separator_invariance() {
        assert_eq!(normalize("twenty-one"), "21");
        assert_eq!(normalize("twentyone"), "21");
        assert_eq!(normalize("twenty_one"), "21");
        assert_eq!(normalize("twenty one"), "21");
    }

    #[test]
    fn test_compound_resolves_before_standalone_words() {
        // Rule-ordering regression: the compound must win over "twenty" -> "20"
        // followed by "one" -> "1".
        assert_ne!(normalize("twenty one"), "201");
        assert_eq!(normalize("ninety nine"), "99");
    }

    #[test]
    fn test_mixed_digit_compound() {
        assert_eq!(normalize("twenty 1"), "21");
        assert_eq!(normalize("eighty--2"), "82");
    }

    #[test]
    fn test_leet_repairs() {
        assert_eq!(normalize("f1ve"), "5");
        assert_eq!(normalize("tw0"), "2");
        assert_eq!(normalize("zer0"), "0");
        assert_eq!(normalize("th1rteen"), "13");
    }

    #[test]
    fn test_leet_repair_runs_before_letter_substitution() {
        // Without the repair stage, "e1ghteen" would degrade into noise
        // instead of becoming 18.
        assert_eq!(normalize("e1ghteen"), "18");
    }

    #[test]
    fn test_numeric_entities_stripped() {
        assert_eq!(normalize("&#52;&#52;&#52;"), "");
        assert_eq!(normalize("2&#160;15"), "215");
    }

    #[test]
    fn test_magnitude_suffixes() {
        assert_eq!(normalize("five hundred"), "5 00");
        assert_eq!(normalize("two thousand"), "2 000");
    }

    #[test]
    fn test_letter_substitutions() {
        assert_eq!(normalize("oh"), "0");
        assert_eq!(normalize("O"), "0");
        assert_eq!(normalize("i"), "1");
        assert_eq!(normalize("l"), "1");
    }

    #[test]
    fn test_substitutions_are_unanchored() {
        // Accepted noise: the letter rules hit ordinary words too.
        assert_eq!(normalize("call"), "ca11");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("TWO ONE FIVE"), "2 1 5");
    }

    #[test]
    fn test_idempotent_on_digits() {
        assert_eq!(normalize("215-555-1234"), "215-555-1234");
        assert_eq!(normalize("2155551234"), "2155551234");
    }
}
