//! Overlap-aware phone number scanner.
//!
//! Locates phone-shaped spans in normalized text and validates them against
//! the area code registry. Rejected matches advance the scan cursor by only
//! one or two characters rather than past the whole span, so a real number
//! hiding one character further in (behind a `*82` blocking prefix, or
//! behind leading noise digits) is still found.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize;
use crate::registry::AreaCodeRegistry;

/// Lexical pattern for a phone-shaped span: optional opening brackets, then
/// area code, exchange, and subscriber digit groups. Up to three separator
/// characters are tolerated between digits within a group and up to six
/// between groups. Area code and exchange both start with 2-9 per NANP.
///
/// Digit classes are ASCII-only. Unicode decimal digits never form a
/// candidate, which keeps every match exactly ten ASCII digits wide once
/// separators are stripped.
pub fn phone_number_pattern() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"[\[{(<]{0,3}[2-9][\W_]{0,3}[0-9][\W_]{0,3}[0-9][\W_]{0,6}[2-9][\W_]{0,3}[0-9][\W_]{0,3}[0-9][\W_]{0,6}[0-9][\W_]{0,3}[0-9][\W_]{0,3}[0-9][\W_]{0,3}[0-9]",
        )
        .expect("valid phone number pattern")
    });
    &PATTERN
}

/// Shape of an already-isolated 10-digit NANP number. ASCII digits only.
fn phone_shape() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[2-9][0-9]{2}[2-9][0-9]{6}$").expect("valid phone shape pattern")
    });
    &PATTERN
}

/// Disposition of a single candidate match.
enum Disposition {
    /// Valid number; yield it and resume after the span.
    Accept,
    /// Artifact of a `*82` call-blocking prefix overlapping a real number;
    /// skip the "*8" so the real number starting at the "2" is still found.
    RejectOverlap,
    /// Phone-shaped noise (price, dimensions); resume one character later.
    RejectNoise,
}

/// Phone number extractor bound to an area code registry.
///
/// Stateless between calls: each [`scan`](Self::scan) or
/// [`extract`](Self::extract) is an independent pass over its input.
#[derive(Debug, Clone, Copy)]
pub struct PhoneExtractor<'a> {
    registry: &'a AreaCodeRegistry,
}

impl<'a> PhoneExtractor<'a> {
    /// Creates an extractor validating against `registry`.
    pub fn new(registry: &'a AreaCodeRegistry) -> Self {
        Self { registry }
    }

    /// Scans `text` lazily, yielding validated 10-digit numbers in order.
    pub fn scan(&self, text: &str) -> PhoneNumbers<'a> {
        PhoneNumbers {
            registry: self.registry,
            text: normalize(text),
            cursor: 0,
        }
    }

    /// Collects every validated number in `text`.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.scan(text).collect()
    }

    /// Validates an already-isolated candidate string.
    ///
    /// The candidate must be exactly ten digits with area code and exchange
    /// starting 2-9. With `check_area_code`, the area code must also be
    /// present in the registry.
    pub fn is_valid_phone_number(&self, candidate: &str, check_area_code: bool) -> bool {
        if !phone_shape().is_match(candidate) {
            return false;
        }
        !check_area_code || self.registry.is_valid_area_code(&candidate[..3])
    }
}

/// Lazy iterator over validated phone numbers in one piece of text.
///
/// Owns the normalized text and a byte cursor that only moves forward.
pub struct PhoneNumbers<'a> {
    registry: &'a AreaCodeRegistry,
    text: String,
    cursor: usize,
}

impl PhoneNumbers<'_> {
    fn disposition(&self, start: usize, digits: &str) -> Disposition {
        if digits.starts_with("82") && self.text[..start].ends_with('*') {
            Disposition::RejectOverlap
        } else if !self.registry.is_valid_area_code(&digits[..3]) {
            Disposition::RejectNoise
        } else {
            Disposition::Accept
        }
    }

    /// Moves the cursor to `pos`, rounded up to a character boundary.
    fn advance_to(&mut self, pos: usize) {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        self.cursor = pos;
    }
}

impl Iterator for PhoneNumbers<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while self.cursor <= self.text.len() {
            let m = phone_number_pattern().find_at(&self.text, self.cursor)?;
            let digits: String = m
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            match self.disposition(m.start(), &digits) {
                Disposition::Accept => {
                    self.advance_to(m.end());
                    return Some(digits);
                }
                Disposition::RejectOverlap => self.advance_to(m.start() + 2),
                Disposition::RejectNoise => self.advance_to(m.start() + 1),
            }
        }
        None
    }
}
