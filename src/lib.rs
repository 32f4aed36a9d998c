//! Phone number extraction from noisy, adversarially obfuscated text.
//!
//! Classified-ad posters disguise phone numbers to evade scrapers: spelled
//! out digits, leet-speak misspellings, letters standing in for digits,
//! digit groups broken up with punctuation. This library normalizes those
//! tricks into a digit stream and scans it for plausible North American
//! numbers, rejecting look-alikes (prices, dimensions) against a registry
//! of valid area codes.
//!
//! # Architecture
//!
//! - [`registry`]: the set of valid NANP area codes, loaded once at startup
//! - [`normalize`]: the ordered obfuscation-rewriting cascade
//! - [`extract`]: the overlap-aware scanner and validation predicates
//! - [`error`]: registry load errors
//!
//! # Quick Start
//!
//! ```
//! use phonedig::{AreaCodeRegistry, PhoneExtractor};
//!
//! let registry = AreaCodeRegistry::from_codes([215]);
//! let extractor = PhoneExtractor::new(&registry);
//!
//! let found = extractor.extract("call two one five 555 one two three four");
//! assert_eq!(found, vec!["2155551234"]);
//! ```
//!
//! In production the registry comes from a tab-separated table instead:
//!
//! ```no_run
//! use phonedig::{AreaCodeRegistry, PhoneExtractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = AreaCodeRegistry::load("area_code.tsv")?;
//! let extractor = PhoneExtractor::new(&registry);
//! for number in extractor.scan("215-555-1234 or 646.555.9876") {
//!     println!("{number}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod normalize;
pub mod registry;

pub use error::{PhonedigError, PhonedigResult};
pub use extract::{phone_number_pattern, PhoneExtractor, PhoneNumbers};
pub use registry::AreaCodeRegistry;
