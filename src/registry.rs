//! Area code registry.
//!
//! Loads the set of valid NANP area codes from a tab-separated table and
//! answers membership queries. The registry is built once at startup and is
//! immutable afterwards, so a shared reference can be handed to any number
//! of extractors (including across threads).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PhonedigError, PhonedigResult};

/// Number of tab-separated fields per area code record.
const RECORD_FIELDS: usize = 6;

/// Immutable set of valid 3-digit NANP area codes.
///
/// Records in the source table carry descriptive metadata (region name,
/// cities, country); only the leading integer identifier is kept.
#[derive(Debug, Clone)]
pub struct AreaCodeRegistry {
    codes: HashSet<u32>,
}

impl AreaCodeRegistry {
    /// Loads the registry from a tab-separated file.
    ///
    /// Each line is one record: area code, administrative-division
    /// abbreviation, administrative-division name, cities, ISO 3166-2 code,
    /// country id. A missing file or a malformed record is fatal; the
    /// registry is required before any extraction can run.
    pub fn load<P: AsRef<Path>>(path: P) -> PhonedigResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PhonedigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parses area code records from any buffered reader.
    ///
    /// `path` is only used for error reporting.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> PhonedigResult<Self> {
        let mut codes = HashSet::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| PhonedigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            // Tolerate a trailing newline at EOF.
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != RECORD_FIELDS {
                return Err(PhonedigError::MalformedRecord {
                    line: idx + 1,
                    reason: format!(
                        "expected {} tab-separated fields, got {}",
                        RECORD_FIELDS,
                        fields.len()
                    ),
                });
            }
            let code: u32 =
                fields[0]
                    .trim()
                    .parse()
                    .map_err(|_| PhonedigError::MalformedRecord {
                        line: idx + 1,
                        reason: format!("area code field '{}' is not an integer", fields[0]),
                    })?;
            codes.insert(code);
        }
        Ok(Self { codes })
    }

    /// Builds a registry directly from known codes, bypassing the table.
    pub fn from_codes<I: IntoIterator<Item = u32>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Returns true if `code` is a registered area code.
    pub fn contains(&self, code: u32) -> bool {
        self.codes.contains(&code)
    }

    /// Validates a textual area code candidate.
    ///
    /// Returns false for anything that does not parse as an integer present
    /// in the registry. Non-numeric input is an expected case, not an error.
    pub fn is_valid_area_code(&self, candidate: &str) -> bool {
        candidate
            .parse::<u32>()
            .map(|code| self.contains(code))
            .unwrap_or(false)
    }

    /// Number of registered area codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the registry holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
