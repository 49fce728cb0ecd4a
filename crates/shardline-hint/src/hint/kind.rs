//! Hint type registry.
//!
//! The set of hint kinds is closed. Each kind has exactly one canonical
//! uppercase name, which is what [`HintType::lookup`] matches against
//! (case-insensitively) and what [`Display`](fmt::Display) writes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HintError;

/// The kind of a routing hint.
///
/// # Example
///
/// ```
/// use shardline_hint::HintType;
///
/// assert_eq!(HintType::lookup("fullscan"), Some(HintType::FullScan));
/// assert_eq!(HintType::FullScan.as_str(), "FULLSCAN");
/// assert_eq!(HintType::lookup("full_scan"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HintType {
    /// Force the query to the master node.
    Master,
    /// Force the query to a slave (replica) node.
    Slave,
    /// Custom route supplied through the hint inputs.
    Route,
    /// Allow a full scan across all shards.
    FullScan,
    /// Route directly, bypassing shard computation.
    Direct,
    /// Attach distributed tracing to the query.
    Trace,
}

impl HintType {
    /// All hint types, in declaration order.
    pub const ALL: [Self; 6] =
        [Self::Master, Self::Slave, Self::Route, Self::FullScan, Self::Direct, Self::Trace];

    /// Returns the canonical uppercase name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Master => "MASTER",
            Self::Slave => "SLAVE",
            Self::Route => "ROUTE",
            Self::FullScan => "FULLSCAN",
            Self::Direct => "DIRECT",
            Self::Trace => "TRACE",
        }
    }

    /// Looks up a hint type by name, ignoring case.
    ///
    /// The name must match a canonical name exactly apart from case:
    /// no surrounding whitespace, abbreviations or prefixes.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| eq_fold(name, kind.as_str()))
    }
}

impl fmt::Display for HintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HintType {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| HintError::invalid(s))
    }
}

/// Compares `candidate` against an ASCII uppercase `canonical` name under
/// simple case folding.
fn eq_fold(candidate: &str, canonical: &str) -> bool {
    let mut chars = candidate.chars();
    for expected in canonical.chars() {
        match chars.next() {
            Some(c) if folds_to(c, expected) => {}
            _ => return false,
        }
    }
    chars.next().is_none()
}

fn folds_to(c: char, upper: char) -> bool {
    match c {
        // the only non-ASCII members of an ASCII letter's fold orbit
        '\u{17f}' => upper == 'S',
        '\u{212a}' => upper == 'K',
        _ => c.to_ascii_uppercase() == upper,
    }
}
