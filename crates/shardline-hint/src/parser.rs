//! Hint text parser.
//!
//! Accepted forms:
//!
//! ```text
//! MASTER                  -- bare name, no inputs
//! MASTER()                -- empty argument list
//! MASTER(foo,bar)         -- positional inputs
//! ROUTE(db=0,tbl=3)       -- keyed inputs
//! ```
//!
//! The type name is matched case-insensitively. The argument list runs from
//! the first `(` to the last `)` and is split on every comma; there is no
//! quoting or escaping. Each token is split on its first `=`. Keys and values
//! are trimmed, and tokens that end up with a blank key or value are dropped
//! rather than rejected.

use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::error::{HintError, HintResult};
use crate::hint::{Hint, HintType, KeyValue};

/// Parses a hint with the default configuration.
///
/// # Errors
///
/// Returns [`HintError::InvalidHint`] if the type name is unknown or the
/// argument list has no closing parenthesis.
///
/// # Example
///
/// ```
/// use shardline_hint::{parse, HintType};
///
/// let hint = parse("route( db = 0 , , tbl=3 )").unwrap();
/// assert_eq!(hint.kind, HintType::Route);
/// assert_eq!(hint.to_string(), "ROUTE(db=0,tbl=3)");
/// ```
pub fn parse(input: &str) -> HintResult<Hint> {
    HintParser::default().parse(input)
}

/// Parses each hint text in turn, stopping at the first invalid one.
///
/// # Errors
///
/// Returns the error of the first hint that fails to parse.
pub fn parse_all<'a>(inputs: impl IntoIterator<Item = &'a str>) -> HintResult<Vec<Hint>> {
    let parser = HintParser::default();
    inputs.into_iter().map(|input| parser.parse(input)).collect()
}

/// Hint parser with a configurable set of accepted hint types.
#[derive(Debug, Clone, Default)]
pub struct HintParser {
    config: ParserConfig,
}

impl HintParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a hint.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::InvalidHint`] if the text is malformed, or
    /// [`HintError::Disabled`] if the hint type is not enabled. With the
    /// default configuration every type is enabled, so the free [`parse`]
    /// function only ever returns [`HintError::InvalidHint`].
    pub fn parse(&self, input: &str) -> HintResult<Hint> {
        let hint = parse_hint(input)?;

        if !self.config.is_enabled(hint.kind) {
            debug!(kind = %hint.kind, input, "rejecting disabled hint type");
            return Err(HintError::Disabled { kind: hint.kind, input: input.to_string() });
        }

        Ok(hint)
    }
}

fn parse_hint(input: &str) -> HintResult<Hint> {
    let Some(open) = input.find('(') else {
        return resolve_type(input, input).map(Hint::new);
    };

    let kind = resolve_type(&input[..open], input)?;

    let close = match input.rfind(')') {
        Some(close) if close > open => close,
        _ => {
            debug!(input, "hint has no closing parenthesis");
            return Err(HintError::invalid(input));
        }
    };

    let inputs = split_args(&input[open + 1..close]).filter_map(parse_token).collect();

    Ok(Hint { kind, inputs })
}

fn resolve_type(name: &str, input: &str) -> HintResult<HintType> {
    HintType::lookup(name).ok_or_else(|| {
        debug!(name, input, "unknown hint type");
        HintError::invalid(input)
    })
}

/// Splits an argument list on commas. An empty list has no tokens.
fn split_args(body: &str) -> impl Iterator<Item = &str> {
    (!body.is_empty()).then(|| body.split(',')).into_iter().flatten()
}

fn parse_token(token: &str) -> Option<KeyValue> {
    let Some((key, value)) = token.split_once('=') else {
        let value = token.trim();
        if value.is_empty() {
            trace!(token, "dropping blank hint input");
            return None;
        }
        return Some(KeyValue::positional(value));
    };

    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        trace!(token, "dropping hint input with blank key or value");
        return None;
    }
    Some(KeyValue::keyed(key, value))
}
