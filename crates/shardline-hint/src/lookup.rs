//! Membership helpers over collections of hints.

use std::borrow::Borrow;

use crate::hint::{Hint, HintType};

/// Returns true if any hint in `hints` has the given type.
///
/// Accepts anything that iterates over hints or references to hints.
///
/// # Example
///
/// ```
/// use shardline_hint::{contains, Hint, HintType};
///
/// let hints = vec![Hint::new(HintType::Slave), Hint::new(HintType::Master)];
/// assert!(contains(HintType::Slave, &hints));
/// assert!(!contains(HintType::Trace, &hints));
/// ```
pub fn contains<I>(kind: HintType, hints: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<Hint>,
{
    hints.into_iter().any(|hint| hint.borrow().kind == kind)
}

/// Returns the first hint in `hints` with the given type.
pub fn find<'a, I>(kind: HintType, hints: I) -> Option<&'a Hint>
where
    I: IntoIterator<Item = &'a Hint>,
{
    hints.into_iter().find(|hint| hint.kind == kind)
}
