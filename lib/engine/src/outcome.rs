//! Outcome types for a recommendation call.
//!
//! Every call resolves to a value of the closed [`Recommendation`] union:
//! either a ranked projection of catalog rows or a [`Diagnostic`]. Invalid
//! input and an empty filter result are expected business outcomes, not
//! errors; unexpected failures are wrapped into
//! [`Diagnostic::Internal`] at the call boundary so the caller never
//! observes an unhandled fault.

use serde::Serialize;
use thiserror::Error;

/// Unweighted per-component contributions behind a composite score.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub similarity: f32,
    pub rating: f32,
    pub price_proximity: f32,
}

/// One ranked catalog row projected for the caller.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedProduct {
    pub brand: String,
    pub name: String,
    pub price: f32,
    pub rating: f32,
    /// Composite score the ranking sorted by.
    pub score: f32,
    pub breakdown: ScoreBreakdown,
}

/// A typed non-result outcome, rendered for callers as a short
/// diagnostic string.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Diagnostic {
    /// Skin type or category not found in the fixed vocabularies.
    #[error("invalid_input")]
    InvalidInput,

    /// The categorical + budget filter left no rows.
    #[error("no_matches")]
    NoMatches,

    /// Unexpected failure during scoring, caught at the call boundary.
    #[error("internal_error:{0}")]
    Internal(String),
}

/// Outcome of a recommendation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Ranked rows, best first, at most `top_n` of them.
    Ranked(Vec<RankedProduct>),
    Diagnostic(Diagnostic),
}

impl Recommendation {
    #[inline]
    #[must_use]
    pub fn is_ranked(&self) -> bool {
        matches!(self, Recommendation::Ranked(_))
    }

    /// The ranked rows, if the call produced any.
    #[must_use]
    pub fn as_ranked(&self) -> Option<&[RankedProduct]> {
        match self {
            Recommendation::Ranked(rows) => Some(rows),
            Recommendation::Diagnostic(_) => None,
        }
    }

    /// The diagnostic, if the call short-circuited.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Recommendation::Ranked(_) => None,
            Recommendation::Diagnostic(d) => Some(d),
        }
    }
}
