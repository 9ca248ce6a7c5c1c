//! Data models for the Factify API
//!
//! Request validation, verdict types and the wire responses built from them.

pub mod check_request;
pub mod verdict;

pub use check_request::{CheckRequest, FactCheckPayload, ValidationError};
pub use verdict::{
    Confidence, FactCheckResponse, FactCheckSummary, RatingSummary, Source, Verdict,
    VerdictStatus,
};
