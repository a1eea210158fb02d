#![doc = include_str!("../README.md")]

mod error;
pub mod msa;
pub mod needleman_wunsch;
mod scoring;
mod sequence;
pub mod star;

pub use error::MsaError;
pub use msa::{Msa, Statistics};
pub use needleman_wunsch::{Aligner, DpCell, DpTable, PairwiseAlignment};
pub use scoring::{ReportScheme, ScoringScheme};
pub use sequence::{ungapped, Sequence, GAP};
pub use star::{CenterStar, PairScores, Summary};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
