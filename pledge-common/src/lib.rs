//! # Pledge Common Library
//!
//! Shared code for the government commitment tracker:
//! - Canonical commitment records and the loaded dataset
//! - Raw row normalization
//! - Status bucket classification
//! - Day-first date parsing and month buckets
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod record;
pub mod status;

pub use error::{Error, Result};
pub use normalize::{RawRecord, RawStatus};
pub use record::{CommitmentRecord, Dataset};
pub use status::{classify, StatusBucket};
