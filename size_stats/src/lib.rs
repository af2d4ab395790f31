//! Repository size statistics
//!
//! # Overview
//!
//! Given the listing endpoint of a GitHub organization or a Bitbucket workspace,
//! the library pulls every reported repository page by page and reduces the
//! collected sizes into a single aggregate snapshot: total size, maximum, mean,
//! 50th and 99th percentile, and the ten largest repositories ranked by size.
//!
//! Fetching is strictly sequential. The next page is requested only after the
//! previous one has been appended to the accumulator, and the first failed page
//! request aborts the whole run with no partial result.
//! Every size entering the reducer is a byte count; provider clients normalize
//! their native unit (GitHub reports kilobytes) before records are constructed.

pub mod collector;
pub mod stats;

pub use collector::fetch_all;
pub use stats::{aggregate, AggregateStats};
