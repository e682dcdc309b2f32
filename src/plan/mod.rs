//! Range planning and chunking.
//!
//! The remote API caps each range request at 200 identifiers. This module
//! turns a caller-supplied identifier set into the minimal set of
//! request-sized units:
//!
//! - [`plan_ranges`] splits a textual `"N"` / `"N-M"` spec into windows of
//!   at most [`MAX_RANGE_WINDOW`] identifiers — the fallback path when
//!   capability discovery (OPTIONS) cannot be used.
//! - [`chunk`] splits an arbitrary ordered sequence by count or size, for
//!   endpoints addressed with comma-joined identifier lists.
//! - [`join_ids`] renders an identifier list into the comma-joined URI
//!   form.
//!
//! Everything here is pure; the fetch-and-merge driver lives on the
//! client.

mod chunk;
mod range;

pub use chunk::{chunk, join_ids, ChunkBy};
pub use range::{plan_ranges, RangeSpec, MAX_RANGE_WINDOW};
