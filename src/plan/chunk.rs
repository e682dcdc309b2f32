//! Sequence chunking for batched requests.

use std::fmt::Display;

use crate::{Error, Result};

/// How to split a sequence: into a target number of chunks, or into
/// chunks of a maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkBy {
    /// Split into at most this many nearly-equal chunks (sizes computed
    /// by ceiling division; trailing chunks may be shorter).
    Count(usize),
    /// Split into chunks of at most this many elements (the last may be
    /// shorter).
    Size(usize),
}

/// Split an ordered sequence into chunks.
///
/// Concatenating the chunks reproduces the input in order; no chunk is
/// ever padded.
///
/// # Example
///
/// ```
/// use brightpearl_rs::plan::{chunk, ChunkBy};
///
/// let counted = chunk(&[1, 2, 3, 4, 5, 6], ChunkBy::Count(2)).unwrap();
/// assert_eq!(counted, vec![vec![1, 2, 3], vec![4, 5, 6]]);
///
/// let sized = chunk(&[1, 2, 3, 4, 5, 6, 7], ChunkBy::Size(2)).unwrap();
/// assert_eq!(sized, vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7]]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Config`] when the chunk count or size is zero.
pub fn chunk<T: Clone>(items: &[T], by: ChunkBy) -> Result<Vec<Vec<T>>> {
    let size = match by {
        ChunkBy::Count(0) => {
            return Err(Error::Config("chunk count must be at least 1".to_string()))
        }
        ChunkBy::Size(0) => {
            return Err(Error::Config("chunk size must be at least 1".to_string()))
        }
        ChunkBy::Count(count) => items.len().div_ceil(count),
        ChunkBy::Size(size) => size,
    };

    if items.is_empty() {
        return Ok(Vec::new());
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Join identifiers into the comma-separated range form the remote
/// accepts in a URI path segment.
///
/// # Example
///
/// ```
/// use brightpearl_rs::plan::join_ids;
///
/// assert_eq!(join_ids(&[1001, 1002, 1003]), "1001,1002,1003");
/// ```
pub fn join_ids<T: Display>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_by_count() {
        let chunks = chunk(&[1, 2, 3, 4, 5, 6], ChunkBy::Count(2)).unwrap();
        assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_chunk_by_count_uneven() {
        // ceil(7 / 3) = 3, so chunks of 3, 3, 1
        let chunks = chunk(&[1, 2, 3, 4, 5, 6, 7], ChunkBy::Count(3)).unwrap();
        assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }

    #[test]
    fn test_chunk_by_size() {
        let chunks = chunk(&[1, 2, 3, 4, 5, 6, 7], ChunkBy::Size(2)).unwrap();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7]]);
    }

    #[test]
    fn test_chunk_bounds_and_reassembly() {
        let items: Vec<u32> = (0..997).collect();

        for count in [1usize, 2, 3, 10, 997, 2000] {
            let chunks = chunk(&items, ChunkBy::Count(count)).unwrap();
            assert!(chunks.len() <= count);
            let max = items.len().div_ceil(count);
            assert!(chunks.iter().all(|c| c.len() <= max));
            let flat: Vec<u32> = chunks.concat();
            assert_eq!(flat, items);
        }

        for size in [1usize, 2, 200, 996, 997, 5000] {
            let chunks = chunk(&items, ChunkBy::Size(size)).unwrap();
            assert!(chunks.iter().all(|c| c.len() <= size));
            let flat: Vec<u32> = chunks.concat();
            assert_eq!(flat, items);
        }
    }

    #[test]
    fn test_chunk_empty_input() {
        let chunks = chunk(&[] as &[i32], ChunkBy::Size(5)).unwrap();
        assert!(chunks.is_empty());

        let chunks = chunk(&[] as &[i32], ChunkBy::Count(3)).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_zero_parameter_rejected() {
        assert!(matches!(
            chunk(&[1, 2, 3], ChunkBy::Count(0)),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            chunk(&[1, 2, 3], ChunkBy::Size(0)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[1001, 1002, 1003]), "1001,1002,1003");
        assert_eq!(join_ids(&["a", "b"]), "a,b");
        assert_eq!(join_ids::<i64>(&[]), "");
    }
}
