//! Forward and inverse block transform.
//!
//! The inverse never rebuilds the rotation matrix: it key-indexed-counts
//! the alphabet, derives the next-rank mapping, and chases it n times.

use crate::auxility::UncheckedSliceExt;
use crate::error::Error;
use crate::suffix::SuffixOrder;

/// Transformed block: the last column of the sorted rotations, plus the
/// rank at which the untransformed input appears.
pub struct BwtBlock {
    pub first_index: u32,
    pub data: Vec<u8>,
}

pub fn transform(input: &[u8], order: &SuffixOrder) -> Result<BwtBlock, Error> {
    let n = input.len();
    if order.len() != n {
        return Err(Error::InvalidArgument("suffix order does not match the input length"));
    }

    let mut first_index = 0u32;
    let mut data = Vec::with_capacity(n);
    for (rank, &offset) in order.offsets().iter().enumerate() {
        if offset == 0 {
            first_index = rank as u32;
        }
        // last symbol of the ranked rotation, i.e. the one just before its start
        data.push(input[(offset as usize + n - 1) % n]);
    }
    Ok(BwtBlock { first_index, data })
}

pub fn inverse(first_index: u32, data: &[u8]) -> Result<Vec<u8>, Error> {
    let n = data.len();
    if n == 0 {
        return match first_index {
            0 => Ok(Vec::new()),
            _ => Err(Error::InvalidArgument("first index out of bounds")),
        };
    }
    if first_index as usize >= n {
        return Err(Error::InvalidArgument("first index out of bounds"));
    }

    // cumulative symbol counts: start of each symbol's bucket in sorted order
    let mut bucket_heads = [0u32; crate::NUM_SYMBOLS];
    for &symbol in data {
        bucket_heads[symbol as usize] += 1;
    }
    let mut total = 0u32;
    for head in bucket_heads.iter_mut() {
        let count = *head;
        *head = total;
        total += count;
    }

    // next[rank] = rank of that rotation shifted left by one; filling in
    // ascending position order keeps equal symbols stable, which is what
    // lets the chase below walk the original sequence
    let mut next = vec![0u32; n];
    for (position, &symbol) in data.iter().enumerate() {
        let slot = bucket_heads[symbol as usize] as usize;
        crate::assert_unchecked!(slot < n);
        unsafe {
            next.nocheck_mut()[slot] = position as u32;
        }
        bucket_heads[symbol as usize] += 1;
    }

    let mut output = Vec::with_capacity(n);
    let mut cursor = first_index as usize;
    unsafe {
        for _ in 0 .. n {
            cursor = next.nocheck()[cursor] as usize;
            output.push(data.nocheck()[cursor]);
        }
    }
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;

    fn round_trip(input: &[u8]) {
        let order = SuffixOrder::new(input);
        let block = transform(input, &order).unwrap();
        assert_eq!(block.data.len(), input.len());
        assert_eq!(inverse(block.first_index, &block.data).unwrap(), input);
    }

    fn pseudo_random_bytes(len: usize, mut state: u64) -> Vec<u8> {
        (0 .. len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state >> 24) as u8
            })
            .collect()
    }

    #[test]
    fn test_abracadabra_pinned() {
        let input = b"ABRACADABRA!";
        let block = transform(input, &SuffixOrder::new(input)).unwrap();
        assert_eq!(block.first_index, 3);
        assert_eq!(block.data, b"ARD!RCAAAABB");
        assert_eq!(inverse(block.first_index, &block.data).unwrap(), input);
    }

    #[test]
    fn test_transform_is_permutation_of_input() {
        let input = pseudo_random_bytes(512, 0x853c49e6748fea9b);
        let block = transform(&input, &SuffixOrder::new(&input)).unwrap();

        let mut input_counts = [0u32; crate::NUM_SYMBOLS];
        let mut output_counts = [0u32; crate::NUM_SYMBOLS];
        for &symbol in &input {
            input_counts[symbol as usize] += 1;
        }
        for &symbol in &block.data {
            output_counts[symbol as usize] += 1;
        }
        assert_eq!(input_counts, output_counts);
    }

    #[test]
    fn test_empty_input() {
        let block = transform(b"", &SuffixOrder::new(b"")).unwrap();
        assert_eq!(block.first_index, 0);
        assert!(block.data.is_empty());
        assert_eq!(inverse(0, b"").unwrap(), b"");
    }

    #[test]
    fn test_round_trips() {
        round_trip(b"A");
        round_trip(b"AAAA");
        round_trip(b"banana");
        round_trip(b"abababababab");
        round_trip(b"the quick brown fox jumps over the lazy dog");
        round_trip(&(0u8 ..= 255).collect::<Vec<_>>());
        round_trip(&pseudo_random_bytes(2000, 0x2545f4914f6cdd1d));
    }

    #[test]
    fn test_inverse_rejects_first_index_past_end() {
        let input = b"ABRACADABRA!";
        let block = transform(input, &SuffixOrder::new(input)).unwrap();
        let result = inverse(block.data.len() as u32, &block.data);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_inverse_rejects_nonzero_first_index_on_empty() {
        assert!(matches!(inverse(1, b""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_transform_rejects_mismatched_order() {
        let order = SuffixOrder::new(b"short");
        let result = transform(b"a longer input", &order);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
