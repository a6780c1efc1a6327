use crate::core::types::KmerRange;

/// Every substring of length `k` in `sequence`, for each `k` in `range`.
///
/// Ordered by `k` ascending, then by start position. Lengths that do not fit
/// in the sequence contribute nothing.
pub fn generate_candidates(sequence: &[u8], range: KmerRange) -> impl Iterator<Item = &[u8]> {
    range
        .lengths()
        .filter(|&k| k > 0)
        .flat_map(move |k| sequence.windows(k))
}

/// Number of candidates `generate_candidates` yields for a sequence of `len` bases
#[must_use]
pub fn candidate_count(len: usize, range: KmerRange) -> usize {
    range
        .lengths()
        .filter(|&k| k > 0 && k <= len)
        .map(|k| len - k + 1)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(sequence: &[u8], kmin: usize, kmax: usize) -> Vec<&[u8]> {
        generate_candidates(sequence, KmerRange::new(kmin, kmax).unwrap()).collect()
    }

    #[test]
    fn test_single_length() {
        let kmers = collect(b"ABCDE", 3, 4);
        assert_eq!(kmers, vec![&b"ABC"[..], b"BCD", b"CDE"]);
    }

    #[test]
    fn test_multiple_lengths_ordered_by_k() {
        let kmers = collect(b"ABCD", 2, 4);
        assert_eq!(kmers, vec![&b"AB"[..], b"BC", b"CD", b"ABC", b"BCD"]);
    }

    #[test]
    fn test_sequence_shorter_than_kmin() {
        assert!(collect(b"ACGT", 5, 8).is_empty());
        assert!(collect(b"", 1, 3).is_empty());
    }

    #[test]
    fn test_candidate_count_matches_iterator() {
        let range = KmerRange::new(2, 6).unwrap();
        let sequence = b"ACGTACG";
        assert_eq!(
            candidate_count(sequence.len(), range),
            generate_candidates(sequence, range).count()
        );
        assert_eq!(candidate_count(3, range), 3);
    }

    #[test]
    fn test_zero_length_is_skipped() {
        let range = KmerRange { kmin: 0, kmax: 2 };
        let kmers: Vec<_> = generate_candidates(b"AC", range).collect();
        assert_eq!(kmers, vec![&b"A"[..], b"C"]);
    }
}
