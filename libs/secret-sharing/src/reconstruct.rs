//! Secret reconstruction.

use crate::{codec, errors::ReconstructError, share::Share, SECRET_BYTES};
use math_lib::interpolate::{Point, PointSequence};
use std::io::Read;

/// Recovers the secret from at least `threshold` serialized share records.
///
/// Every supplied source is read and decoded, and abscissa-distinctness is checked across
/// all of them, before any arithmetic happens. The first `threshold` shares then feed the
/// interpolation.
pub fn reconstruct<R>(sources: &mut [R], threshold: u32) -> Result<[u8; SECRET_BYTES], ReconstructError>
where
    R: Read,
{
    if threshold < 2 || (sources.len() as u64) < u64::from(threshold) {
        return Err(ReconstructError::InvalidThreshold);
    }
    let mut shares = Vec::with_capacity(sources.len());
    for source in sources.iter_mut() {
        let mut record = Vec::new();
        source.read_to_end(&mut record)?;
        shares.push(codec::decode(&record)?);
    }
    reconstruct_from_shares(shares, threshold)
}

/// Recovers the secret from already-decoded shares.
///
/// Lagrange interpolation at zero over `threshold` shares yields the sharing polynomial's
/// constant term, which is the secret; intermediate coefficients are never reconstructed.
/// The two-share case is the line through two points and falls out of the same sum.
pub fn reconstruct_from_shares(
    shares: Vec<Share>,
    threshold: u32,
) -> Result<[u8; SECRET_BYTES], ReconstructError> {
    if threshold < 2 || (shares.len() as u64) < u64::from(threshold) {
        return Err(ReconstructError::InvalidThreshold);
    }
    let points = shares
        .into_iter()
        .map(|share| {
            let (x, y) = share.into_coordinates();
            Point::new(x, y)
        })
        .collect();
    let sequence = PointSequence::new(points);
    if sequence.has_duplicates() {
        return Err(ReconstructError::DuplicateShare);
    }
    let secret = sequence.take(threshold as usize).lagrange_interpolate()?;
    secret.to_le_bytes().map_err(|_| ReconstructError::SecretOverflow)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        errors::DecodeError,
        generate::{generate, generate_shares},
    };
    use math_lib::element::FieldElement;
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
    use rstest::rstest;
    use std::io::Cursor;

    fn split(secret: &[u8; SECRET_BYTES], threshold: u32, count: u32, seed: u64) -> Vec<Vec<u8>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sinks: Vec<Vec<u8>> = (0..count).map(|_| Vec::new()).collect();
        generate(secret, threshold, &mut sinks, &mut rng).unwrap();
        sinks
    }

    fn recover(records: Vec<Vec<u8>>, threshold: u32) -> Result<[u8; SECRET_BYTES], ReconstructError> {
        let mut sources: Vec<Cursor<Vec<u8>>> = records.into_iter().map(Cursor::new).collect();
        reconstruct(&mut sources, threshold)
    }

    #[rstest]
    #[case::first_and_third(&[0, 2])]
    #[case::second_and_third(&[1, 2])]
    fn end_to_end(#[case] subset: &[usize]) {
        let secret = [0x01u8; SECRET_BYTES];
        let records = split(&secret, 2, 3, 0xe2e);
        let chosen: Vec<_> = subset.iter().map(|i| records[*i].clone()).collect();
        assert_eq!(recover(chosen, 2).unwrap(), secret);
    }

    #[test]
    fn any_threshold_subset_recovers() {
        let mut rng = StdRng::seed_from_u64(0x7e57);
        for count in 2..=9u32 {
            for threshold in 2..=count {
                let secret: [u8; SECRET_BYTES] = rng.gen();
                let shares = generate_shares(&secret, threshold, count, &mut rng).unwrap();
                let mut shuffled = shares.clone();
                shuffled.shuffle(&mut rng);
                shuffled.truncate(threshold as usize);
                let recovered = reconstruct_from_shares(shuffled, threshold).unwrap();
                assert_eq!(recovered, secret, "failed for k={threshold} n={count}");
            }
        }
    }

    #[test]
    fn extra_shares_do_not_change_the_result() {
        let secret = [0xabu8; SECRET_BYTES];
        let records = split(&secret, 2, 5, 0xeeee);
        assert_eq!(recover(records, 2).unwrap(), secret);
    }

    #[test]
    fn below_threshold_does_not_recover() {
        let mut rng = StdRng::seed_from_u64(0x1050);
        for _ in 0..8 {
            let secret: [u8; SECRET_BYTES] = rng.gen();
            let shares = generate_shares(&secret, 3, 5, &mut rng).unwrap();
            // Interpolating two shares of a degree-2 polynomial lands elsewhere.
            let short: Vec<_> = shares.into_iter().take(2).collect();
            match reconstruct_from_shares(short, 2) {
                Ok(recovered) => assert_ne!(recovered, secret),
                // A wrong result may also fall in [2^256, p) and fail export.
                Err(ReconstructError::SecretOverflow) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn duplicate_abscissa_is_rejected() {
        let x = FieldElement::from_u64(17);
        let shares = vec![
            Share::new(x.clone(), FieldElement::from_u64(5)),
            Share::new(x, FieldElement::from_u64(9)),
        ];
        let result = reconstruct_from_shares(shares, 2);
        assert!(matches!(result, Err(ReconstructError::DuplicateShare)));
    }

    #[test]
    fn duplicated_record_is_rejected() {
        let records = split(&[3u8; SECRET_BYTES], 2, 3, 0xd0d0);
        let duplicated = vec![records[0].clone(), records[0].clone()];
        let result = recover(duplicated, 2);
        assert!(matches!(result, Err(ReconstructError::DuplicateShare)));
    }

    #[test]
    fn duplicate_check_covers_all_supplied_shares() {
        // The duplicate sits beyond the first `threshold` shares and must still be caught.
        let records = split(&[4u8; SECRET_BYTES], 2, 3, 0xdddd);
        let with_tail_duplicate = vec![records[0].clone(), records[1].clone(), records[1].clone()];
        let result = recover(with_tail_duplicate, 2);
        assert!(matches!(result, Err(ReconstructError::DuplicateShare)));
    }

    #[rstest]
    #[case::flipped_magic(0, 0xff)]
    #[case::wrong_version(2, 0x03)]
    fn corrupt_record_is_rejected(#[case] index: usize, #[case] xor: u8) {
        let mut records = split(&[2u8; SECRET_BYTES], 2, 2, 0xbad);
        records[0][index] ^= xor;
        let result = recover(records, 2);
        assert!(matches!(result, Err(ReconstructError::CorruptShare(_))));
    }

    #[test]
    fn truncated_record_is_rejected() {
        let mut records = split(&[2u8; SECRET_BYTES], 2, 2, 0xbad2);
        records[1].truncate(codec::RECORD_BYTES - 1);
        let result = recover(records, 2);
        assert!(matches!(result, Err(ReconstructError::CorruptShare(DecodeError::TruncatedRecord))));
    }

    #[rstest]
    #[case::threshold_below_two(1, 2)]
    #[case::fewer_sources_than_threshold(3, 2)]
    fn invalid_threshold_is_rejected(#[case] threshold: u32, #[case] count: u32) {
        let records = split(&[6u8; SECRET_BYTES], 2, 3, 0x666);
        let chosen: Vec<_> = records.into_iter().take(count as usize).collect();
        let result = recover(chosen, threshold);
        assert!(matches!(result, Err(ReconstructError::InvalidThreshold)));
    }
}
