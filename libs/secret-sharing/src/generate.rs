//! Share generation.

use crate::{codec, errors::GenerateError, share::Share, SECRET_BYTES};
use math_lib::{element::FieldElement, polynomial::Polynomial};
use rand::{CryptoRng, Rng};
use std::io::Write;

/// Splits a secret into `count` shares, any `threshold` of which recover it.
///
/// The secret becomes the constant term of a polynomial of degree `threshold - 1` whose
/// remaining coefficients are drawn uniformly at random; each share is the polynomial's
/// value at a uniformly random nonzero abscissa. The polynomial and its coefficients do
/// not outlive this call.
pub fn generate_shares<R>(
    secret: &[u8; SECRET_BYTES],
    threshold: u32,
    count: u32,
    rng: &mut R,
) -> Result<Vec<Share>, GenerateError>
where
    R: Rng + CryptoRng,
{
    if threshold < 2 || count < 2 || count < threshold {
        return Err(GenerateError::InvalidParameters);
    }
    let mut polynomial = Polynomial::new(vec![FieldElement::from_le_bytes(secret)]);
    for _ in 1..threshold {
        polynomial.add_coefficient(FieldElement::gen_random_with_rng(rng));
    }
    let mut shares = Vec::with_capacity(count as usize);
    for _ in 0..count {
        shares.push(evaluate_at_random_abscissa(&polynomial, rng));
    }
    Ok(shares)
}

/// Draws a random abscissa and evaluates the polynomial there.
///
/// Abscissas are uniformly random rather than sequential, so a share record does not
/// reveal its position in the batch; the abscissa-collision chance this leaves is about
/// n * 2^-256. A zero abscissa is redrawn: the polynomial's value there is the secret
/// itself. Candidates whose coordinates exceed the record's 32-byte fields (elements in
/// [2^256, p)) are redrawn as well.
fn evaluate_at_random_abscissa<R>(polynomial: &Polynomial, rng: &mut R) -> Share
where
    R: Rng + CryptoRng,
{
    loop {
        let x = FieldElement::gen_random_with_rng(rng);
        if x.is_zero() {
            continue;
        }
        let y = polynomial.eval(&x);
        if x.to_le_bytes().is_err() || y.to_le_bytes().is_err() {
            continue;
        }
        return Share::new(x, y);
    }
}

/// Splits a secret and writes one serialized share record per sink.
///
/// The number of shares produced is the number of sinks. A write failure surfaces
/// immediately and is not retried; records already written to earlier sinks are not
/// rolled back.
pub fn generate<R, W>(
    secret: &[u8; SECRET_BYTES],
    threshold: u32,
    sinks: &mut [W],
    rng: &mut R,
) -> Result<(), GenerateError>
where
    R: Rng + CryptoRng,
    W: Write,
{
    let count = u32::try_from(sinks.len()).map_err(|_| GenerateError::InvalidParameters)?;
    let shares = generate_shares(secret, threshold, count, rng)?;
    for (share, sink) in shares.iter().zip(sinks.iter_mut()) {
        let record = codec::encode(share)?;
        sink.write_all(&record)?;
    }
    Ok(())
}
