//! Field-element encoding for the lattice-signature proof backend.
//!
//! Independent of the CL machinery: elements of `Z_Q` are packed as three little-endian
//! bytes each.

use crate::{Error, Result};

/// Modulus of the lattice field.
pub const Q: i64 = 7_340_033;

/// Low-bits range of [`decompose`].
pub const GAMMA2: i64 = 65_536;

const FE_BYTES: usize = 3;
const FE_LIMIT: i64 = 1 << 24;

/// Packs field elements as 3 little-endian bytes each.
///
/// # Errors
///
/// Returns [`Error::Encoding`] for elements outside `[0, 2^24)`.
pub fn pack_fes(fes: &[i64]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(fes.len() * FE_BYTES);
    for (i, &fe) in fes.iter().enumerate() {
        if !(0..FE_LIMIT).contains(&fe) {
            return Err(Error::Encoding(format!(
                "element {i} ({fe}) does not fit in {FE_BYTES} bytes"
            )));
        }
        let bytes = fe.to_le_bytes();
        out.extend_from_slice(&bytes[..FE_BYTES]);
    }
    Ok(out)
}

/// Inverse of [`pack_fes`], reducing each element modulo `q`.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the length is not a multiple of 3 or `q` is not
/// positive.
pub fn unpack_fes(bytes: &[u8], q: i64) -> Result<Vec<i64>> {
    if q <= 0 {
        return Err(Error::Encoding(format!("modulus {q} is not positive")));
    }
    if bytes.len() % FE_BYTES != 0 {
        return Err(Error::Encoding(format!(
            "length {} is not a multiple of {FE_BYTES}",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(FE_BYTES)
        .map(|chunk| {
            let fe = i64::from(chunk[0]) | (i64::from(chunk[1]) << 8) | (i64::from(chunk[2]) << 16);
            fe % q
        })
        .collect())
}

/// Splits `r` into `(r0, r1)` with `r = r1 * 2 * GAMMA2 + r0` and `r0` centered.
///
/// When `r - r0 = Q - 1` the high part wraps to zero and `r0` absorbs the difference.
pub fn decompose(r: i64) -> (i64, i64) {
    let mut r0 = r % (2 * GAMMA2);
    if r0 > GAMMA2 {
        r0 -= 2 * GAMMA2;
    }
    if r - r0 == Q - 1 {
        return ((r0 - 1) % Q, 0);
    }
    (r0 % Q, ((r - r0) / (2 * GAMMA2)) % Q)
}

/// Encodes arbitrary bytes as base-257 pairs.
///
/// Each byte is shifted up by one before pairing so that trailing zero bytes still change
/// the output; an odd-length input is padded with a zero. The shift wraps within a byte,
/// so `0xff` maps to `0` just like the padding.
pub fn unpack_fes_loose(bytes: &[u8]) -> Vec<u32> {
    let mut shifted: Vec<u32> = bytes
        .iter()
        .map(|&b| u32::from(b.wrapping_add(1)))
        .collect();
    if shifted.len() % 2 == 1 {
        shifted.push(0);
    }
    shifted
        .chunks_exact(2)
        .map(|pair| pair[0] + 257 * pair[1])
        .collect()
}
