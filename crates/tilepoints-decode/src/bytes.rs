//! Little-endian conversion between transport byte buffers and typed values.

use crate::error::{DecodeError, DecodeResult};

/// Read a buffer of little-endian `f64` values.
pub fn f64s_from_le_bytes(bytes: &[u8]) -> DecodeResult<Vec<f64>> {
    let chunks = bytes.chunks_exact(8);
    if !chunks.remainder().is_empty() {
        return Err(DecodeError::unaligned_bytes(bytes.len(), 8));
    }
    Ok(chunks
        .map(|chunk| {
            let mut arr = [0_u8; 8];
            arr.copy_from_slice(chunk);
            f64::from_le_bytes(arr)
        })
        .collect())
}

/// Read a buffer of little-endian `u16` values.
pub fn u16s_from_le_bytes(bytes: &[u8]) -> DecodeResult<Vec<u16>> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return Err(DecodeError::unaligned_bytes(bytes.len(), 2));
    }
    Ok(chunks
        .map(|chunk| {
            let mut arr = [0_u8; 2];
            arr.copy_from_slice(chunk);
            u16::from_le_bytes(arr)
        })
        .collect())
}

#[must_use]
pub fn f64s_to_le_bytes(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[must_use]
pub fn u16s_to_le_bytes(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MalformedInput;

    #[test]
    fn reads_little_endian_f64() {
        let mut bytes = 1.5_f64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&(-2.0_f64).to_le_bytes());
        assert_eq!(f64s_from_le_bytes(&bytes).unwrap(), vec![1.5, -2.0]);
    }

    #[test]
    fn reads_little_endian_u16() {
        assert_eq!(
            u16s_from_le_bytes(&[0x01, 0x00, 0xff, 0x7f]).unwrap(),
            vec![1, 32767]
        );
    }

    #[test]
    fn rejects_partial_elements() {
        assert_eq!(
            u16s_from_le_bytes(&[1, 2, 3]).unwrap_err(),
            DecodeError::MalformedInput(MalformedInput::UnalignedBytes { len: 3, width: 2 })
        );
        assert_eq!(
            f64s_from_le_bytes(&[0; 12]).unwrap_err(),
            DecodeError::MalformedInput(MalformedInput::UnalignedBytes { len: 12, width: 8 })
        );
    }

    #[test]
    fn empty_buffers_are_aligned() {
        assert!(f64s_from_le_bytes(&[]).unwrap().is_empty());
        assert!(u16s_from_le_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn writes_what_it_reads() {
        let values = [0.25, 6_378_137.0];
        assert_eq!(
            f64s_from_le_bytes(&f64s_to_le_bytes(&values)).unwrap(),
            values
        );
        assert_eq!(u16s_to_le_bytes(&[0x0102]), vec![0x02, 0x01]);
    }
}
