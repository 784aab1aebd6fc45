// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use tracing::warn;

use qlink_core::Bit;

/// Append a 0 bit when the stream has odd length.
pub fn pad_to_even(mut bits: Vec<Bit>) -> Vec<Bit> {
    if bits.len() % 2 != 0 {
        warn!("Received odd number of bits ({}); adding padding", bits.len());
        bits.push(0);
    }
    bits
}

/// Remove exactly one trailing bit when the stream has odd length.
///
/// Demodulator output is always even, so on that path this never fires.
pub fn strip_padding(mut bits: Vec<Bit>) -> Vec<Bit> {
    if bits.len() % 2 != 0 {
        bits.pop();
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_odd_streams_with_zero() {
        assert_eq!(pad_to_even(vec![1, 1, 1]), vec![1, 1, 1, 0]);
        assert_eq!(pad_to_even(vec![1, 1]), vec![1, 1]);
        assert!(pad_to_even(Vec::new()).is_empty());
    }

    #[test]
    fn padding_twice_equals_padding_once() {
        let once = pad_to_even(vec![0, 1, 1, 0, 1]);
        assert_eq!(pad_to_even(once.clone()), once);
    }

    #[test]
    fn strip_is_a_no_op_on_even_input() {
        assert_eq!(strip_padding(vec![1, 0, 1, 0]), vec![1, 0, 1, 0]);
        assert!(strip_padding(Vec::new()).is_empty());
    }

    #[test]
    fn strip_is_idempotent_on_odd_input() {
        let once = strip_padding(vec![1, 0, 1, 1, 0, 0, 1]);
        assert_eq!(once, vec![1, 0, 1, 1, 0, 0]);
        assert_eq!(strip_padding(once.clone()), once);
    }
}
