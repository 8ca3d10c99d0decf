//! Decimal to binary/hexadecimal conversion.
//!
//! Non-negative values are written in plain positional notation. Negative
//! values are written as the two's-complement pattern `2^bits + n`, where the
//! binary width is the magnitude's bit length rounded up to a whole byte and
//! the hexadecimal width is chosen by [`NegativeHexWidth`].

use crate::domain::model::{ConversionResult, NegativeHexWidth};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Debug, Clone, Copy, Default)]
pub struct BaseConverter {
    negative_hex_width: NegativeHexWidth,
}

impl BaseConverter {
    pub fn new(negative_hex_width: NegativeHexWidth) -> Self {
        Self { negative_hex_width }
    }

    pub fn negative_hex_width(&self) -> NegativeHexWidth {
        self.negative_hex_width
    }

    pub fn convert(&self, decimal: i64) -> ConversionResult {
        ConversionResult {
            decimal,
            binary: convert_to_binary(decimal),
            hexadecimal: self.to_hexadecimal(decimal),
        }
    }

    pub fn to_hexadecimal(&self, n: i64) -> String {
        if n >= 0 {
            return render(n as u128, 16);
        }

        let magnitude = n.unsigned_abs() as u128;
        match self.negative_hex_width {
            NegativeHexWidth::Fixed { bits } => {
                let digits = (bits / 4) as usize;
                left_pad(render(twos_complement(magnitude, bits), 16), digits, 'F')
            }
            NegativeHexWidth::ByteAligned => {
                let bits = byte_aligned_width(magnitude);
                let digits = (bits / 4) as usize;
                left_pad(render(twos_complement(magnitude, bits), 16), digits, '0')
            }
        }
    }
}

/// Binary text for `n`; negative values use a byte-aligned two's complement.
pub fn convert_to_binary(n: i64) -> String {
    if n >= 0 {
        return render(n as u128, 2);
    }

    let magnitude = n.unsigned_abs() as u128;
    let bits = byte_aligned_width(magnitude);
    // A magnitude that fills its whole byte width renders short of `bits`.
    left_pad(render(twos_complement(magnitude, bits), 2), bits as usize, '0')
}

/// Hexadecimal text for `n` using the default fixed 40-bit negative width.
pub fn convert_to_hexadecimal(n: i64) -> String {
    BaseConverter::default().to_hexadecimal(n)
}

/// Number of bits needed to write `magnitude` in unsigned binary.
pub fn bit_length(magnitude: u128) -> u32 {
    u128::BITS - magnitude.leading_zeros()
}

/// Bit length rounded up to the next multiple of 8, never less than 8.
pub fn byte_aligned_width(magnitude: u128) -> u32 {
    let bits = bit_length(magnitude).max(1);
    bits.div_ceil(8) * 8
}

/// `2^bits - magnitude`, or zero when the magnitude does not fit in `bits`.
fn twos_complement(magnitude: u128, bits: u32) -> u128 {
    if bits >= u128::BITS {
        // 2^128 - m, with m never exceeding 2^63
        return magnitude.wrapping_neg();
    }
    (1u128 << bits).saturating_sub(magnitude)
}

/// Repeated division, most significant digit first. Zero renders as "0".
fn render(value: u128, radix: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    let mut remaining = value;
    while remaining > 0 {
        digits.push(DIGITS[(remaining % radix) as usize] as char);
        remaining /= radix;
    }
    digits.iter().rev().collect()
}

fn left_pad(text: String, width: usize, fill: char) -> String {
    // Zero out of the two's-complement step contributes no digits.
    let text = if text == "0" { String::new() } else { text };
    if text.len() >= width {
        return text;
    }
    let mut padded: String = std::iter::repeat(fill).take(width - text.len()).collect();
    padded.push_str(&text);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, radix: u32) -> i128 {
        i128::from_str_radix(text, radix).unwrap()
    }

    #[test]
    fn test_zero_and_small_positive() {
        assert_eq!(convert_to_binary(0), "0");
        assert_eq!(convert_to_binary(1), "1");
        assert_eq!(convert_to_binary(5), "101");
        assert_eq!(convert_to_hexadecimal(0), "0");
        assert_eq!(convert_to_hexadecimal(255), "FF");
        assert_eq!(convert_to_hexadecimal(4096), "1000");
    }

    #[test]
    fn test_negative_binary_uses_byte_aligned_width() {
        assert_eq!(convert_to_binary(-1), "11111111");
        assert_eq!(convert_to_binary(-5), "11111011");
        assert_eq!(convert_to_binary(-128), "10000000");
        // 9 bits of magnitude reserve 16
        assert_eq!(convert_to_binary(-256), "1111111100000000");
        assert_eq!(convert_to_binary(-300), "1111111011010100");
    }

    #[test]
    fn test_negative_binary_pads_when_magnitude_fills_width() {
        assert_eq!(convert_to_binary(-255), "00000001");
        assert_eq!(convert_to_binary(-129), "01111111");
    }

    #[test]
    fn test_negative_hexadecimal_fixed_width() {
        assert_eq!(convert_to_hexadecimal(-1), "FFFFFFFFFF");
        assert_eq!(convert_to_hexadecimal(-255), "FFFFFFFF01");
        assert_eq!(convert_to_hexadecimal(-(1 << 39)), "8000000000");
    }

    #[test]
    fn test_negative_hexadecimal_outside_40_bits_sign_extends() {
        // 2^40 - |n| is zero or negative here, leaving only padding
        assert_eq!(convert_to_hexadecimal(-(1 << 40)), "FFFFFFFFFF");
        assert_eq!(convert_to_hexadecimal(-(1 << 41)), "FFFFFFFFFF");
        // between 2^39 and 2^40 the short rendering is padded with F
        assert_eq!(convert_to_hexadecimal(-((1 << 40) - 1)), "FFFFFFFFF1");
    }

    #[test]
    fn test_negative_hexadecimal_byte_aligned() {
        let converter = BaseConverter::new(NegativeHexWidth::ByteAligned);
        assert_eq!(converter.to_hexadecimal(-1), "FF");
        assert_eq!(converter.to_hexadecimal(-5), "FB");
        assert_eq!(converter.to_hexadecimal(-255), "01");
        assert_eq!(converter.to_hexadecimal(-256), "FF00");
        assert_eq!(converter.to_hexadecimal(255), "FF");
    }

    #[test]
    fn test_negative_hexadecimal_custom_fixed_width() {
        let converter = BaseConverter::new(NegativeHexWidth::Fixed { bits: 16 });
        assert_eq!(converter.to_hexadecimal(-1), "FFFF");
        assert_eq!(converter.to_hexadecimal(-2), "FFFE");

        let wide = BaseConverter::new(NegativeHexWidth::Fixed { bits: 128 });
        assert_eq!(wide.to_hexadecimal(-1), "F".repeat(32));
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(convert_to_binary(i64::MAX), "1".repeat(63));
        let min = convert_to_binary(i64::MIN);
        assert_eq!(min.len(), 64);
        assert_eq!(min, format!("1{}", "0".repeat(63)));
        assert_eq!(convert_to_hexadecimal(i64::MAX), "7FFFFFFFFFFFFFFF");
        assert_eq!(convert_to_hexadecimal(i64::MIN), "FFFFFFFFFF");
    }

    #[test]
    fn test_non_negative_values_parse_back() {
        for n in (0..2000).chain([65_535, 1 << 32, 987_654_321_012]) {
            let binary = convert_to_binary(n);
            let hex = convert_to_hexadecimal(n);
            assert_eq!(parse(&binary, 2), n as i128);
            assert_eq!(parse(&hex, 16), n as i128);
            if n != 0 {
                assert!(!binary.starts_with('0'));
                assert!(!hex.starts_with('0'));
            }
        }
    }

    #[test]
    fn test_negative_values_encode_twos_complement() {
        for n in (1..5000i64).chain([65_536, 1 << 20, (1 << 39) - 3]).map(|m| -m) {
            let binary = convert_to_binary(n);
            let magnitude = n.unsigned_abs() as u128;
            let width = byte_aligned_width(magnitude);
            assert_eq!(binary.len(), width as usize);
            assert_eq!(parse(&binary, 2), (1i128 << width) + n as i128);
            if magnitude <= 1 << (width - 1) {
                assert!(binary.starts_with('1'));
            }

            let hex = convert_to_hexadecimal(n);
            assert_eq!(hex.len(), 10);
            assert!(hex.chars().all(|c| DIGITS.contains(&(c as u8))));
            assert!(matches!(hex.chars().next(), Some('8'..='9' | 'A'..='F')));
            assert_eq!(parse(&hex, 16), (1i128 << 40) + n as i128);
        }
    }

    #[test]
    fn test_bit_length_and_width() {
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(5), 3);
        assert_eq!(bit_length(256), 9);
        assert_eq!(byte_aligned_width(5), 8);
        assert_eq!(byte_aligned_width(255), 8);
        assert_eq!(byte_aligned_width(256), 16);
        assert_eq!(byte_aligned_width(1 << 63), 64);
    }

    #[test]
    fn test_convert_builds_result() {
        let result = BaseConverter::default().convert(-5);
        assert_eq!(result.decimal, -5);
        assert_eq!(result.binary, "11111011");
        assert_eq!(result.hexadecimal, "FFFFFFFFFB");
    }
}
