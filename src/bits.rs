//! # 位变换模块
//!
//! 在字节序列与位序列之间转换。位序列中每个元素是 `0` 或 `1`，
//! 每个字节内按最高有效位在前 (MSB-first) 的顺序排列。

use crate::constants::BITS_PER_BYTE;

/// 将字节序列展开为位序列，长度为 `8 * data.len()`。
pub fn bytes_to_bits(data: &[u8]) -> Vec<u8> {
    data.iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

/// 将位序列重新组合为字节序列。
///
/// 若位数不是 8 的倍数，末尾按 0 补齐，因此输出长度为 `ceil(bits.len() / 8)`。
/// 只有每个元素的最低位参与组合。
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks(BITS_PER_BYTE)
        .map(|chunk| {
            let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
            // 不足 8 位的尾块按 0 右补齐
            byte << (BITS_PER_BYTE - chunk.len())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_msb_first() {
        assert_eq!(bytes_to_bits(&[0x68]), vec![0, 1, 1, 0, 1, 0, 0, 0]);
        assert_eq!(bytes_to_bits(&[0x01, 0x80]).len(), 16);
        assert!(bytes_to_bits(&[]).is_empty());
    }

    #[test]
    fn pads_partial_tail_with_zeros() {
        assert_eq!(bits_to_bytes(&[1]), vec![0x80]);
        assert_eq!(bits_to_bytes(&[1, 0, 1]), vec![0xA0]);
        assert_eq!(bits_to_bytes(&[1, 1, 1, 1, 1, 1, 1, 1, 1]), vec![0xFF, 0x80]);
        assert!(bits_to_bytes(&[]).is_empty());
    }

    #[test]
    fn every_byte_value_survives_the_round_trip() {
        let all: Vec<u8> = (0..=u8::MAX).collect();
        assert_eq!(bits_to_bytes(&bytes_to_bits(&all)), all);
    }
}
