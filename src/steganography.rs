//! # 隐写核心算法模块
//!
//! 在像素通道数组 (行优先、通道交错，如 R,G,B,R,G,B,...) 的最低有效位中
//! 按顺序写入或读取载荷位。每个通道字节只承载 1 位，且只改动其最低位。

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::constants::{BITS_PER_BYTE, MIN_FRAME_SIZE};
use crate::error::{Result, StegoError};
use crate::payload::{FrameHeader, build_payload, parse_payload};

/// 通道数组可承载的位数，等于通道字节数。
pub fn capacity_bits(channels: &[u8]) -> usize {
    channels.len()
}

/// 拥有 `channel_count` 个通道字节的图像最多能隐藏的秘密字节数。
pub fn max_secret_len(channel_count: usize) -> usize {
    (channel_count / BITS_PER_BYTE).saturating_sub(MIN_FRAME_SIZE)
}

/// 将载荷位依次写入 `pix[0..bits.len()]` 的最低有效位。
///
/// 只修改每个被触及字节的最低位；高 7 位以及 `bits.len()` 之后的字节保持不变。
///
/// # Errors
///
/// 若位数超过通道容量，返回 `SecretTooLarge`，此时 `pix` 未被改动。
pub fn embed(pix: &mut [u8], bits: &[u8]) -> Result<()> {
    if bits.len() > pix.len() {
        return Err(StegoError::SecretTooLarge {
            required: bits.len(),
            available: pix.len(),
        });
    }

    for (byte, &bit) in pix.iter_mut().zip(bits) {
        *byte = (*byte & 0xFE) | (bit & 1);
    }

    Ok(())
}

/// 封装秘密并嵌入通道数组，返回写入的位数。
///
/// # Errors
///
/// 见 [`build_payload`] 与 [`embed`]。
pub fn hide_secret(pix: &mut [u8], secret: &[u8]) -> Result<usize> {
    let bits = bytes_to_bits(&build_payload(secret)?);
    log::debug!(
        "embedding {} payload bits into {} channel bytes",
        bits.len(),
        pix.len()
    );
    embed(pix, &bits)?;
    Ok(bits.len())
}

/// 读取前 `byte_count` 个字节对应的最低有效位并组合为字节。
///
/// 若通道数组不足 `8 * byte_count` 字节，则读到末尾为止，
/// 最后不足 8 位的部分按 0 补齐。
pub fn read_lsb_bytes(pix: &[u8], byte_count: usize) -> Vec<u8> {
    let bit_count = byte_count.saturating_mul(BITS_PER_BYTE).min(pix.len());
    let bits: Vec<u8> = pix[..bit_count].iter().map(|&byte| byte & 1).collect();
    bits_to_bytes(&bits)
}

/// 从通道数组中提取并校验隐藏的秘密。
///
/// 先只读取头部与摘要 (前 328 个通道字节)，确认魔数后再按声明长度读取内容。
/// 送入 [`parse_payload`] 的数据块总是完整扫描结果的前缀，因此错误分类与
/// 读取整个数组时完全一致。
///
/// # Errors
///
/// `TooSmall`、`NoPayload` 或 `Corrupted`，原样来自 [`parse_payload`]。
pub fn extract(pix: &[u8]) -> Result<Vec<u8>> {
    let prefix = read_lsb_bytes(pix, MIN_FRAME_SIZE);
    let header = FrameHeader::parse(&prefix)?;
    log::debug!("found frame header declaring {} bytes", header.length);

    let blob = read_lsb_bytes(pix, header.frame_len());
    parse_payload(&blob)
}
