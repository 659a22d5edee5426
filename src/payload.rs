//! # 载荷帧模块
//!
//! 把秘密封装为自描述的二进制帧，或从候选数据块中解析并校验秘密。
//!
//! 帧布局 (大端序)：
//!
//! | 偏移 | 大小     | 字段    |
//! |------|----------|---------|
//! | 0    | 5        | 魔数 `STEG1` |
//! | 5    | 4        | 秘密长度 (`u32`) |
//! | 9    | 32       | 秘密的 SHA-256 摘要 |
//! | 41   | 长度     | 秘密内容 |

use crate::constants::{DIGEST_SIZE, HEADER_SIZE, MAGIC, MAGIC_SIZE, MIN_FRAME_SIZE};
use crate::error::{Result, StegoError};
use sha2::{Digest, Sha256};

/// 帧的固定头部：魔数之后的声明长度。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// 帧中声明的秘密字节数。
    pub length: u32,
}

impl FrameHeader {
    /// 从候选数据块的开头解析头部。
    ///
    /// # Errors
    ///
    /// * `TooSmall` - 数据块短于头部与摘要之和。
    /// * `NoPayload` - 前 5 个字节不是魔数。
    pub fn parse(blob: &[u8]) -> Result<Self> {
        if blob.len() < MIN_FRAME_SIZE {
            return Err(StegoError::TooSmall {
                len: blob.len(),
                min: MIN_FRAME_SIZE,
            });
        }
        if blob[..MAGIC_SIZE] != MAGIC[..] {
            return Err(StegoError::NoPayload);
        }

        let mut length = [0u8; 4];
        length.copy_from_slice(&blob[MAGIC_SIZE..HEADER_SIZE]);
        Ok(Self {
            length: u32::from_be_bytes(length),
        })
    }

    /// 编码为 9 字节的头部。
    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let mut header = [0u8; HEADER_SIZE];
        header[..MAGIC_SIZE].copy_from_slice(MAGIC);
        header[MAGIC_SIZE..].copy_from_slice(&self.length.to_be_bytes());
        header
    }

    /// 按声明长度计算的完整帧大小，在 `usize` 上饱和。
    pub fn frame_len(self) -> usize {
        MIN_FRAME_SIZE.saturating_add(self.length as usize)
    }
}

/// 为长度为 `secret_len` 的秘密构造的帧大小 (字节)。
pub fn frame_len(secret_len: usize) -> usize {
    MIN_FRAME_SIZE.saturating_add(secret_len)
}

/// 将秘密封装为帧：`魔数 || 长度 || SHA-256(秘密) || 秘密`。
///
/// # Errors
///
/// 若秘密长度超过 `u32::MAX`，返回 `SecretLengthOverflow`。
pub fn build_payload(secret: &[u8]) -> Result<Vec<u8>> {
    let length = u32::try_from(secret.len())
        .map_err(|_| StegoError::SecretLengthOverflow { len: secret.len() })?;
    let digest = Sha256::digest(secret);

    let mut frame = Vec::with_capacity(frame_len(secret.len()));
    frame.extend_from_slice(&FrameHeader { length }.to_bytes());
    frame.extend_from_slice(&digest);
    frame.extend_from_slice(secret);

    log::debug!("built frame of {} bytes for a {} byte secret", frame.len(), length);
    Ok(frame)
}

/// 解析候选数据块并返回校验通过的秘密。
///
/// 声明长度来自不可信数据，内容切片会被截断到数据块末尾；
/// 截断后的内容将在摘要比对时失败，而不会越界。
///
/// # Errors
///
/// * `TooSmall` / `NoPayload` - 见 [`FrameHeader::parse`]。
/// * `Corrupted` - 内容的摘要与帧中记录的不一致。
pub fn parse_payload(blob: &[u8]) -> Result<Vec<u8>> {
    let header = FrameHeader::parse(blob)?;

    let digest = &blob[HEADER_SIZE..HEADER_SIZE + DIGEST_SIZE];
    let end = header.frame_len().min(blob.len());
    let content = &blob[MIN_FRAME_SIZE..end];

    if Sha256::digest(content).as_slice() != digest {
        log::debug!(
            "digest mismatch: header declares {} bytes, {} available",
            header.length,
            content.len()
        );
        return Err(StegoError::Corrupted);
    }

    Ok(content.to_vec())
}
