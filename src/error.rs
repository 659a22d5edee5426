//! # 错误类型模块
//!
//! 定义隐写核心 (位变换、帧封装、嵌入与提取) 可能返回的全部错误。
//! 每种错误都是独立可匹配的变体，由调用方决定如何呈现给用户。

use thiserror::Error;

/// 隐写核心操作的结果类型。
pub type Result<T> = std::result::Result<T, StegoError>;

/// 隐写核心操作可能发生的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// 帧的位长度超出了载体图像的通道容量。
    #[error("Secret too large for this image! (requires {required} bits, capacity is {available} bits)")]
    SecretTooLarge { required: usize, available: usize },

    /// 秘密长度无法用 32 位无符号整数表示。
    #[error("Secret of {len} bytes exceeds the 4 GiB frame length limit")]
    SecretLengthOverflow { len: usize },

    /// 候选数据块比最小帧 (头部 + 摘要) 还短。
    #[error("Payload too small ({len} bytes, at least {min} required)")]
    TooSmall { len: usize, min: usize },

    /// 魔数不匹配，图像中没有隐藏的载荷。
    #[error("No payload found")]
    NoPayload,

    /// 内容的 SHA-256 摘要与帧中记录的不一致。
    #[error("Corrupted data or wrong extraction")]
    Corrupted,
}
