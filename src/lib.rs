//! # stegkit 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：位变换、带 SHA-256 校验的载荷帧、
//! 嵌入与提取算法，以及围绕它们的图像读写和命令处理。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod imaging;
pub mod payload;
pub mod steganography;

pub use error::{Result, StegoError};
