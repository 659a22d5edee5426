//! # 图像读写模块
//!
//! 负责在图像文件与像素通道数组之间转换。载体统一转换为 RGB8 (每像素 3 个通道，不含 alpha)，
//! 结果图像总是以无损的 PNG 格式保存，因为有损压缩会破坏最低有效位平面。

use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageFormat, RgbImage};
use std::path::Path;

use crate::constants::CHANNELS_PER_PIXEL;

/// 解码后的载体图像：尺寸以及行优先、通道交错的像素通道数组。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    pub width: u32,
    pub height: u32,
    pub channels: Vec<u8>,
}

impl Carrier {
    /// 像素总数。
    pub fn pixel_count(&self) -> usize {
        self.channels.len() / CHANNELS_PER_PIXEL
    }
}

/// 读取任意受支持格式的图像，并转换为 RGB8 像素通道数组。
///
/// # Errors
///
/// 文件无法打开或无法解码时返回错误。
pub fn load_carrier(path: &Path) -> Result<Carrier> {
    let rgb = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let (width, height) = rgb.dimensions();
    log::debug!(
        "decoded {}x{} carrier from {}",
        width,
        height,
        path.display()
    );

    Ok(Carrier {
        width,
        height,
        channels: rgb.into_raw(),
    })
}

/// 将像素通道数组编码为 PNG 并写入 `path`。
///
/// # Errors
///
/// 通道数组与尺寸不符，或写入失败时返回错误。
pub fn save_carrier(carrier: Carrier, path: &Path) -> Result<()> {
    let Carrier {
        width,
        height,
        channels,
    } = carrier;

    let image = RgbImage::from_raw(width, height, channels).with_context(|| {
        format!(
            "Pixel data does not match a {}x{} RGB image.",
            width.to_string().red().bold(),
            height.to_string().red().bold()
        )
    })?;

    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                path.to_string_lossy().red().bold()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn png_round_trip_keeps_every_channel_byte() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("carrier.png");
        let channels: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 7) as u8).collect();
        let carrier = Carrier {
            width: 4,
            height: 3,
            channels,
        };

        save_carrier(carrier.clone(), &path)?;
        let loaded = load_carrier(&path)?;

        assert_eq!(loaded, carrier);
        assert_eq!(loaded.pixel_count(), 12);
        Ok(())
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let dir = tempdir().unwrap();
        let carrier = Carrier {
            width: 10,
            height: 10,
            channels: vec![0; 5],
        };
        assert!(save_carrier(carrier, &dir.path().join("bad.png")).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_carrier(&dir.path().join("missing.png")).unwrap_err();
        assert!(err.to_string().contains("Unable to read image file"));
    }
}
