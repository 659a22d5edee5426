//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{DOCTORED_PREFIX, EXTRACTED_FILE_NAME};
use crate::imaging::{load_carrier, save_carrier};
use crate::payload::frame_len;
use crate::steganography::{capacity_bits, extract, hide_secret, max_secret_len};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 根据载体路径生成默认的结果图像路径：同目录下的 `doctored_<文件名>.png`。
pub fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{DOCTORED_PREFIX}{stem}.png"))
}

/// 根据隐写图像路径生成默认的输出目录：图像所在的目录。
pub fn default_output_dir(image: &Path) -> PathBuf {
    image
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// 在未指定 `--force` 时拒绝覆盖已存在的文件。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}\nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 读取载体图像和秘密文件，将秘密封装为带摘要的帧并写入像素通道的最低有效位，
/// 最后将结果保存为 PNG。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或秘密文件。
/// * 图像容量不足以容纳秘密 (`StegoError::SecretTooLarge`)。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let mut carrier = load_carrier(&args.image)?;

    let secret = fs::read(&args.secret).with_context(|| {
        format!(
            "Unable to read secret file: {}",
            args.secret.to_string_lossy().red().bold()
        )
    })?;

    log::info!(
        "hiding {} bytes ({} byte frame) in {} channel bytes",
        secret.len(),
        frame_len(secret.len()),
        carrier.channels.len()
    );

    hide_secret(&mut carrier.channels, &secret).with_context(|| {
        format!(
            "Unable to hide {} bytes in {}. \nAt most {} bytes fit in this image.",
            secret.len().to_string().red().bold(),
            args.image.to_string_lossy().red().bold(),
            max_secret_len(carrier.channels.len()).to_string().green().bold()
        )
    })?;

    save_carrier(carrier, &dest)?;

    println!(
        "File hidden successfully! ({} bytes)\nSaved as: {}",
        secret.len().to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 读取经过隐写的图像，提取并校验隐藏的帧，将恢复的秘密写入输出目录下的 `extracted_file`。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 图像中没有载荷，或载荷已损坏 (`StegoError` 的相应变体)。
/// * 无法写入到目标文件。
pub fn handle_recover(args: RecoverArgs) -> Result<PathBuf> {
    let dir = args
        .output
        .unwrap_or_else(|| default_output_dir(&args.image));
    let out_path = dir.join(EXTRACTED_FILE_NAME);
    ensure_writable(&out_path, args.force)?;

    let carrier = load_carrier(&args.image)?;

    let secret = extract(&carrier.channels).with_context(|| {
        format!(
            "Failed to recover a hidden file from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&out_path, &secret).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            out_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Extracted {} bytes\nSaved as: {}",
        secret.len().to_string().green().bold(),
        out_path.to_string_lossy().green().bold()
    );

    Ok(out_path)
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 报告图像的像素数、位容量以及最多能隐藏的秘密字节数，并返回后者。
///
/// # Errors
///
/// 无法读取或解码图像时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<usize> {
    let carrier = load_carrier(&args.image)?;
    let max = max_secret_len(carrier.channels.len());

    println!(
        "{}: {}x{} ({} pixels), {} bits of capacity, up to {} bytes can be hidden",
        args.image.to_string_lossy().bold(),
        carrier.width,
        carrier.height,
        carrier.pixel_count(),
        capacity_bits(&carrier.channels).to_string().green(),
        max.to_string().green().bold()
    );

    Ok(max)
}
