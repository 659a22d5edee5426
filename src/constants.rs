/// 帧头部的魔数，标识一个有效的隐写载荷。
pub const MAGIC: &[u8; 5] = b"STEG1";

/// 魔数所占的字节数。
pub const MAGIC_SIZE: usize = MAGIC.len();

/// 帧头部大小 (字节)：5 字节魔数 + 4 字节大端序长度。
pub const HEADER_SIZE: usize = MAGIC_SIZE + 4;

/// SHA-256 摘要的字节数。
pub const DIGEST_SIZE: usize = 32;

/// 一个帧的最小字节数 (即空秘密的帧大小)。
/// 小于该值的候选数据块不可能包含载荷。
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + DIGEST_SIZE;

/// 每个通道字节承载的位数。
/// 一个载荷字节需要 8 个通道字节。
pub const BITS_PER_BYTE: usize = 8;

/// 每个像素的颜色通道数 (RGB，不含 alpha)。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const DOCTORED_PREFIX: &str = "doctored_";

/// 恢复出的秘密文件的固定文件名。
pub const EXTRACTED_FILE_NAME: &str = "extracted_file";
