//! Resize and re-encode a picked photo before upload.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Upload width; the crop keeps the image square at this size.
pub const TARGET_WIDTH: u32 = 900;

/// Re-encoded copy of the picked photo: a local file for the preview and
/// the same bytes as base64 for the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedImage {
    pub path: PathBuf,
    pub base64: String,
}

/// Center-crop the photo square, resize to [`TARGET_WIDTH`], and
/// re-encode as maximum-quality JPEG. Pixel output is deterministic for
/// identical input.
pub fn prepare_image(source: &Path) -> Result<PreparedImage> {
    let img = image::open(source)
        .with_context(|| format!("não foi possível abrir a imagem: {}", source.display()))?;
    let resized =
        crop_square(img).resize_exact(TARGET_WIDTH, TARGET_WIDTH, FilterType::Triangle);
    let bytes = encode_jpeg(&resized)?;

    let path = output_path(source);
    fs::write(&path, &bytes)
        .with_context(|| format!("não foi possível gravar {}", path.display()))?;
    tracing::debug!("imagem preparada em {}", path.display());

    Ok(PreparedImage {
        path,
        base64: BASE64.encode(&bytes),
    })
}

fn crop_square(img: DynamicImage) -> DynamicImage {
    let (w, h) = (img.width(), img.height());
    let side = w.min(h);
    img.crop_imm((w - side) / 2, (h - side) / 2, side, side)
}

fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, 100);
    encoder
        .encode_image(&img.to_rgb8())
        .context("falha ao codificar a imagem como JPEG")?;
    Ok(out)
}

fn output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("prato");
    std::env::temp_dir().join(format!("prato-{stem}.jpg"))
}
