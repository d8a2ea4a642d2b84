//! MRAO channel packing.
//!
//! Merges metallic, roughness, and ambient-occlusion maps into one RGB image
//! (metallic in R, roughness in G, AO in B). Absent maps fall back to
//! constant defaults: non-metallic, fully rough, unoccluded.
//!
//! Sources are not resized. Pixels of the destination that fall outside a
//! smaller source's bounds take that channel's default; supplying sources
//! sized differently from the reference is a caller error.

use std::io::Write;
use std::path::Path;

use image::{RgbImage, RgbaImage};
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::error::{MaterialError, MaterialResult};

/// Channel default for an absent metallic map.
pub const METALLIC_DEFAULT: u8 = 0;
/// Channel default for an absent roughness map.
pub const ROUGHNESS_DEFAULT: u8 = 255;
/// Channel default for an absent ambient-occlusion map.
pub const AO_DEFAULT: u8 = 255;

/// Optional source images for the three MRAO channels.
///
/// Each source contributes its first (red) channel; grayscale maps decode to
/// RGBA with the gray value replicated, so the red channel is the map value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MraoSources<'a> {
    pub metallic: Option<&'a RgbaImage>,
    pub roughness: Option<&'a RgbaImage>,
    pub ao: Option<&'a RgbaImage>,
}

/// Packs the MRAO channels into a single RGB image of `reference_size`.
///
/// The reference size comes from the material's own diffuse map, which
/// defines the texel layout the engine expects for that material.
pub fn pack_mrao(reference_size: (u32, u32), sources: MraoSources<'_>) -> RgbImage {
    let (width, height) = reference_size;
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            channel_sample(sources.metallic, x, y, METALLIC_DEFAULT),
            channel_sample(sources.roughness, x, y, ROUGHNESS_DEFAULT),
            channel_sample(sources.ao, x, y, AO_DEFAULT),
        ])
    })
}

fn channel_sample(source: Option<&RgbaImage>, x: u32, y: u32, default: u8) -> u8 {
    match source {
        Some(img) if x < img.width() && y < img.height() => img.get_pixel(x, y).0[0],
        _ => default,
    }
}

/// Decodes a source image to RGBA.
pub fn load_rgba(path: &Path) -> MaterialResult<RgbaImage> {
    let img = image::open(path).map_err(|source| MaterialError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Writes an RGB image as a PNG with fixed encoder settings.
///
/// Compression and filter are pinned so the same packed data always produces
/// the same bytes on disk.
pub fn write_png(image: &RgbImage, path: &Path) -> MaterialResult<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_png_to_writer(image, writer)
}

/// Writes an RGB image as a PNG to any writer.
pub fn write_png_to_writer<W: Write>(image: &RgbImage, writer: W) -> MaterialResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.as_raw())?;

    Ok(())
}
