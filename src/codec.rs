//! Image decoding and encoding behind a narrow capability trait.
//!
//! The variant generator only needs three things from an imaging library:
//! turn bytes into pixels, resample pixels, and turn pixels back into bytes.
//! [`ImageCodec`] captures the first and last so the orchestration can be
//! exercised with a fake codec; resampling stays a plain function over
//! [`Raster`].

use crate::error::{Result, VariantError};
use crate::formats::OutputFormat;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use std::borrow::Cow;

/// Decoded image: interleaved 8-bit samples, RGBA when `has_alpha`, RGB otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    pub pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, has_alpha: bool, pixels: Vec<u8>) -> Result<Self> {
        let channels = if has_alpha { 4 } else { 3 };
        let expected = width as usize * height as usize * channels;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(VariantError::InvalidRaster {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            has_alpha,
            pixels,
        })
    }

    /// A raster filled with a single color, mostly useful for tests and benches.
    pub fn filled(width: u32, height: u32, color: &[u8]) -> Result<Self> {
        let has_alpha = match color.len() {
            3 => false,
            4 => true,
            len => return Err(VariantError::InvalidRaster { width, height, len }),
        };
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * color.len())
            .collect();
        Self::new(width, height, has_alpha, pixels)
    }

    /// Drops the alpha channel. Color samples are kept as they are, not
    /// composited against a background.
    pub fn flatten(&self) -> Raster {
        if !self.has_alpha {
            return self.clone();
        }

        let pixels = self
            .pixels
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        Raster {
            width: self.width,
            height: self.height,
            has_alpha: false,
            pixels,
        }
    }

    fn color_type(&self) -> ExtendedColorType {
        if self.has_alpha {
            ExtendedColorType::Rgba8
        } else {
            ExtendedColorType::Rgb8
        }
    }
}

pub trait ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Raster>;

    fn encode(&self, raster: &Raster, format: OutputFormat, quality: u8) -> Result<Vec<u8>>;
}

/// Production codec backed by the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Raster> {
        let img = image::load_from_memory(bytes)?;
        let (width, height) = (img.width(), img.height());

        if img.color().has_alpha() {
            Raster::new(width, height, true, img.to_rgba8().into_raw())
        } else {
            Raster::new(width, height, false, img.to_rgb8().into_raw())
        }
    }

    fn encode(&self, raster: &Raster, format: OutputFormat, quality: u8) -> Result<Vec<u8>> {
        let raster = if format.keeps_alpha() {
            Cow::Borrowed(raster)
        } else {
            Cow::Owned(raster.flatten())
        };
        let (pixels, width, height) = (&raster.pixels, raster.width, raster.height);
        let mut buf = Vec::new();

        match format {
            OutputFormat::Jpeg => {
                JpegEncoder::new_with_quality(&mut buf, quality).write_image(
                    pixels,
                    width,
                    height,
                    raster.color_type(),
                )?;
            }
            OutputFormat::WebP => {
                // Lossy VP8; alpha goes into a separate ALPH chunk.
                let encoder = if raster.has_alpha {
                    webp::Encoder::from_rgba(pixels, width, height)
                } else {
                    webp::Encoder::from_rgb(pixels, width, height)
                };
                buf.extend_from_slice(&encoder.encode(f32::from(quality)));
            }
        }

        Ok(buf)
    }
}

/// Resamples to exactly `width` x `height` with a Lanczos3 filter.
pub fn resize_raster(raster: &Raster, width: u32, height: u32) -> Result<Raster> {
    let invalid = || VariantError::InvalidRaster {
        width: raster.width,
        height: raster.height,
        len: raster.pixels.len(),
    };

    let pixels = if raster.has_alpha {
        let buf = RgbaImage::from_raw(raster.width, raster.height, raster.pixels.clone())
            .ok_or_else(invalid)?;
        imageops::resize(&buf, width, height, FilterType::Lanczos3).into_raw()
    } else {
        let buf = RgbImage::from_raw(raster.width, raster.height, raster.pixels.clone())
            .ok_or_else(invalid)?;
        imageops::resize(&buf, width, height, FilterType::Lanczos3).into_raw()
    };

    Raster::new(width, height, raster.has_alpha, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn test_raster_rejects_wrong_length() {
        let result = Raster::new(2, 2, false, vec![0; 11]);
        assert!(matches!(
            result,
            Err(VariantError::InvalidRaster { width: 2, height: 2, len: 11 })
        ));
    }

    #[test]
    fn test_raster_rejects_zero_dimensions() {
        assert!(Raster::new(0, 4, false, vec![]).is_err());
    }

    #[test]
    fn test_flatten_drops_alpha() {
        let raster = Raster::new(2, 1, true, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let flat = raster.flatten();
        assert!(!flat.has_alpha);
        assert_eq!(flat.pixels, vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(flat.pixels.len(), 2 * 3);
    }

    #[test]
    fn test_resize_raster_dimensions() {
        let raster = Raster::filled(200, 100, &[10, 20, 30]).unwrap();
        let resized = resize_raster(&raster, 50, 25).unwrap();
        assert_eq!((resized.width, resized.height), (50, 25));
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_raster_upscale_keeps_alpha() {
        let raster = Raster::filled(10, 5, &[10, 20, 30, 128]).unwrap();
        let resized = resize_raster(&raster, 40, 20).unwrap();
        assert!(resized.has_alpha);
        assert_eq!((resized.width, resized.height), (40, 20));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = ImageCrateCodec.decode(b"definitely not an image");
        assert!(matches!(result, Err(VariantError::ImageProcessing(_))));
    }

    #[test]
    fn test_jpeg_encode_has_no_alpha() {
        let raster = Raster::filled(16, 8, &[200, 100, 50, 128]).unwrap();
        let bytes = ImageCrateCodec.encode(&raster, OutputFormat::Jpeg, 85).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_webp_encode_keeps_alpha() {
        let raster = Raster::filled(16, 8, &[200, 100, 50, 128]).unwrap();
        let bytes = ImageCrateCodec.encode(&raster, OutputFormat::WebP, 85).unwrap();

        let decoded = ImageCrateCodec.decode(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 8));
        assert!(decoded.has_alpha);
    }

    fn gradient(width: u32, height: u32) -> Raster {
        let pixels = (0..height)
            .flat_map(|y| {
                (0..width).flat_map(move |x| [(x * 7) as u8, (y * 13) as u8, ((x ^ y) * 5) as u8])
            })
            .collect();
        Raster::new(width, height, false, pixels).unwrap()
    }

    #[test]
    fn test_webp_encode_is_lossy_vp8() {
        let bytes = ImageCrateCodec
            .encode(&gradient(64, 48), OutputFormat::WebP, 85)
            .unwrap();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
        assert_eq!(&bytes[12..16], b"VP8 ");
    }

    #[test]
    fn test_webp_encode_honors_quality() {
        let raster = gradient(64, 48);
        let high = ImageCrateCodec.encode(&raster, OutputFormat::WebP, 85).unwrap();
        let low = ImageCrateCodec.encode(&raster, OutputFormat::WebP, 10).unwrap();

        assert_ne!(high, low);
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_decode_png_roundtrip_dimensions() {
        let img = RgbImage::from_pixel(30, 12, image::Rgb([1, 2, 3]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let raster = ImageCrateCodec.decode(&bytes).unwrap();
        assert_eq!((raster.width, raster.height), (30, 12));
        assert!(!raster.has_alpha);
    }
}
