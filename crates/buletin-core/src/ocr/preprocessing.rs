//! Image enhancement applied before text recognition.

use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::models::config::PreprocessConfig;

/// Smoothing kernel used as the reference image for the sharpness blend.
const SMOOTH_KERNEL: [[f32; 3]; 3] = [[1.0, 1.0, 1.0], [1.0, 5.0, 1.0], [1.0, 1.0, 1.0]];
const SMOOTH_KERNEL_SUM: f32 = 13.0;

/// Enhances card photos for recognition: contrast boost followed by a
/// sharpness boost, both as blends with a fixed factor (1.0 = unchanged).
pub struct ImagePreprocessor {
    contrast: f32,
    sharpness: f32,
}

impl ImagePreprocessor {
    /// Create a preprocessor with the default 1.5x contrast and sharpness.
    pub fn new() -> Self {
        let defaults = PreprocessConfig::default();
        Self {
            contrast: defaults.contrast,
            sharpness: defaults.sharpness,
        }
    }

    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            contrast: config.contrast,
            sharpness: config.sharpness,
        }
    }

    /// Set the contrast factor.
    pub fn with_contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }

    /// Set the sharpness factor.
    pub fn with_sharpness(mut self, factor: f32) -> Self {
        self.sharpness = factor;
        self
    }

    /// Normalize to three-channel RGB and apply both enhancements.
    ///
    /// Output dimensions equal the input's.
    pub fn prepare(&self, image: &DynamicImage) -> RgbImage {
        let rgb = image.to_rgb8();
        debug!(
            "Preprocessing {}x{} image (contrast {}, sharpness {})",
            rgb.width(),
            rgb.height(),
            self.contrast,
            self.sharpness
        );

        let contrasted = self.enhance_contrast(&rgb);
        self.enhance_sharpness(&contrasted)
    }

    /// Blend every channel toward/away from the image's mean luminance.
    fn enhance_contrast(&self, image: &RgbImage) -> RgbImage {
        let mean = mean_luminance(image);
        let mut result = RgbImage::new(image.width(), image.height());

        for (x, y, pixel) in image.enumerate_pixels() {
            let mut out = [0u8; 3];
            for c in 0..3 {
                out[c] = blend(mean, pixel[c] as f32, self.contrast);
            }
            result.put_pixel(x, y, Rgb(out));
        }

        result
    }

    /// Blend every pixel away from a 3x3 smoothing of the image.
    ///
    /// The one-pixel border has no full neighborhood and is copied through
    /// unchanged.
    fn enhance_sharpness(&self, image: &RgbImage) -> RgbImage {
        let (width, height) = image.dimensions();
        let mut result = RgbImage::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let pixel = *image.get_pixel(x, y);

                if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                    result.put_pixel(x, y, pixel);
                    continue;
                }

                let mut out = [0u8; 3];
                for c in 0..3 {
                    let mut smooth = 0.0f32;
                    for (ky, row) in SMOOTH_KERNEL.iter().enumerate() {
                        for (kx, weight) in row.iter().enumerate() {
                            let sample =
                                image.get_pixel(x + kx as u32 - 1, y + ky as u32 - 1)[c] as f32;
                            smooth += sample * weight;
                        }
                    }
                    smooth /= SMOOTH_KERNEL_SUM;
                    out[c] = blend(smooth, pixel[c] as f32, self.sharpness);
                }

                result.put_pixel(x, y, Rgb(out));
            }
        }

        result
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpolate from `base` toward `value` by `factor` and clamp to u8 range.
fn blend(base: f32, value: f32, factor: f32) -> u8 {
    (base + factor * (value - base)).round().clamp(0.0, 255.0) as u8
}

/// Mean perceptual luminance over the whole image.
fn mean_luminance(image: &RgbImage) -> f32 {
    let mut sum = 0.0f64;
    for pixel in image.pixels() {
        sum += 0.299 * pixel[0] as f64 + 0.587 * pixel[1] as f64 + 0.114 * pixel[2] as f64;
    }

    let count = (image.width() as u64 * image.height() as u64).max(1);
    (sum / count as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform_image(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    #[test]
    fn test_dimensions_preserved() {
        let image = DynamicImage::ImageRgb8(uniform_image(17, 9, 120));
        let prepared = ImagePreprocessor::new().prepare(&image);
        assert_eq!(prepared.dimensions(), (17, 9));
    }

    #[test]
    fn test_factor_one_is_identity() {
        let mut source = RgbImage::new(8, 8);
        for (x, y, pixel) in source.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 31) as u8, (y * 29) as u8, ((x + y) * 13) as u8]);
        }

        let preprocessor = ImagePreprocessor::new().with_contrast(1.0).with_sharpness(1.0);
        let prepared = preprocessor.prepare(&DynamicImage::ImageRgb8(source.clone()));
        assert_eq!(prepared, source);
    }

    #[test]
    fn test_uniform_image_is_contrast_fixed_point() {
        let source = uniform_image(6, 6, 90);
        let preprocessor = ImagePreprocessor::new();
        let prepared = preprocessor.prepare(&DynamicImage::ImageRgb8(source.clone()));
        assert_eq!(prepared, source);
    }

    #[test]
    fn test_contrast_spreads_values_from_mean() {
        // Half dark, half bright: boosting contrast pushes both halves
        // further from the mean.
        let mut source = RgbImage::new(4, 2);
        for (x, _, pixel) in source.enumerate_pixels_mut() {
            let value = if x < 2 { 80 } else { 160 };
            *pixel = Rgb([value, value, value]);
        }

        let preprocessor = ImagePreprocessor::new().with_sharpness(1.0);
        let prepared = preprocessor.prepare(&DynamicImage::ImageRgb8(source));

        assert!(prepared.get_pixel(0, 0)[0] < 80);
        assert!(prepared.get_pixel(3, 0)[0] > 160);
    }

    #[test]
    fn test_grayscale_input_converted_to_rgb() {
        let gray = image::GrayImage::from_pixel(5, 5, image::Luma([200]));
        let prepared = ImagePreprocessor::new().prepare(&DynamicImage::ImageLuma8(gray));
        assert_eq!(prepared.dimensions(), (5, 5));
        let pixel = prepared.get_pixel(2, 2);
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
}
