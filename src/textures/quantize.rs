//! Palette reduction for indexed PNG output
//!
//! Images that already fit in the palette keep their exact colors. Larger
//! ones get a NeuQuant palette and Floyd-Steinberg error diffusion, with the
//! diffused error scaled by the dither amount.

use std::collections::HashSet;

use color_quant::NeuQuant;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

/// Count distinct RGBA colors, stopping once `limit` is exceeded
pub fn count_colors(image: &RgbaImage, limit: usize) -> usize {
    let mut seen: HashSet<[u8; 4]> = HashSet::with_capacity(limit + 1);
    for pixel in image.pixels() {
        seen.insert(pixel.0);
        if seen.len() > limit {
            break;
        }
    }
    seen.len()
}

/// Reduce an image to at most `max_colors` RGBA colors
///
/// `sample_factor` trades palette quality for speed (1 = every pixel).
/// `dither` is clamped to 0.0-1.0; 0.0 maps each pixel to its nearest
/// palette entry.
pub fn reduce_palette(
    image: &DynamicImage,
    max_colors: usize,
    sample_factor: i32,
    dither: f32,
) -> RgbaImage {
    let rgba = image.to_rgba8();
    let max_colors = max_colors.clamp(2, 256);

    let distinct = count_colors(&rgba, max_colors);
    if distinct <= max_colors {
        debug!("{} colors fit in palette, keeping exact colors", distinct);
        return rgba;
    }

    debug!(
        "Quantizing {}x{} to {} colors (sample factor {}, dither {:.2})",
        rgba.width(),
        rgba.height(),
        max_colors,
        sample_factor,
        dither
    );

    // NeuQuant needs at least ~100 sampled pixels for its learning cycles
    let pixel_count = (rgba.width() * rgba.height()) as i32;
    let max_factor = (pixel_count / 100).clamp(1, 30);
    let quant = NeuQuant::new(sample_factor.clamp(1, max_factor), max_colors, rgba.as_raw());
    let palette: Vec<[u8; 4]> = quant
        .color_map_rgba()
        .chunks_exact(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect();

    diffuse(&rgba, &quant, &palette, dither.clamp(0.0, 1.0))
}

/// Map every pixel onto the palette, spreading the scaled error to
/// unvisited neighbours (7/16 right, 3/16 down-left, 5/16 down, 1/16 down-right)
fn diffuse(source: &RgbaImage, quant: &NeuQuant, palette: &[[u8; 4]], dither: f32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let w = width as usize;
    let mut output = RgbaImage::new(width, height);

    // Accumulated error for the current and next row, 4 channels per pixel
    let mut current = vec![0f32; w * 4];
    let mut next = vec![0f32; w * 4];

    for y in 0..height {
        for x in 0..width {
            let xi = x as usize;
            let src = source.get_pixel(x, y).0;

            let mut wanted = [0u8; 4];
            for c in 0..4 {
                let v = f32::from(src[c]) + current[xi * 4 + c];
                wanted[c] = v.round().clamp(0.0, 255.0) as u8;
            }

            let chosen = palette[quant.index_of(&wanted)];
            output.put_pixel(x, y, image::Rgba(chosen));

            if dither == 0.0 {
                continue;
            }

            for c in 0..4 {
                let err = (f32::from(wanted[c]) - f32::from(chosen[c])) * dither;
                if xi + 1 < w {
                    current[(xi + 1) * 4 + c] += err * 7.0 / 16.0;
                    next[(xi + 1) * 4 + c] += err / 16.0;
                }
                if xi > 0 {
                    next[(xi - 1) * 4 + c] += err * 3.0 / 16.0;
                }
                next[xi * 4 + c] += err * 5.0 / 16.0;
            }
        }

        std::mem::swap(&mut current, &mut next);
        next.iter_mut().for_each(|e| *e = 0.0);
    }

    output
}
