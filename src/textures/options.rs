//! Fixed PNG codec configuration per texture kind

use indexmap::IndexSet;
use oxipng::{Deflaters, RowFilter, StripChunks};

use super::TextureKind;

/// Maximum palette size for indexed PNG output
pub const MAX_PALETTE_COLORS: u16 = 256;

/// Effort used when a configuration does not set one
pub const DEFAULT_EFFORT: u8 = 7;

/// PNG encoder settings applied to every texture of one kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PngOptions {
    /// zlib-style compression level, 0-9
    pub compression_level: u8,
    /// CPU effort, 1 (fastest) to 10 (slowest)
    pub effort: u8,
    /// Quantize to an indexed palette
    pub palette: bool,
    /// Error diffusion strength for palette mapping, 0.0-1.0
    pub dither: f32,
    /// Pick a row filter per scanline instead of none
    pub adaptive_filtering: bool,
    /// Palette size limit
    pub colors: u16,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            compression_level: 6,
            effort: DEFAULT_EFFORT,
            palette: false,
            dither: 1.0,
            adaptive_filtering: false,
            colors: MAX_PALETTE_COLORS,
        }
    }
}

impl PngOptions {
    /// The configuration for a texture kind
    pub fn for_kind(kind: TextureKind) -> Self {
        match kind {
            TextureKind::Albedo => Self {
                compression_level: 9,
                effort: 10,
                palette: true,
                dither: 1.0,
                ..Self::default()
            },
            TextureKind::Normal => Self {
                compression_level: 9,
                adaptive_filtering: true,
                palette: false,
                dither: 0.0,
                ..Self::default()
            },
            TextureKind::Orm => Self {
                compression_level: 9,
                effort: 10,
                adaptive_filtering: true,
                palette: false,
                dither: 0.0,
                ..Self::default()
            },
        }
    }

    /// libdeflate level; 9 means "best" and maps to libdeflate's maximum
    pub fn deflate_level(&self) -> u8 {
        match self.compression_level {
            0 => 1,
            level if level >= 9 => 12,
            level => level,
        }
    }

    /// oxipng preset, 0-6
    pub fn preset(&self) -> u8 {
        self.effort.clamp(1, 10) * 6 / 10
    }

    /// NeuQuant sample factor: 1 samples every pixel, 28 every 28th
    pub fn sample_factor(&self) -> i32 {
        1 + (10 - i32::from(self.effort.clamp(1, 10))) * 3
    }

    /// Translate into oxipng settings
    pub fn to_oxipng(&self) -> oxipng::Options {
        let mut opts = oxipng::Options::from_preset(self.preset());

        opts.deflate = Deflaters::Libdeflater {
            compression: self.deflate_level(),
        };
        opts.filter = if self.adaptive_filtering {
            [RowFilter::MinSum, RowFilter::Entropy, RowFilter::Bigrams]
                .into_iter()
                .collect::<IndexSet<_>>()
        } else {
            [RowFilter::None].into_iter().collect::<IndexSet<_>>()
        };

        // Indexed output only when the kind asks for a palette
        opts.palette_reduction = self.palette;
        opts.color_type_reduction = self.palette;

        // Pixels must survive untouched, including fully transparent ones
        opts.optimize_alpha = false;
        opts.scale_16 = false;
        opts.strip = StripChunks::Safe;

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_albedo_options() {
        let opts = PngOptions::for_kind(TextureKind::Albedo);
        assert_eq!(opts.compression_level, 9);
        assert_eq!(opts.effort, 10);
        assert!(opts.palette);
        assert_eq!(opts.dither, 1.0);
        assert!(!opts.adaptive_filtering);
    }

    #[test]
    fn test_normal_options() {
        let opts = PngOptions::for_kind(TextureKind::Normal);
        assert_eq!(opts.compression_level, 9);
        assert_eq!(opts.effort, DEFAULT_EFFORT);
        assert!(!opts.palette);
        assert_eq!(opts.dither, 0.0);
        assert!(opts.adaptive_filtering);
    }

    #[test]
    fn test_orm_options() {
        let opts = PngOptions::for_kind(TextureKind::Orm);
        assert_eq!(opts.effort, 10);
        assert!(!opts.palette);
        assert!(opts.adaptive_filtering);
    }

    #[test]
    fn test_each_kind_has_one_fixed_config() {
        for kind in TextureKind::ALL {
            assert_eq!(PngOptions::for_kind(kind), PngOptions::for_kind(kind));
        }
        assert_ne!(
            PngOptions::for_kind(TextureKind::Normal),
            PngOptions::for_kind(TextureKind::Orm)
        );
    }

    #[test]
    fn test_level_mapping() {
        let mut opts = PngOptions::default();
        assert_eq!(opts.deflate_level(), 6);
        opts.compression_level = 9;
        assert_eq!(opts.deflate_level(), 12);
        opts.compression_level = 0;
        assert_eq!(opts.deflate_level(), 1);
    }

    #[test]
    fn test_effort_mapping() {
        let mut opts = PngOptions::for_kind(TextureKind::Albedo);
        assert_eq!(opts.preset(), 6);
        assert_eq!(opts.sample_factor(), 1);
        opts.effort = 1;
        assert_eq!(opts.preset(), 0);
        assert_eq!(opts.sample_factor(), 28);
    }

    #[test]
    fn test_oxipng_translation() {
        let normal = PngOptions::for_kind(TextureKind::Normal).to_oxipng();
        assert!(!normal.palette_reduction);
        assert!(!normal.optimize_alpha);
        assert!(normal.filter.contains(&RowFilter::MinSum));
        assert!(matches!(normal.deflate, Deflaters::Libdeflater { compression: 12 }));

        let albedo = PngOptions::for_kind(TextureKind::Albedo).to_oxipng();
        assert!(albedo.palette_reduction);
        assert_eq!(albedo.filter.len(), 1);
        assert!(albedo.filter.contains(&RowFilter::None));
    }
}
