//! Texture kinds and their filename suffix convention
//!
//! Texture maps are named `<material>_<kind>.png`, e.g. `brick_albedo.png`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of texture map, selects the codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Base color, compressed to a palette
    Albedo,
    /// Tangent-space normal map, kept truecolor
    Normal,
    /// Packed occlusion/roughness/metallic, kept truecolor
    Orm,
}

impl TextureKind {
    pub const ALL: [TextureKind; 3] = [TextureKind::Albedo, TextureKind::Normal, TextureKind::Orm];

    /// Lowercase name as used in file names and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            TextureKind::Albedo => "albedo",
            TextureKind::Normal => "normal",
            TextureKind::Orm => "orm",
        }
    }

    /// Filename suffix, `_albedo.png` for albedo
    pub fn suffix(&self) -> String {
        format!("_{}.png", self.name())
    }

    /// Glob pattern matching this kind inside a directory
    pub fn glob_pattern(&self) -> String {
        format!("*{}", self.suffix())
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextureKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "albedo" => Ok(TextureKind::Albedo),
            "normal" => Ok(TextureKind::Normal),
            "orm" => Ok(TextureKind::Orm),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("albedo".parse::<TextureKind>().unwrap(), TextureKind::Albedo);
        assert_eq!("normal".parse::<TextureKind>().unwrap(), TextureKind::Normal);
        assert_eq!("orm".parse::<TextureKind>().unwrap(), TextureKind::Orm);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "roughness".parse::<TextureKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownKind(ref k) if k == "roughness"));
        assert!(err.is_usage());
        assert!("".parse::<TextureKind>().is_err());
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Kinds must match the lowercase file suffix exactly
        assert!("ORM".parse::<TextureKind>().is_err());
        assert!("Albedo".parse::<TextureKind>().is_err());
    }

    #[test]
    fn test_suffix_and_pattern() {
        assert_eq!(TextureKind::Albedo.suffix(), "_albedo.png");
        assert_eq!(TextureKind::Orm.glob_pattern(), "*_orm.png");
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for kind in TextureKind::ALL {
            assert_eq!(kind.to_string().parse::<TextureKind>().unwrap(), kind);
        }
    }
}
