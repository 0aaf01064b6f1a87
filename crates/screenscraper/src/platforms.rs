//! Closed lookup tables: platform names and media kind aliases.

/// Platform name → ScreenScraper `systemeid`.
///
/// Partial list; ScreenScraper knows many more systems. Names outside this
/// table are rejected before any request is made.
pub const PLATFORMS: &[(&str, u32)] = &[
    ("nes", 3),
    ("snes", 4),
    ("n64", 14),
    ("gamecube", 13),
    ("wii", 16),
    ("gameboy", 9),
    ("gbc", 10),
    ("gba", 12),
    ("nds", 15),
    ("genesis", 1),
    ("megadrive", 1),
    ("mastersystem", 2),
    ("saturn", 22),
    ("dreamcast", 23),
    ("psx", 57),
    ("ps2", 58),
    ("psp", 61),
    ("arcade", 75),
    ("mame", 75),
    ("atari2600", 26),
    ("atari7800", 43),
    ("colecovision", 48),
    ("intellivision", 115),
];

/// Friendly media kind → media `type` as it appears in API responses.
pub const MEDIA_KINDS: &[(&str, &str)] = &[
    ("box-2D", "box-2D"),
    ("box-3D", "box-3D"),
    ("screenshot", "ss"),
    ("title", "sstitle"),
    ("marquee", "wheel"),
    ("video", "video"),
    ("manual", "manuel"),
    ("map", "map"),
    ("mix", "mixrbv1"),
];

/// Returns the system id for a platform name. Exact, case-sensitive match.
pub fn platform_id(name: &str) -> Option<u32> {
    PLATFORMS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, id)| id)
}

/// Returns all supported platform names in table order.
pub fn supported_platforms() -> impl Iterator<Item = &'static str> {
    PLATFORMS.iter().map(|&(name, _)| name)
}

/// Resolves a friendly media kind to its API code.
///
/// Anything not in [`MEDIA_KINDS`] is taken to be an API code already and is
/// returned unchanged.
pub fn media_kind_code(kind: &str) -> &str {
    MEDIA_KINDS
        .iter()
        .find(|(alias, _)| *alias == kind)
        .map(|&(_, code)| code)
        .unwrap_or(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms() {
        assert_eq!(platform_id("nes"), Some(3));
        assert_eq!(platform_id("snes"), Some(4));
        assert_eq!(platform_id("psx"), Some(57));
        assert_eq!(platform_id("intellivision"), Some(115));
    }

    #[test]
    fn aliases_share_ids() {
        assert_eq!(platform_id("genesis"), platform_id("megadrive"));
        assert_eq!(platform_id("arcade"), platform_id("mame"));
    }

    #[test]
    fn unknown_platforms_rejected() {
        assert_eq!(platform_id("amiga"), None);
        assert_eq!(platform_id(""), None);
        assert_eq!(platform_id("NES"), None);
    }

    #[test]
    fn supported_platforms_lists_table() {
        let names: Vec<_> = supported_platforms().collect();
        assert_eq!(names.len(), PLATFORMS.len());
        assert_eq!(names[0], "nes");
        assert!(names.contains(&"dreamcast"));
    }

    #[test]
    fn media_kind_aliases() {
        assert_eq!(media_kind_code("screenshot"), "ss");
        assert_eq!(media_kind_code("title"), "sstitle");
        assert_eq!(media_kind_code("marquee"), "wheel");
        assert_eq!(media_kind_code("manual"), "manuel");
        assert_eq!(media_kind_code("box-2D"), "box-2D");
    }

    #[test]
    fn unknown_media_kind_passes_through() {
        assert_eq!(media_kind_code("ss"), "ss");
        assert_eq!(media_kind_code("fanart"), "fanart");
    }
}
