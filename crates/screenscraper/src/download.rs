//! Local file naming and writing for downloaded media.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::Error;

/// Extension used when a media item has no usable format.
const FALLBACK_EXTENSION: &str = "bin";

/// Builds `<game name>_<kind>.<format>` with unsafe characters stripped.
///
/// Name and kind keep alphanumerics, spaces, hyphens and underscores; the
/// extension keeps alphanumerics only.
pub fn media_filename(game_name: &str, kind: &str, format: &str) -> String {
    let name = sanitize_component(game_name);
    let kind = sanitize_component(kind);
    let ext: String = format.chars().filter(|c| c.is_alphanumeric()).collect();
    let ext = if ext.is_empty() {
        FALLBACK_EXTENSION
    } else {
        ext.as_str()
    };
    format!("{name}_{kind}.{ext}")
}

fn sanitize_component(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().to_string()
}

/// Streams `reader` into `path`, truncating any existing file.
///
/// Not atomic: a failure midway leaves a partial file behind.
pub(crate) fn write_stream<R: Read>(reader: &mut R, path: &Path) -> Result<u64, Error> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    let written = std::io::copy(reader, &mut file).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn filename_from_plain_name() {
        assert_eq!(
            media_filename("Super Mario Bros", "box-2D", "png"),
            "Super Mario Bros_box-2D.png"
        );
    }

    #[test]
    fn filename_strips_unsafe_characters() {
        assert_eq!(
            media_filename("Zelda: A Link to the Past!", "ss", "png"),
            "Zelda A Link to the Past_ss.png"
        );
        assert_eq!(
            media_filename("../../etc/passwd", "box-2D", "png"),
            "etcpasswd_box-2D.png"
        );
        assert_eq!(media_filename("Pokémon Rouge", "wheel", "png"), "Pokémon Rouge_wheel.png");
    }

    #[test]
    fn filename_trims_trailing_whitespace() {
        assert_eq!(media_filename("Tetris ?", "video", "mp4"), "Tetris_video.mp4");
    }

    #[test]
    fn filename_extension_fallback() {
        assert_eq!(media_filename("Tetris", "manuel", ""), "Tetris_manuel.bin");
        assert_eq!(media_filename("Tetris", "manuel", "../"), "Tetris_manuel.bin");
    }

    #[test]
    fn write_stream_creates_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");

        let n = write_stream(&mut &b"first version"[..], &path).unwrap();
        assert_eq!(n, 13);
        let n = write_stream(&mut &b"second"[..], &path).unwrap();
        assert_eq!(n, 6);

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn write_stream_missing_parent_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let err = write_stream(&mut &b"data"[..], &path).unwrap_err();
        assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
    }
}
