//! Domain types produced by the response mapper.

use serde::Serialize;
use serde_json::Value;

use crate::platforms::media_kind_code;

/// Region preference used when the caller does not supply one.
pub const DEFAULT_REGIONS: &[&str] = &["us", "wor", "eu", "jp"];

/// A downloadable media asset (box art, screenshot, video, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaDescriptor {
    /// API media type, e.g. `box-2D`, `ss`, `wheel`.
    pub kind: String,
    pub url: String,
    /// File extension without the dot (`png`, `mp4`, ...).
    pub format: String,
    pub region: String,
    pub size: String,
}

/// One language-tagged alternative of a text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub locale: String,
    pub text: String,
}

impl LocalizedText {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }
}

/// Game metadata flattened out of a `jeuInfos` response.
///
/// Only the response mapper builds records, so the media list never contains
/// an entry with an empty URL. Fields are read through accessors:
///
/// ```compile_fail
/// use retroscrape_screenscraper::GameRecord;
///
/// let game = GameRecord {
///     id: String::new(),
///     name: String::new(),
///     description: String::new(),
///     publisher: String::new(),
///     developer: String::new(),
///     players: String::new(),
///     rating: String::new(),
///     release_date: String::new(),
///     genre: String::new(),
///     system: String::new(),
///     media: Vec::new(),
///     raw: serde_json::Value::Null,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) publisher: String,
    pub(crate) developer: String,
    pub(crate) players: String,
    pub(crate) rating: String,
    pub(crate) release_date: String,
    pub(crate) genre: String,
    pub(crate) system: String,
    pub(crate) media: Vec<MediaDescriptor>,
    pub(crate) raw: Value,
}

impl GameRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn developer(&self) -> &str {
        &self.developer
    }

    pub fn players(&self) -> &str {
        &self.players
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    /// Media in response order.
    pub fn media(&self) -> &[MediaDescriptor] {
        &self.media
    }

    /// The untouched `jeu` node.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// All media of one kind, in response order.
    ///
    /// `kind` may be a friendly alias (`screenshot`) or an API code (`ss`).
    pub fn media_by_kind(&self, kind: &str) -> Vec<&MediaDescriptor> {
        let code = media_kind_code(kind);
        self.media.iter().filter(|m| m.kind == code).collect()
    }

    /// Picks the best media item of a kind.
    ///
    /// Regions are tried in preference order (case-insensitive); within a
    /// region the first candidate wins. Falls back to the first candidate
    /// when no region matches. `None` uses [`DEFAULT_REGIONS`].
    pub fn best_media(
        &self,
        kind: &str,
        preferred_regions: Option<&[&str]>,
    ) -> Option<&MediaDescriptor> {
        let candidates = self.media_by_kind(kind);
        let regions = preferred_regions.unwrap_or(DEFAULT_REGIONS);

        regions
            .iter()
            .find_map(|region| {
                candidates
                    .iter()
                    .find(|m| m.region.eq_ignore_ascii_case(region))
            })
            .or_else(|| candidates.first())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(kind: &str, region: &str, url: &str) -> MediaDescriptor {
        MediaDescriptor {
            kind: kind.into(),
            url: url.into(),
            format: "png".into(),
            region: region.into(),
            size: String::new(),
        }
    }

    fn record(media: Vec<MediaDescriptor>) -> GameRecord {
        GameRecord {
            id: "1".into(),
            name: "Test".into(),
            description: String::new(),
            publisher: String::new(),
            developer: String::new(),
            players: String::new(),
            rating: String::new(),
            release_date: String::new(),
            genre: String::new(),
            system: String::new(),
            media,
            raw: Value::Null,
        }
    }

    #[test]
    fn best_media_prefers_region_order_over_encounter_order() {
        let game = record(vec![
            media("box-2D", "jp", "http://x/jp.png"),
            media("box-2D", "eu", "http://x/eu.png"),
        ]);
        let best = game.best_media("box-2D", None).unwrap();
        assert_eq!(best.region, "eu");
    }

    #[test]
    fn best_media_first_candidate_within_region() {
        let game = record(vec![
            media("box-2D", "us", "http://x/us1.png"),
            media("box-2D", "us", "http://x/us2.png"),
        ]);
        assert_eq!(game.best_media("box-2D", None).unwrap().url, "http://x/us1.png");
    }

    #[test]
    fn best_media_region_compare_is_case_insensitive() {
        let game = record(vec![
            media("box-2D", "JP", "http://x/jp.png"),
            media("box-2D", "WOR", "http://x/wor.png"),
        ]);
        let best = game.best_media("box-2D", Some(&["Wor"])).unwrap();
        assert_eq!(best.url, "http://x/wor.png");
    }

    #[test]
    fn best_media_falls_back_to_first_candidate() {
        let game = record(vec![
            media("ss", "", "http://x/a.png"),
            media("box-2D", "br", "http://x/br.png"),
            media("box-2D", "kr", "http://x/kr.png"),
        ]);
        let best = game.best_media("box-2D", None).unwrap();
        assert_eq!(best.url, "http://x/br.png");
    }

    #[test]
    fn best_media_custom_preferences() {
        let game = record(vec![
            media("box-2D", "us", "http://x/us.png"),
            media("box-2D", "jp", "http://x/jp.png"),
        ]);
        let best = game.best_media("box-2D", Some(&["jp", "us"])).unwrap();
        assert_eq!(best.region, "jp");

        let best = game.best_media("box-2D", Some(&[])).unwrap();
        assert_eq!(best.region, "us");
    }

    #[test]
    fn best_media_none_without_candidates() {
        let game = record(vec![media("ss", "us", "http://x/ss.png")]);
        assert!(game.best_media("box-2D", None).is_none());
        assert!(record(Vec::new()).best_media("box-2D", None).is_none());
    }

    #[test]
    fn media_by_kind_accepts_aliases() {
        let game = record(vec![
            media("ss", "us", "http://x/1.png"),
            media("box-2D", "us", "http://x/2.png"),
            media("ss", "eu", "http://x/3.png"),
        ]);
        assert_eq!(game.media_by_kind("screenshot").len(), 2);
        assert_eq!(game.media_by_kind("ss").len(), 2);
        assert_eq!(game.best_media("screenshot", Some(&["eu"])).unwrap().url, "http://x/3.png");
    }

    #[test]
    fn serializes_flat_fields() {
        let game = record(vec![media("box-2D", "us", "http://x/us.png")]);
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["name"], "Test");
        assert_eq!(json["media"][0]["url"], "http://x/us.png");
        assert_eq!(json["media"][0]["region"], "us");
    }
}
