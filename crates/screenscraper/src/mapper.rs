//! Maps the nested `jeuInfos` JSON tree onto a flat [`GameRecord`].
//!
//! Only the `response.jeu` wrapper is required. Every other field degrades to
//! an empty string or an empty list when it is missing or has an unexpected
//! shape.

use serde_json::Value;

use crate::error::Error;
use crate::types::{GameRecord, LocalizedText, MediaDescriptor};

/// Release regions preferred over the rest, checked per entry in list order.
const PREFERRED_DATE_REGIONS: &[&str] = &["wor", "us"];

/// Parses a full API payload into a [`GameRecord`].
///
/// `language` selects among localized alternatives of text fields.
pub fn parse_game(data: &Value, language: &str) -> Result<GameRecord, Error> {
    let jeu = data
        .get("response")
        .and_then(|r| r.get("jeu"))
        .filter(|j| j.is_object())
        .ok_or(Error::NotFound)?;

    let localized = |key: &str| select_localized(&localized_entries(&jeu[key]), language);

    Ok(GameRecord {
        id: text_of(&jeu["id"]),
        name: localized("noms"),
        description: localized("synopsis"),
        publisher: localized("editeur"),
        developer: localized("developpeur"),
        players: text_of(&jeu["joueurs"]["text"]),
        rating: text_of(&jeu["note"]["text"]),
        release_date: release_date(&jeu["dates"]),
        genre: localized("genres"),
        system: text_of(&jeu["systeme"]["text"]),
        media: parse_media(&jeu["medias"]),
        raw: jeu.clone(),
    })
}

/// Picks the entry for `locale`, else the first entry, else `""`.
pub fn select_localized(entries: &[LocalizedText], locale: &str) -> String {
    entries
        .iter()
        .find(|e| e.locale == locale)
        .or_else(|| entries.first())
        .map(|e| e.text.clone())
        .unwrap_or_default()
}

/// Collects the language-tagged alternatives of a text field.
///
/// Accepts a list of `{langue|region, text}` objects, a single `{text}`
/// object, or a list of genre-like objects that carry their own `noms` list.
pub fn localized_entries(value: &Value) -> Vec<LocalizedText> {
    match value {
        Value::Array(items) => items.iter().flat_map(entries_of_item).collect(),
        Value::Object(_) => entries_of_item(value),
        _ => Vec::new(),
    }
}

fn entries_of_item(item: &Value) -> Vec<LocalizedText> {
    if let Some(names) = item.get("noms").and_then(Value::as_array) {
        return names.iter().flat_map(entries_of_item).collect();
    }
    let locale = item
        .get("langue")
        .or_else(|| item.get("region"))
        .map(text_of)
        .unwrap_or_default();
    vec![LocalizedText::new(locale, text_of(&item["text"]))]
}

/// Picks a release date, preferring worldwide or US releases.
pub fn release_date(value: &Value) -> String {
    let Some(dates) = value.as_array() else {
        return String::new();
    };

    dates
        .iter()
        .find(|d| {
            let region = text_of(&d["region"]);
            PREFERRED_DATE_REGIONS
                .iter()
                .any(|r| region.eq_ignore_ascii_case(r))
        })
        .or_else(|| dates.first())
        .map(|d| text_of(&d["text"]))
        .unwrap_or_default()
}

/// Flattens media groups into descriptors, dropping items without a URL.
pub fn parse_media(value: &Value) -> Vec<MediaDescriptor> {
    let Some(groups) = value.as_array() else {
        return Vec::new();
    };

    let mut media = Vec::new();
    for group in groups {
        match group.get("media").and_then(Value::as_array) {
            Some(items) => media.extend(items.iter().filter_map(descriptor_of)),
            // Bare item listed directly under `medias`.
            None => media.extend(descriptor_of(group)),
        }
    }
    media
}

fn descriptor_of(item: &Value) -> Option<MediaDescriptor> {
    let url = text_of(&item["url"]);
    if url.is_empty() {
        return None;
    }
    Some(MediaDescriptor {
        kind: text_of(&item["type"]),
        url,
        format: text_of(&item["format"]),
        region: text_of(&item["region"]),
        size: text_of(&item["size"]),
    })
}

/// String value of a scalar node; numbers are rendered, anything else is `""`.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
