//! ScreenScraper API client.
//!
//! Blocking HTTP client using `reqwest`, with credentials sent as query
//! parameters and a minimum delay between consecutive calls.

use std::collections::HashMap;
use std::path::Path;

use retroscrape_fingerprint::fingerprint_file;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::download::{media_filename, write_stream};
use crate::error::Error;
use crate::mapper::parse_game;
use crate::platforms::platform_id;
use crate::rate_limit::RateLimiter;
use crate::types::GameRecord;

const DEFAULT_BASE_URL: &str = "https://www.screenscraper.fr/api2";

const GAME_INFO_ENDPOINT: &str = "jeuInfos.php";
const USER_INFO_ENDPOINT: &str = "ssuserInfos.php";

/// Trailing comma the service sometimes leaves before a closing brace, and
/// its repaired form.
const MALFORMED_SEQUENCE: &str = "],\n\t\t}";
const REPAIRED_SEQUENCE: &str = "]\n\t\t}";

type Params = Vec<(&'static str, String)>;

/// ScreenScraper API client.
///
/// Calls are synchronous and take `&mut self`; all calls through one client
/// are spaced at least [`ClientConfig::request_delay`] apart.
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    base_url: String,
    limiter: RateLimiter,
    request_count: u64,
}

impl Client {
    /// Creates a new client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("{}/1.0", config.software_name))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            limiter: RateLimiter::new(config.request_delay),
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_count: 0,
        })
    }

    /// Sets a custom base URL (for testing).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Number of API responses parsed so far. Bookkeeping only; the daily
    /// ceiling in the config is never enforced against it.
    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    /// Looks up a game by the hashes of a ROM file.
    ///
    /// `rom_name` overrides the file name sent to the service. Returns
    /// `Ok(None)` when the service has no match.
    pub fn search_by_fingerprint(
        &mut self,
        path: &Path,
        platform: &str,
        rom_name: Option<&str>,
    ) -> Result<Option<GameRecord>, Error> {
        let system_id = resolve_platform(platform)?;
        let fp = fingerprint_file(path)?;
        let rom_name = rom_name.unwrap_or(&fp.file_name).to_string();

        let params = self.build_params([
            ("md5", fp.md5),
            ("sha1", fp.sha1),
            ("crc", fp.crc32),
            ("romnom", rom_name),
            ("romtaille", fp.size.to_string()),
            ("systemeid", system_id.to_string()),
            ("romtype", "rom".to_string()),
        ]);
        self.lookup_game(&params)
    }

    /// Looks up a game by name on a platform.
    pub fn search_by_name(
        &mut self,
        name: &str,
        platform: &str,
    ) -> Result<Option<GameRecord>, Error> {
        let system_id = resolve_platform(platform)?;
        let params = self.build_params([
            ("recherche", name.to_string()),
            ("systemeid", system_id.to_string()),
        ]);
        self.lookup_game(&params)
    }

    /// Looks up a game by its ScreenScraper id.
    pub fn search_by_id(&mut self, game_id: &str) -> Result<Option<GameRecord>, Error> {
        let params = self.build_params([("gameid", game_id.to_string())]);
        self.lookup_game(&params)
    }

    /// Checks the configured credentials against the user info endpoint.
    ///
    /// Returns the `ssuser` node (`Value::Null` when absent).
    pub fn verify_credentials(&mut self) -> Result<Value, Error> {
        let params = self.build_params([]);
        let data = self.get_json(USER_INFO_ENDPOINT, &params)?;
        Ok(data["response"]["ssuser"].clone())
    }

    /// Downloads the best media item of each requested kind into `output_dir`.
    ///
    /// Files are named `<game name>_<kind>.<format>` and overwrite existing
    /// files. The returned map has one entry per requested kind; a failed or
    /// missing item is `false` and does not stop the others.
    pub fn download_media(
        &mut self,
        game: &GameRecord,
        kinds: &[&str],
        output_dir: &Path,
        preferred_regions: Option<&[&str]>,
    ) -> Result<HashMap<String, bool>, Error> {
        std::fs::create_dir_all(output_dir).map_err(|source| Error::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut results = HashMap::new();
        for &kind in kinds {
            let Some(media) = game.best_media(kind, preferred_regions) else {
                warn!(kind, game = %game.name(), "no media of this kind");
                results.insert(kind.to_string(), false);
                continue;
            };

            let path = output_dir.join(media_filename(game.name(), kind, &media.format));
            let ok = match self.fetch_to_file(&media.url, &path) {
                Ok(bytes) => {
                    info!(kind, path = %path.display(), bytes, "downloaded media");
                    true
                }
                Err(e) => {
                    warn!(kind, url = %media.url, error = %e, "failed to download media");
                    false
                }
            };
            results.insert(kind.to_string(), ok);
        }

        Ok(results)
    }

    /// Common authentication parameters followed by `extra`.
    fn build_params<I>(&self, extra: I) -> Params
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut params = vec![
            ("devid", self.config.dev_id.clone()),
            ("devpassword", self.config.dev_password.clone()),
            ("softname", self.config.software_name.clone()),
            ("output", "json".to_string()),
        ];
        if let Some((id, password)) = self.config.user_credentials() {
            params.push(("ssid", id.to_string()));
            params.push(("sspassword", password.to_string()));
        }
        params.extend(extra);
        params
    }

    /// Runs a `jeuInfos` call and maps the answer, turning "not found" into `None`.
    fn lookup_game(&mut self, params: &Params) -> Result<Option<GameRecord>, Error> {
        let data = self.get_json(GAME_INFO_ENDPOINT, params)?;
        match parse_game(&data, &self.config.language) {
            Ok(game) => {
                debug!(id = %game.id(), name = %game.name(), media = game.media().len(), "game found");
                Ok(Some(game))
            }
            Err(Error::NotFound) => {
                debug!("game not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Performs a rate-limited GET and returns the checked JSON payload.
    fn get_json(&mut self, endpoint: &str, params: &Params) -> Result<Value, Error> {
        self.limiter.acquire();

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, params = params.len(), "sending request");

        let resp = self.http.get(&url).query(params).send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text()?;
        let data = parse_body(&body)?;
        self.request_count += 1;

        check_service_error(&data)?;
        Ok(data)
    }

    /// Streams a media URL into `path`.
    fn fetch_to_file(&mut self, url: &str, path: &Path) -> Result<u64, Error> {
        self.limiter.acquire();

        let mut resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: "download failed".into(),
            });
        }
        write_stream(&mut resp, path)
    }
}

/// Fingerprints a ROM and looks it up with a one-off client.
pub fn quick_search(
    config: ClientConfig,
    path: &Path,
    platform: &str,
) -> Result<Option<GameRecord>, Error> {
    Client::new(config)?.search_by_fingerprint(path, platform, None)
}

/// Looks up a ROM and downloads its box art into `output_dir`.
///
/// Returns `Ok(false)` when the game is unknown or has no box art that could
/// be downloaded.
pub fn download_box_art(
    config: ClientConfig,
    path: &Path,
    platform: &str,
    output_dir: &Path,
) -> Result<bool, Error> {
    const BOX_ART: &str = "box-2D";

    let mut client = Client::new(config)?;
    let Some(game) = client.search_by_fingerprint(path, platform, None)? else {
        return Ok(false);
    };
    let results = client.download_media(&game, &[BOX_ART], output_dir, None)?;
    Ok(results.get(BOX_ART).copied().unwrap_or(false))
}

fn resolve_platform(platform: &str) -> Result<u32, Error> {
    platform_id(platform).ok_or_else(|| Error::InvalidPlatform(platform.to_string()))
}

/// Parses a response body, applying the single known repair on failure.
fn parse_body(body: &str) -> Result<Value, Error> {
    match serde_json::from_str(body) {
        Ok(data) => Ok(data),
        Err(first) => {
            warn!(error = %first, "invalid JSON, retrying with trailing-comma repair");
            let repaired = body.replace(MALFORMED_SEQUENCE, REPAIRED_SEQUENCE);
            serde_json::from_str(&repaired).map_err(Error::MalformedResponse)
        }
    }
}

/// Fails when the payload carries a `header.erreur` field.
fn check_service_error(data: &Value) -> Result<(), Error> {
    let Some(erreur) = data.get("header").and_then(|h| h.get("erreur")) else {
        return Ok(());
    };
    let message = match erreur {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    warn!(message = %message, "service reported an error");
    Err(Error::from_service_message(&message))
}
