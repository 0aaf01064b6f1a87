//! ScreenScraper API client for retro game metadata and media.
//!
//! Looks games up on [ScreenScraper](https://www.screenscraper.fr) by ROM
//! fingerprint, name or id, flattens the response into a [`GameRecord`], and
//! downloads selected media to disk.
//!
//! The client is blocking and single-threaded. Diagnostics are emitted as
//! `tracing` events; install a subscriber in the host application to see them.

pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod mapper;
pub mod platforms;
pub mod rate_limit;
pub mod types;

pub use client::{Client, download_box_art, quick_search};
pub use config::ClientConfig;
pub use error::Error;
pub use platforms::{media_kind_code, platform_id, supported_platforms};
pub use retroscrape_fingerprint::{Fingerprint, fingerprint_file};
pub use types::{DEFAULT_REGIONS, GameRecord, LocalizedText, MediaDescriptor};
