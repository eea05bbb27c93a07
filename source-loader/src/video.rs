//! Video loader: YouTube caption track plus video metadata.
//!
//! Loading is a two-step fetch: the watch page (which embeds the player
//! response JSON) and then the caption track it advertises for the requested
//! language. The transcript text is decoded from the timedtext XML payload.

use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::document::RawDocument;
use crate::errors::LoadError;
use crate::loader::{LoaderConfig, SourceLoader};

/// Loader for YouTube links (`youtube.com` / `youtu.be`).
pub struct VideoLoader {
    client: reqwest::Client,
    language: String,
    timeout_secs: u64,
}

/// One entry of the player response `captionTracks` array.
#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
    /// `"asr"` marks auto-generated tracks; manual tracks omit the field.
    #[serde(default)]
    kind: Option<String>,
}

/// Subset of the player response `videoDetails` object.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoDetails {
    title: String,
    author: String,
    #[serde(rename = "lengthSeconds")]
    length_seconds: String,
    #[serde(rename = "shortDescription")]
    short_description: String,
}

impl VideoLoader {
    /// Builds a video loader for the configured caption language.
    ///
    /// # Errors
    /// Returns [`LoadError::Unreachable`] if the HTTP client cannot be built.
    pub fn new(cfg: &LoaderConfig) -> Result<Self, LoadError> {
        let timeout_secs = cfg.page_timeout_secs.max(1);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| LoadError::Unreachable {
                url: String::new(),
                reason: format!("http client build: {e}"),
            })?;
        Ok(Self {
            client,
            language: cfg.language.clone(),
            timeout_secs,
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::from_transport(url, self.timeout_secs, e))?;

        if !resp.status().is_success() {
            return Err(LoadError::Unreachable {
                url: url.to_string(),
                reason: format!("HTTP {}", resp.status()),
            });
        }

        resp.text()
            .await
            .map_err(|e| LoadError::from_transport(url, self.timeout_secs, e))
    }
}

#[async_trait]
impl SourceLoader for VideoLoader {
    async fn load(&self, url: &str) -> Result<Vec<RawDocument>, LoadError> {
        debug!(target: "source_loader::video", url, language = %self.language, "fetching watch page");
        let page = self.fetch(url).await?;

        let tracks = caption_tracks(&page);
        let Some(track) = pick_track(&tracks, &self.language) else {
            warn!(
                target: "source_loader::video",
                url,
                advertised = tracks.len(),
                "no caption track for requested language"
            );
            return Err(LoadError::NoTranscript {
                url: url.to_string(),
                language: self.language.clone(),
            });
        };

        debug!(target: "source_loader::video", url, "fetching caption track");
        let xml = self.fetch(&track.base_url).await?;
        let transcript = transcript_from_timedtext(&xml);

        if transcript.trim().is_empty() {
            return Err(LoadError::NoTranscript {
                url: url.to_string(),
                language: self.language.clone(),
            });
        }

        let details = video_details(&page).unwrap_or_default();
        info!(
            target: "source_loader::video",
            url,
            chars = transcript.len(),
            title = %details.title,
            "transcript loaded"
        );

        let mut doc = RawDocument::new(transcript)
            .with_meta("source", url)
            .with_meta("language", self.language.as_str());
        if !details.title.is_empty() {
            doc = doc.with_meta("title", details.title);
        }
        if !details.author.is_empty() {
            doc = doc.with_meta("author", details.author);
        }
        if let Ok(secs) = details.length_seconds.parse::<u64>() {
            doc = doc.with_meta("length_seconds", secs);
        }
        if !details.short_description.is_empty() {
            doc = doc.with_meta("description", details.short_description);
        }

        Ok(vec![doc])
    }
}

/// Extracts and parses the `captionTracks` array from a watch page.
///
/// Missing or malformed player JSON yields an empty list, which the caller
/// reports as a missing transcript.
fn caption_tracks(page: &str) -> Vec<CaptionTrack> {
    let Some(raw) = balanced_json_after(page, "\"captionTracks\":") else {
        return Vec::new();
    };
    serde_json::from_str(raw).unwrap_or_default()
}

/// Extracts and parses the `videoDetails` object from a watch page.
fn video_details(page: &str) -> Option<VideoDetails> {
    let raw = balanced_json_after(page, "\"videoDetails\":")?;
    serde_json::from_str(raw).ok()
}

/// Picks the caption track for `language`, preferring a manual track over
/// an auto-generated (`asr`) one.
fn pick_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    let matches = |t: &&CaptionTrack| {
        t.language_code == language || t.language_code.starts_with(&format!("{language}-"))
    };
    tracks
        .iter()
        .filter(matches)
        .find(|t| t.kind.as_deref() != Some("asr"))
        .or_else(|| tracks.iter().find(matches))
}

/// Returns the balanced JSON value (`{...}` or `[...]`) that follows `key`
/// in `haystack`, honoring string literals and escapes.
fn balanced_json_after<'a>(haystack: &'a str, key: &str) -> Option<&'a str> {
    let at = haystack.find(key)? + key.len();
    let rest = haystack[at..].trim_start();
    let open = rest.chars().next()?;
    let close = match open {
        '[' => ']',
        '{' => '}',
        _ => return None,
    };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Decodes a timedtext XML payload into plain transcript text.
fn transcript_from_timedtext(xml: &str) -> String {
    let re = Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("valid timedtext regex");
    let mut parts = Vec::new();
    for cap in re.captures_iter(xml) {
        let line = unescape_xml(&cap[1]);
        let line = line.trim();
        if !line.is_empty() {
            parts.push(line.to_string());
        }
    }
    parts.join(" ")
}

/// Minimal XML entity decoding for caption payloads.
fn unescape_xml(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://example.test/tt?lang=de","languageCode":"de"},{"baseUrl":"https://example.test/tt?lang=en&kind=asr","languageCode":"en","kind":"asr"},{"baseUrl":"https://example.test/tt?lang=en","languageCode":"en"}]}},"videoDetails":{"videoId":"abc123","title":"A Talk","lengthSeconds":"1830","author":"Someone","shortDescription":"About things."}};"#;

    #[test]
    fn parses_caption_tracks_from_player_json() {
        let tracks = caption_tracks(PAGE);
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].language_code, "de");
    }

    #[test]
    fn prefers_manual_track_over_asr() {
        let tracks = caption_tracks(PAGE);
        let track = pick_track(&tracks, "en").unwrap();
        assert_eq!(track.base_url, "https://example.test/tt?lang=en");
        assert!(track.kind.is_none());
    }

    #[test]
    fn missing_language_yields_no_track() {
        let tracks = caption_tracks(PAGE);
        assert!(pick_track(&tracks, "fr").is_none());
    }

    #[test]
    fn parses_video_details() {
        let details = video_details(PAGE).unwrap();
        assert_eq!(details.title, "A Talk");
        assert_eq!(details.author, "Someone");
        assert_eq!(details.length_seconds, "1830");
    }

    #[test]
    fn page_without_captions_yields_empty() {
        assert!(caption_tracks("<html>no player json</html>").is_empty());
    }

    #[test]
    fn decodes_timedtext_payload() {
        let xml = r#"<?xml version="1.0"?><transcript>
            <text start="0" dur="2.1">Hello &amp; welcome</text>
            <text start="2.1" dur="3">to the &quot;show&quot;</text>
            <text start="5.1" dur="1"></text>
        </transcript>"#;
        assert_eq!(
            transcript_from_timedtext(xml),
            "Hello & welcome to the \"show\""
        );
    }
}
