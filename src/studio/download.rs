use base64::Engine;
use fs_err as fs;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::catalog::Niche;
use crate::errors::StudioError;

pub const GENERIC_STEM: &str = "generated-image";
const CUSTOM_STEM: &str = "custom-image";
const MAX_SLUG: usize = 50;

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9-]").expect("static regex"))
}

/// File stem for a downloaded image.
///
/// A non-empty post idea wins: trimmed, lowercased, whitespace runs become
/// `-`, anything outside `[a-z0-9-]` is dropped, capped at 50 chars. If that
/// leaves nothing the stem is `custom-image`. Without a post idea the niche
/// name is used (`<name>-image`), and without either `generated-image`.
pub fn download_stem(post_idea: &str, niche: Option<&Niche>) -> String {
    if !post_idea.is_empty() {
        let lowered = post_idea.trim().to_lowercase();
        let dashed = whitespace().replace_all(&lowered, "-");
        let slug: String = disallowed().replace_all(&dashed, "").chars().take(MAX_SLUG).collect();
        if slug.is_empty() {
            CUSTOM_STEM.to_string()
        } else {
            slug
        }
    } else if let Some(n) = niche {
        format!("{}-image", whitespace().replace_all(&n.name.to_lowercase(), "-"))
    } else {
        GENERIC_STEM.to_string()
    }
}

/// Media type and decoded bytes of a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), StudioError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| StudioError::Download("image reference is not a data URI".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| StudioError::Download("malformed data URI".into()))?;
    let mime = meta
        .strip_suffix(";base64")
        .ok_or_else(|| StudioError::Download("data URI is not base64 encoded".into()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| StudioError::Download(format!("invalid base64 payload: {e}")))?;
    let mime = if mime.is_empty() { "image/png" } else { mime };
    Ok((mime.to_string(), bytes))
}

/// Decode the data URI and write it to `dir/<stem>.png`, whatever its media type.
pub fn save_image(uri: &str, dir: &Path, stem: &str) -> Result<PathBuf, StudioError> {
    let (mime, bytes) = decode_data_uri(uri)?;
    fs::create_dir_all(dir).map_err(|e| StudioError::Download(e.to_string()))?;
    let path = dir.join(format!("{stem}.png"));
    fs::write(&path, &bytes).map_err(|e| StudioError::Download(e.to_string()))?;
    tracing::info!(path = %path.display(), %mime, bytes = bytes.len(), "image saved");
    Ok(path)
}
