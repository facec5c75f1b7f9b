//! Clipboard and file export for generated text and images.

use anyhow::{Context, Result, anyhow};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use std::path::PathBuf;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::Path};

const FILE_STAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// A decoded `data:<mime>;base64,<payload>` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUri {
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| anyhow!("not a data URI"))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| anyhow!("data URI has no payload"))?;
        let mime_type = meta
            .strip_suffix(";base64")
            .ok_or_else(|| anyhow!("data URI is not base64 encoded"))?;
        let bytes = BASE64_STANDARD
            .decode(payload.trim())
            .context("invalid base64 payload")?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

/// Copies text to the system clipboard.
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write clipboard")?;
    tracing::debug!(chars = text.chars().count(), "copied text to clipboard");
    Ok(())
}

/// Browser script writing `text` to the async clipboard.
pub fn clipboard_script(text: &str) -> String {
    format!("navigator.clipboard.writeText({});", js_string(text))
}

/// Browser script that saves `uri` through a temporary `<a download>` anchor.
pub fn anchor_download_script(uri: &str, file_name: &str) -> String {
    format!(
        "const a = document.createElement('a');\n\
         a.href = {};\n\
         a.download = {};\n\
         document.body.appendChild(a);\n\
         a.click();\n\
         a.remove();",
        js_string(uri),
        js_string(file_name)
    )
}

// JSON string literals are valid JS string literals.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Validates `uri` and names the file it should be saved as.
pub fn download_file_name(uri: &str, stem: &str, at: OffsetDateTime) -> Result<String> {
    let image = DataUri::parse(uri)?;
    Ok(format!("{}.{}", timestamped_stem(stem, at), image.extension()))
}

/// Where downloads land: the user's download folder, else `./downloads`.
pub fn download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("downloads"))
}

/// `stem-YYYYMMDD-HHMMSS`, so repeated downloads do not overwrite each other.
pub fn timestamped_stem(stem: &str, at: OffsetDateTime) -> String {
    match at.format(FILE_STAMP_FORMAT) {
        Ok(stamp) => format!("{stem}-{stamp}"),
        Err(_) => stem.to_string(),
    }
}

/// Decodes `uri` and writes it to `dir/stem.<ext>`.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_image(uri: &str, dir: &Path, stem: &str) -> Result<PathBuf> {
    let image = DataUri::parse(uri)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{stem}.{}", image.extension()));
    fs::write(&path, &image.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = image.bytes.len(), "saved image");
    Ok(path)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_image(uri: &str, stem: &str) -> Result<PathBuf> {
    save_image(
        uri,
        &download_dir(),
        &timestamped_stem(stem, OffsetDateTime::now_utc()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_parse_data_uri() {
        let uri = DataUri::parse("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(uri.mime_type, "image/jpeg");
        assert_eq!(uri.bytes, b"hello");
        assert_eq!(uri.extension(), "jpg");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(DataUri::parse("https://example.com/a.png").is_err());
        assert!(DataUri::parse("data:image/png;base64").is_err());
        assert!(DataUri::parse("data:image/png,plain").is_err());
        assert!(DataUri::parse("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn test_timestamped_stem() {
        let at = datetime!(2025-03-09 07:05:01 UTC);
        assert_eq!(timestamped_stem("xhs-cover", at), "xhs-cover-20250309-070501");
    }

    #[test]
    fn test_download_file_name_uses_mime_extension() {
        let at = datetime!(2025-03-09 07:05:01 UTC);
        let name = download_file_name("data:image/webp;base64,aGVsbG8=", "xhs-cover", at).unwrap();
        assert_eq!(name, "xhs-cover-20250309-070501.webp");
        assert!(download_file_name("not-a-uri", "xhs-cover", at).is_err());
    }

    #[test]
    fn test_browser_scripts_quote_their_arguments() {
        let script = anchor_download_script("data:image/png;base64,AA==", "it's \"a\".png");
        assert!(script.contains(r#"a.href = "data:image/png;base64,AA==";"#));
        assert!(script.contains(r#"a.download = "it's \"a\".png";"#));
        assert!(script.contains("a.click();"));

        let script = clipboard_script("line1\n</script>");
        assert_eq!(
            script,
            r#"navigator.clipboard.writeText("line1\n</script>");"#
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_image_writes_decoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let path = save_image("data:image/png;base64,aGVsbG8=", &target, "xhs-cover").unwrap();
        assert_eq!(path, target.join("xhs-cover.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }
}
