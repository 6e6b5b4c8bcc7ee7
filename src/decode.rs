use crate::error::PortfolioError;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;

/// Reads a file and inlines it as a `data:` URI.
pub async fn read_as_data_url(path: &Path) -> Result<String, PortfolioError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| PortfolioError::Decode {
            path: path.display().to_string(),
            source,
        })?;
    Ok(encode_data_url(mime_for(path), &bytes))
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "glb" => "model/gltf-binary",
        "gltf" => "model/gltf+json",
        "obj" => "model/obj",
        "usdz" => "model/vnd.usdz+zip",
        _ => "application/octet-stream",
    }
}
