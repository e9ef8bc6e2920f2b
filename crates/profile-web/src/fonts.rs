use profile_core::FontSource;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub const FALLBACK_FAMILY: &str = "sans-serif";

/// Fetch a remote font and register it with the document.
///
/// Returns the CSS family list to rasterize with. On failure the label keeps
/// the generic fallback family.
pub async fn load(document: &web::Document, font: &FontSource) -> String {
    match try_load(document, font).await {
        Ok(()) => {
            log::info!("[fonts] loaded '{}' from {}", font.family, font.url);
            format!("'{}', {}", font.family, FALLBACK_FAMILY)
        }
        Err(e) => {
            log::warn!("[fonts] '{}' unavailable ({:?}); using {}", font.family, e, FALLBACK_FAMILY);
            FALLBACK_FAMILY.to_string()
        }
    }
}

async fn try_load(document: &web::Document, font: &FontSource) -> anyhow::Result<()> {
    let face = web::FontFace::new_with_str(&font.family, &format!("url({})", font.url))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let promise = face.load().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    document
        .fonts()
        .add(&face)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
