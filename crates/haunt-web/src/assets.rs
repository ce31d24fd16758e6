use crate::dom::js_err;
use haunt_core::{texture_manifest, AssetBundle, SceneConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn read_response(promise: js_sys::Promise, url: &str) -> anyhow::Result<Vec<u8>> {
    let resp: web::Response = JsFuture::from(promise)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("{} returned HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch every texture the config needs. All requests are issued up front
/// and awaited in manifest order; the bundle is returned only if complete.
pub async fn fetch_bundle(window: &web::Window, config: &SceneConfig) -> anyhow::Result<AssetBundle> {
    let manifest = texture_manifest(&config.texture_sets());
    let pending: Vec<(String, String, js_sys::Promise)> = manifest
        .iter()
        .map(|req| {
            let url = config.asset_url(&req.path);
            let promise = window.fetch_with_str(&url);
            (req.path.clone(), url, promise)
        })
        .collect();

    let mut bundle = AssetBundle::new();
    for (path, url, promise) in pending {
        match read_response(promise, &url).await {
            Ok(bytes) => bundle.insert(path, bytes),
            Err(e) => log::warn!("[assets] {}: {:?}", url, e),
        }
    }
    log::info!("[assets] fetched {}/{}", bundle.len(), manifest.len());
    bundle.ensure_ready(&manifest)?;
    Ok(bundle)
}
