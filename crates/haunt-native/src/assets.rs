use haunt_core::{texture_manifest, AssetBundle, SceneConfig};

/// Read every texture the config needs from disk. Unreadable files are
/// logged and then reported together by the readiness check.
pub fn load_bundle(config: &SceneConfig) -> anyhow::Result<AssetBundle> {
    let manifest = texture_manifest(&config.texture_sets());
    let mut bundle = AssetBundle::new();
    for req in &manifest {
        let file = config.asset_url(&req.path);
        match std::fs::read(&file) {
            Ok(bytes) => bundle.insert(req.path.clone(), bytes),
            Err(e) => log::warn!("[assets] {}: {}", file, e),
        }
    }
    log::info!(
        "[assets] loaded {}/{} from {}",
        bundle.len(),
        manifest.len(),
        config.asset_root
    );
    bundle.ensure_ready(&manifest)?;
    Ok(bundle)
}
