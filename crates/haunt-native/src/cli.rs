use clap::Parser;
use haunt_core::{LightRig, PanelParam, SceneConfig, DEFAULT_GRAVE_SEED, GRAVE_COUNT};

#[derive(Parser, Debug)]
#[command(name = "haunt-native", about = "Haunted house with ghost lights and fog")]
pub struct Cli {
    /// Directory containing the textures/ folder
    #[arg(long, default_value = ".")]
    pub assets: String,

    /// Seed for the graveyard layout
    #[arg(long, default_value_t = DEFAULT_GRAVE_SEED)]
    pub seed: u64,

    /// Number of graves to scatter
    #[arg(long, default_value_t = GRAVE_COUNT)]
    pub graves: usize,

    /// Flat-colored ground instead of the grass textures
    #[arg(long)]
    pub no_grass: bool,

    /// Starting value for a debug panel parameter, e.g. `--light moon-x=-2`
    #[arg(long = "light", value_name = "KEY=VALUE", value_parser = PanelParam::parse_assignment)]
    pub lights: Vec<(PanelParam, f32)>,
}

impl Cli {
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            grave_seed: self.seed,
            grave_count: self.graves,
            asset_root: self.assets.clone(),
            grass: !self.no_grass,
        }
    }

    /// Apply `--light` overrides through the panel's clamp-and-snap rules.
    pub fn apply_lights(&self, rig: &mut LightRig) {
        for (param, value) in &self.lights {
            let stored = param.set(rig, *value);
            log::info!("[panel] {} = {:.3} (command line)", param.key(), stored);
        }
    }
}
