pub mod assets;
pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod ghosts;
pub mod graves;
pub mod lights;
pub mod panel;
pub mod scene;

pub use assets::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use ghosts::*;
pub use graves::*;
pub use lights::*;
pub use panel::*;
pub use scene::*;
