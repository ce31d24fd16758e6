// Shared scene layout and tuning constants used by both web and native frontends.

// House
pub const WALL_HEIGHT: f32 = 2.5;
pub const WALL_SIZE: f32 = 4.0;
pub const ROOF_RADIUS: f32 = 3.5;
pub const ROOF_HEIGHT: f32 = 1.0;
pub const ROOF_COLOR: u32 = 0xb35f45;

// Door
pub const DOOR_SIZE: f32 = 2.2;
pub const DOOR_SEGMENTS: u32 = 100;
pub const DOOR_Z: f32 = WALL_SIZE / 2.0 + 0.01; // just proud of the front wall
pub const DOOR_DISPLACEMENT_SCALE: f32 = 0.1;

// Bushes: (uniform scale, position)
pub const BUSH_COLOR: u32 = 0x89c854;
pub const BUSH_SEGMENTS: u32 = 16;
pub const BUSHES: [(f32, [f32; 3]); 4] = [
    (0.5, [0.8, 0.2, 2.2]),
    (0.25, [1.4, 0.1, 2.1]),
    (0.4, [-0.8, 0.1, 2.2]),
    (0.15, [-1.0, 0.05, 2.6]),
];

// Graveyard
pub const GRAVE_COUNT: usize = 50;
pub const GRAVE_SIZE: [f32; 3] = [0.6, 0.8, 0.2];
pub const GRAVE_COLOR: u32 = 0xb2b6b1;
pub const GRAVE_Y: f32 = 0.3;
pub const GRAVE_RADIUS_MIN: f32 = 3.0;
pub const GRAVE_RADIUS_SPAN: f32 = 6.0;
pub const GRAVE_TILT_SPAN: f32 = 0.4; // tilt = (u - 0.5) * span
pub const DEFAULT_GRAVE_SEED: u64 = 42;

// Ground
pub const FLOOR_SIZE: f32 = 20.0;
pub const FLOOR_COLOR: u32 = 0xa9c388;
pub const GRASS_REPEAT: f32 = 8.0;

// Fog and background
pub const FOG_COLOR: u32 = 0x262837;
pub const FOG_NEAR: f32 = 1.0;
pub const FOG_FAR: f32 = 15.0;

// Lights
pub const MOON_COLOR: u32 = 0xb9d5ff;
pub const AMBIENT_INTENSITY: f32 = 0.12;
pub const MOON_INTENSITY: f32 = 0.12;
pub const MOON_POSITION: [f32; 3] = [4.0, 5.0, -2.0];
pub const DOOR_LIGHT_COLOR: u32 = 0xff7d46;
pub const DOOR_LIGHT_INTENSITY: f32 = 1.0;
pub const DOOR_LIGHT_DISTANCE: f32 = 7.0;
pub const DOOR_LIGHT_POSITION: [f32; 3] = [0.0, 2.2, 2.7];
pub const GHOST_COLORS: [u32; 3] = [0xff00ff, 0x00ffff, 0xffff00];
pub const GHOST_INTENSITY: f32 = 2.0;
pub const GHOST_DISTANCE: f32 = 3.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: [f32; 3] = [4.0, 2.0, 5.0];

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 40.0;
pub const ORBIT_PHI_EPSILON: f32 = 1e-3; // polar angle margin from the poles

// Debug panel ranges
pub const PANEL_INTENSITY_RANGE: (f32, f32) = (0.0, 1.0);
pub const PANEL_POSITION_RANGE: (f32, f32) = (-5.0, 5.0);
pub const PANEL_STEP: f32 = 0.001;

// Render surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
