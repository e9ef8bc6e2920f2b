// Shared scene tuning constants used by the web frontend and the core model.

// Camera
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const SPOT_LIGHT_POSITION: [f32; 3] = [-10.0, -10.0, -10.0];
pub const SPOT_LIGHT_ANGLE: f32 = 0.15; // half-angle of the cone, radians
pub const SPOT_LIGHT_PENUMBRA: f32 = 1.0; // 0 = hard edge, 1 = fully soft
pub const SPOT_LIGHT_INTENSITY: f32 = 0.5;

// Avatar sphere
pub const AVATAR_POSITION: [f32; 3] = [0.0, 2.0, 0.0];
pub const AVATAR_RADIUS: f32 = 1.0;
pub const AVATAR_SEGMENTS: u32 = 32;
pub const AVATAR_COLOR: u32 = 0x4f46e5;
pub const AVATAR_ROUGHNESS: f32 = 0.3;
pub const AVATAR_METALNESS: f32 = 0.7;
pub const AVATAR_SPIN_X_PER_SEC: f32 = 0.5;
pub const AVATAR_SPIN_Y_PER_SEC: f32 = 0.2;

// Skill markers
pub const MARKER_SIZE: f32 = 0.8;
pub const MARKER_BOB_AMPLITUDE: f32 = 0.2;
pub const MARKER_SPIN_PER_FRAME: f32 = 0.01; // per frame, not per second
pub const MARKER_LABEL_DROP: f32 = 1.0; // label sits this far below the base position
pub const MARKER_LABEL_FONT_SIZE: f32 = 0.3;

// Decorative ring
pub const RING_POSITION: [f32; 3] = [0.0, 0.0, -2.0];
pub const RING_RADIUS: f32 = 3.0;
pub const RING_TUBE: f32 = 0.1;
pub const RING_RADIAL_SEGMENTS: u32 = 16;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;
pub const RING_COLOR: u32 = 0x10b981;
pub const RING_SPIN_Z_PER_SEC: f32 = 0.3;

// Default material (matches a plain standard material)
pub const DEFAULT_ROUGHNESS: f32 = 1.0;
pub const DEFAULT_METALNESS: f32 = 0.0;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5; // 2.0 = one turn every 30 s
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // per wheel notch at zoom speed 1
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;
pub const ORBIT_MIN_DISTANCE: f32 = 0.5; // hard floor, kept above CAMERA_NEAR

// Headline labels
pub const NAME_LABEL_POSITION: [f32; 3] = [0.0, 4.0, 0.0];
pub const NAME_LABEL_FONT_SIZE: f32 = 1.0;
pub const TITLE_LABEL_POSITION: [f32; 3] = [0.0, 3.2, 0.0];
pub const TITLE_LABEL_FONT_SIZE: f32 = 0.4;
pub const TITLE_LABEL_COLOR: &str = "#e5e7eb";
pub const NAME_FONT_FAMILY: &str = "Raleway";
pub const NAME_FONT_URL: &str =
    "https://fonts.gstatic.com/s/raleway/v14/1Ptrg8zYS_SKggPNwK4vaqI.woff";

// Page background behind the transparent canvas
pub const BACKGROUND_CSS: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

pub const BACKGROUND_FALLBACK_COLOR: u32 = 0x667eea; // used when the canvas cannot be transparent
