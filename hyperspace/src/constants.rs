// PHYSICAL
/// Gravitational constant a fresh world starts with.
pub const STARTING_GRAV_CONST: f64 = 1.0;
/// Density every body starts with, used to derive radius from mass.
pub const STARTING_DEFAULT_DENSITY: f64 = 1.0;
/// Seconds of simulated time per step.
pub const STARTING_TIME_STEP: f64 = 0.1;

// SIMULATION
/// Stage bodies on the rayon pool once a world holds at least this many.
pub const PARALLEL_STAGING_CUTOFF: usize = 500;
/// Perpendicular drift, in world units, before a trajectory segment is closed.
pub const PATH_DEVIATION_LIMIT: f64 = 1.0;
/// Steps run per rendered frame.
pub const STARTING_STEPS_PER_FRAME: u32 = 1;
/// Frames per second of the tick loop.
pub const STARTING_FRAMES_PER_SECOND: u32 = 60;
/// Seed used by presets with randomly scattered bodies.
pub const DEFAULT_PRESET_SEED: u64 = 98425323328200;
/// Seed used for colours of bodies created without one.
pub const DEFAULT_COLOR_SEED: u64 = 98425323550500;

// GEOMETRY
/// Values smaller than this in magnitude are treated as zero.
pub const NEARLY_ZERO: f64 = 1e-10;
/// Distance from a camera to its image hyperplane.
pub const DISTANCE_TO_PROJECTED_PLANE: f64 = 400.0;
/// Points must be further than this along the view direction to be visible.
pub const IN_FRONT_MARGIN: f64 = 1.0;
/// Segments crossing behind the camera are cut at this distance along the view.
pub const NEAR_CLIP_DISTANCE: f64 = 1.5;

// RENDERING
/// Radius of the barycenter marker in the final image.
pub const BARYCENTER_MARKER_RADIUS: f64 = 5.0;
/// Half length of each coordinate axis in the axis overlay.
pub const AXIS_HALF_LENGTH: f64 = 200.0;
/// World units a 2D camera pans per move.
pub const PAN_SPEED: f64 = 5.0;
/// A 2D camera never pans further than this from the origin along any axis.
pub const MAX_PAN_DISTANCE: f64 = 50000.0;
/// Degrees a camera turns per rotation.
pub const ROTATION_STEP_DEGREES: f64 = 5.0;
