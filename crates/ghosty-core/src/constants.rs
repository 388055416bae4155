//! Editor limits and the fixed colour semantics of the baked mask.

/// RGB triple used for mask pixels.
pub type Rgb8 = [u8; 3];

/// Wall pixels in the mask.
pub const MASK_DRAW_COLOR: Rgb8 = [255, 255, 255];
/// Empty pixels in the mask.
pub const MASK_ERASE_COLOR: Rgb8 = [0, 0, 0];

/// Spawn marker pixel.
pub const SPAWN_BAKE_COLOR: Rgb8 = [255, 0, 0];
/// Entry marker (next) pixel.
pub const ENTRY_NEXT_BAKE_COLOR: Rgb8 = [255, 255, 0];
/// Entry marker (back) pixel.
pub const ENTRY_BACK_BAKE_COLOR: Rgb8 = [255, 0, 255];
/// Door (next) polygon fill.
pub const DOOR_NEXT_BAKE_COLOR: Rgb8 = [0, 255, 0];
/// Door (back) polygon fill.
pub const DOOR_BACK_BAKE_COLOR: Rgb8 = [0, 0, 255];

/// Fill behind a background image that is smaller than the world.
pub const BACKGROUND_FILL_COLOR: Rgb8 = [255, 255, 255];
/// Colour of the edge overlay; its alpha carries the gradient.
pub const EDGE_OVERLAY_COLOR: Rgb8 = [24, 24, 28];
/// Global opacity applied to the edge overlay.
pub const EDGE_OVERLAY_ALPHA: u8 = 90;

/// Stroke width bounds.
pub const WIDTH_MIN: i32 = 1;
pub const WIDTH_MAX: i32 = 150;
pub const LINE_WIDTH_DEFAULT: i32 = 3;

/// Preview alpha bounds and step.
pub const PREVIEW_ALPHA_MIN: i32 = 10;
pub const PREVIEW_ALPHA_MAX: i32 = 255;
pub const PREVIEW_ALPHA_STEP: i32 = 10;
pub const PREVIEW_ALPHA_DEFAULT: i32 = 96;

pub const GRID_SIZE_DEFAULT: i32 = 8;

/// Zoom bounds.
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 6.0;
/// Zoom presets bound to the number keys.
pub const ZOOM_PRESETS: [f64; 3] = [0.75, 1.0, 2.0];
/// Margin subtracted from each viewport axis when fitting the world.
pub const VIEW_FIT_MARGIN: f64 = 8.0;

/// Default world size for a document without a background.
pub const DEFAULT_WORLD_W: u32 = 1280;
pub const DEFAULT_WORLD_H: u32 = 720;

/// Undo stack capacity.
pub const UNDO_DEPTH: usize = 128;

/// Hit-test inflation of the item bounds (total, split across both sides).
pub const HIT_INFLATE: i32 = 6;
/// Padding around a door's vertex bounds.
pub const DOOR_BOUNDS_PAD: i32 = 4;

/// Squared world distance within which a secondary click removes an entry marker.
pub const MARKER_REMOVE_RADIUS_SQ: i64 = 36;

/// Two primary clicks closer than this count as a double click.
pub const DOUBLE_CLICK_MS: u64 = 400;

/// Project file extension (without the dot).
pub const PROJECT_EXTENSION: &str = "xzenp";
