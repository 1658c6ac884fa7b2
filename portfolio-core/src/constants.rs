/// Application-wide constants for the page runtime.
/// Distances are expressed in canvas pixels unless noted otherwise.
pub const PARTICLE_COUNT: usize = 100;
/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 150.0;
/// Full width of the per-axis velocity range, centred on zero.
pub const PARTICLE_SPEED: f64 = 0.5;
/// Particle radius range `[min, min + span)`.
pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_SPAN: f64 = 2.0;
/// Particle alpha range `[min, min + span)`.
pub const ALPHA_MIN: f64 = 0.2;
pub const ALPHA_SPAN: f64 = 0.5;
/// Gold accent shared by dots and links.
pub const ACCENT_RGB: (u8, u8, u8) = (230, 175, 46);
pub const LINK_WIDTH: f64 = 0.5;

/// Half the size of the cursor halo (px).
pub const CURSOR_OFFSET: f64 = 20.0;
/// Lifetime of a click ripple; matches the CSS animation (ms).
pub const RIPPLE_MS: i32 = 600;
/// Fraction of a section that must be visible before its nav link lights up.
pub const SCROLL_SPY_THRESHOLD: f64 = 0.3;
