//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the binary name and the fixed layout dimensions.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "nohboard-gen";

/// Margin in pixels between the keyboard surface edge and the outermost keys.
pub const KEYBOARD_SURFACE_MARGIN: i32 = 5;

/// Default key width in pixels when the definition declares no `width`.
pub const DEFAULT_KEY_WIDTH: i32 = 40;

/// Default key height in pixels when the definition declares no `height`.
pub const DEFAULT_KEY_HEIGHT: i32 = 40;

/// Default gap in pixels between adjacent keys.
pub const DEFAULT_KEY_SPACING: i32 = 1;

/// Version number written into the generated NohBoard document.
pub const NOHBOARD_FORMAT_VERSION: i32 = 2;
