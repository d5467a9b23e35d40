// Slice colors from the app's bootstrap theme. Fills are semi-transparent, borders opaque.
pub const GREEN: &str = "rgba(25, 135, 84, 1)";
pub const GREEN_TRANSPARENT: &str = "rgba(25, 135, 84, 0.7)";
pub const GRAY: &str = "rgba(108, 117, 125, 1)";
pub const GRAY_TRANSPARENT: &str = "rgba(108, 117, 125, 0.7)";
