//! Gradient tokens. Literal CSS values, exported as-is.

/// Brand gradient, blue 40 to a light cyan.
pub const PRIMARY: &str = "linear-gradient(135deg, #6DA5FA 0%, #92EAF5 100%)";

/// Loading-skeleton shimmer.
pub const SKELETON: &str =
    "linear-gradient(90deg, transparent 0%, rgba(255,255,255,0.6) 48.5%, transparent 100%)";

/// Every gradient as `(name, value)`, in export order.
pub const GRADIENTS: [(&str, &str); 2] = [("primary", PRIMARY), ("skeleton", SKELETON)];
