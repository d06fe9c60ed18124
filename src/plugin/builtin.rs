//! Capabilities shipped with the pipeline.

use super::StylePlugin;

/// Form element normalization: inputs, selects, checkboxes, and radios
/// restyled so utility classes compose over them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forms;

impl StylePlugin for Forms {
    fn id(&self) -> &str {
        "forms"
    }
}

/// Prose styling for blocks of rendered markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Typography;

impl StylePlugin for Typography {
    fn id(&self) -> &str {
        "typography"
    }
}

/// Aspect-ratio utilities for embedded media containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectRatio;

impl StylePlugin for AspectRatio {
    fn id(&self) -> &str {
        "aspect-ratio"
    }
}

/// Line-clamp utilities for multi-line text truncation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClamp;

impl StylePlugin for LineClamp {
    fn id(&self) -> &str {
        "line-clamp"
    }
}
