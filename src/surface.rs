use anyhow::Result;

use crate::layout::Rect;
use crate::settings::FontSize;

/// Handle to a layer created on a presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u32);

/// ARGB color words as the host surface understands them.
pub const BACKGROUND_DIFFUSE: u32 = 0xFF00_0000;
pub const TEXT_COLOR: u32 = 0xFFFF_FFFF;
pub const SHADOW_COLOR: u32 = 0x8800_0000;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageOptions {
    /// Multiplied over the image; used to blank the backdrop layer.
    pub color_diffuse: Option<u32>,
    /// Letterbox rather than stretch when the art does not match the rect.
    pub keep_aspect: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub font: FontSize,
    pub color: u32,
}

/// Drawing primitives owned by the host environment.
///
/// Layers stack back-to-front in creation order. `set_image` carries
/// cache-bypass semantics: every call loads the art fresh rather than
/// reusing a stale host-side bitmap.
pub trait PresentationSurface {
    fn dimensions(&self) -> (u32, u32);
    fn add_image_layer(&mut self, rect: Rect, options: ImageOptions) -> Result<LayerId>;
    fn add_text_layer(&mut self, rect: Rect, style: TextStyle) -> Result<LayerId>;
    fn set_image(&mut self, layer: LayerId, path: &str) -> Result<()>;
    fn set_label(&mut self, layer: LayerId, text: &str) -> Result<()>;
    fn set_visible(&mut self, layer: LayerId, visible: bool) -> Result<()>;
    /// Must tolerate repeated calls.
    fn close(&mut self);
}
