//! Pure geometry for the layer stack. Everything here derives from the
//! surface dimensions alone, so layouts are testable without a display.

/// Pixel offset of the title drop shadow relative to the title itself.
pub const SHADOW_OFFSET: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn full_screen(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Poster occupies a quarter of the screen width at a 2:3 portrait aspect,
/// inset 5% from the top-left corner.
pub fn poster_rect(screen_w: u32, screen_h: u32) -> Rect {
    let width = (screen_w as f32 * 0.25) as i32;
    let height = (width as f32 * 1.5) as i32;
    Rect {
        x: (screen_w as f32 * 0.05) as i32,
        y: (screen_h as f32 * 0.05) as i32,
        width,
        height,
    }
}

/// Title band spanning the bottom fifth of the screen.
pub fn title_rect(screen_w: u32, screen_h: u32) -> Rect {
    Rect {
        x: (screen_w as f32 * 0.10) as i32,
        y: (screen_h as f32 * 0.80) as i32,
        width: (screen_w as f32 * 0.80) as i32,
        height: (screen_h as f32 * 0.20) as i32,
    }
}
