//! Linear RGBA colors used by the render models.

/// A linear RGBA color with channels in `[0.0, 1.0]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Opacity.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque mid gray.
    pub const GRAY: Color = Color::from_white(0.5, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a color from its four channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A gray level with the given opacity; `from_white(0.0, a)` is a
    /// translucent black.
    pub const fn from_white(white: f32, alpha: f32) -> Self {
        Self::new(white, white, white, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_white() {
        assert_eq!(Color::from_white(1.0, 0.2), Color::new(1.0, 1.0, 1.0, 0.2));
        assert_eq!(Color::GRAY, Color::new(0.5, 0.5, 0.5, 1.0));
    }
}
