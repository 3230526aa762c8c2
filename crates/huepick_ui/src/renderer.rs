//! Recording paint surface
//!
//! Components never talk to a GPU. They describe what they want drawn as a
//! list of [`DrawCommand`]s, and the host rasterizes the list however it
//! likes (wgpu, tiny-skia, a canvas element).

use crate::layout::{Bounds, Point};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Quantize to 8-bit channels, ignoring alpha.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// A color at a position along a gradient, position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }

    /// Evenly spaced stops for the given colors.
    pub fn evenly_spaced(colors: &[Color]) -> Vec<GradientStop> {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop::new(i as f32 / last, color))
            .collect()
    }
}

/// How a primitive is filled or stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Shader {
    /// Single flat color
    Solid(Color),
    /// Linear gradient between two points
    LinearGradient {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// Angular gradient around a center, starting at angle 0 (positive x
    /// axis) and sweeping in the direction of increasing angle
    SweepGradient {
        center: Point,
        stops: Vec<GradientStop>,
    },
}

impl Shader {
    /// The flat color, if this is a solid shader.
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Shader::Solid(color) => Some(*color),
            _ => None,
        }
    }

    /// Gradient stops, empty for solid shaders.
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Shader::Solid(_) => &[],
            Shader::LinearGradient { stops, .. } | Shader::SweepGradient { stops, .. } => stops,
        }
    }
}

/// A draw command to be executed by the host
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: Point,
        radius: f32,
        shader: Shader,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        shader: Shader,
    },
    FillRoundedRect {
        bounds: Bounds,
        radius: f32,
        shader: Shader,
    },
}

/// The renderer collects high-level drawing primitives from components.
#[derive(Debug, Default)]
pub struct Renderer {
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a circle with a flat color.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.fill_circle_shaded(center, radius, Shader::Solid(color));
    }

    /// Fill a circle with any shader.
    pub fn fill_circle_shaded(&mut self, center: Point, radius: f32, shader: Shader) {
        self.draw_commands.push(DrawCommand::FillCircle {
            center,
            radius,
            shader,
        });
    }

    /// Stroke a circle outline centered on `radius`.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, shader: Shader) {
        self.draw_commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            shader,
        });
    }

    /// Fill a rounded rectangle.
    pub fn fill_rounded_rect(&mut self, bounds: Bounds, radius: f32, shader: Shader) {
        self.draw_commands.push(DrawCommand::FillRoundedRect {
            bounds,
            radius,
            shader,
        });
    }

    /// Commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    /// Take the recorded commands, leaving the renderer empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.draw_commands)
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.draw_commands.clear();
    }
}
