/*
 * Surface Module
 *
 * The drawing target the field renders onto. Coordinates are surface
 * coordinates: top-left origin, y pointing down, one unit per backing pixel.
 *
 * The nannou renderer is one implementation; `Recorder` is another that keeps
 * the draw commands in memory so the simulation can be checked without a window.
 */

use nannou::color::Rgba;
use nannou::prelude::*;

pub trait Surface {
    /// Wipe the previous frame.
    fn clear(&mut self);

    /// Filled circle with a soft glow of `glow` radius in the fill color. No stroke.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: f32);

    /// Straight line without glow.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
}

// In-memory surface that records every command it receives
#[derive(Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }
}
