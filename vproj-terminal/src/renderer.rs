/// ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use vproj_core::{Viewport, Wireframe};

const EDGE_CHAR: char = '.';
const VERTEX_CHAR: char = '@';

/// ASCII renderer that draws projected wireframes into a character grid
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as u32, self.height as u32)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.char_buffer[y * self.width + x])
    }

    /// Draw one projected frame; `points` lines up with `mesh.vertices`
    pub fn render_frame(&mut self, mesh: &Wireframe, points: &[Point2<f64>]) {
        let viewport = self.viewport();
        let screen: Vec<Option<(f64, f64)>> =
            points.iter().map(|p| viewport.to_screen(p)).collect();

        for &(a, b) in &mesh.edges {
            // Edges with a clipped or degenerate endpoint are skipped
            if let (Some(Some(start)), Some(Some(end))) = (screen.get(a), screen.get(b)) {
                self.draw_line(*start, *end, EDGE_CHAR);
            }
        }

        for (x, y) in screen.iter().flatten() {
            self.plot(*x, *y, VERTEX_CHAR);
        }
    }

    fn draw_line(&mut self, start: (f64, f64), end: (f64, f64), character: char) {
        let dx = end.0 - start.0;
        let dy = end.1 - start.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.plot(start.0 + dx * t, start.1 + dy * t, character);
        }
    }

    fn plot(&mut self, x: f64, y: f64, character: char) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.char_buffer[y * self.width + x] = character;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                let color = match c {
                    VERTEX_CHAR => Color::Cyan,
                    EDGE_CHAR => Color::Grey,
                    _ => Color::DarkGrey,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
