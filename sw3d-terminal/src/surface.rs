/// Terminal cell surface for pixel plotting
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};
use sw3d_core::PixelSurface;

const FOREGROUND: Color = Color::Green;
const DOT: char = '█';

/// One terminal cell per pixel. Cleared cells print as blanks, plotted cells
/// as a solid block in the foreground color.
pub struct CellSurface {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl CellSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Queue the current frame to the writer. The caller flushes.
    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.queue(SetForegroundColor(FOREGROUND))?;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let c = if self.cells[y * self.width + x] {
                    DOT
                } else {
                    ' '
                };
                writer.queue(Print(c))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl PixelSurface for CellSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn plot(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_sets_single_cell() {
        let mut surface = CellSurface::new(4, 3);
        surface.plot(2, 1);
        assert!(surface.cells[1 * 4 + 2]);
        assert_eq!(surface.cells.iter().filter(|&&c| c).count(), 1);
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut surface = CellSurface::new(4, 3);
        surface.plot(0, 0);
        surface.plot(3, 2);
        surface.clear();
        assert!(surface.cells.iter().all(|&c| !c));
    }

    #[test]
    fn test_draw_emits_every_row() {
        let mut surface = CellSurface::new(3, 2);
        surface.plot(1, 0);
        let mut out = Vec::new();
        surface.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(DOT));
    }
}
