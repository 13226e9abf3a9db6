/// Output surface dimensions and the view-space to pixel mapping.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Map a scaled view-space coordinate to pixel coordinates.
    ///
    /// Both axes are scaled by the surface height, so the unit square keeps
    /// its aspect ratio on non-square surfaces. Fractions truncate toward
    /// zero. Results may lie outside the surface; callers bounds-check.
    pub fn to_pixel(&self, x: f32, y: f32) -> (i32, i32) {
        let half_height = self.height as f32 / 2.0;
        let px = (x * half_height + self.width as f32 / 2.0) as i32;
        let py = (-y * half_height + half_height) as i32;
        (px, py)
    }
}
