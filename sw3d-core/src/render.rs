/// Occlusion-envelope renderer for height-field surfaces
use nalgebra::Point3;

use crate::projection::Viewport;
use crate::transform::ViewState;

/// Display stride: only samples whose indices are multiples of STEP on both
/// axes are drawn. The envelope bookkeeping still sees every sample.
const STEP: i32 = 2;

/// A fixed-size 2D pixel grid the renderer draws into.
///
/// Implementations own the two concrete colors: `clear` fills everything with
/// the background color, `plot` sets one foreground pixel. The renderer never
/// calls `plot` outside `[0, width) x [0, height)`.
pub trait PixelSurface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn clear(&mut self);
    fn plot(&mut self, x: usize, y: usize);
}

/// Renders one frame of the height field per call.
///
/// Visibility is approximated without a depth buffer: per output column the
/// running minimum and maximum drawn row form an envelope, and a sample is
/// visible only at or beyond that envelope. The fixed scan order (outer x,
/// inner z) makes this approximate back-to-front occupancy for the yaw/pitch
/// ranges the interactive bounds allow.
pub struct Renderer {
    viewport: Viewport,
    col_min: Vec<i32>,
    col_max: Vec<i32>,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            col_min: vec![0; width],
            col_max: vec![0; width],
        }
    }

    /// Reinitialize the per-column envelope for a new frame.
    fn reset_envelope(&mut self) {
        let bottom = self.viewport.height as i32 - 1;
        for column in 0..self.col_min.len() {
            self.col_min[column] = bottom;
            self.col_max[column] = 0;
        }
    }

    /// Draw one full frame of `field` under `view` into `out`.
    ///
    /// Every frame is recomputed from scratch; nothing carries over between
    /// calls. The sample grid spans [-1, 1] on both parameter axes at a
    /// resolution of width/4 steps per unit, independent of zoom.
    pub fn render<F, S>(&mut self, field: F, view: &ViewState, out: &mut S)
    where
        F: Fn(f32, f32) -> f32,
        S: PixelSurface,
    {
        debug_assert_eq!(out.width(), self.viewport.width);
        debug_assert_eq!(out.height(), self.viewport.height);

        out.clear();
        self.reset_envelope();

        let width = self.viewport.width as i32;
        let height = self.viewport.height as i32;
        let precision = (width / 4).max(1);
        let rotation = view.rotation();

        for i in -precision..=precision {
            let x = i as f32 / precision as f32;
            for j in -precision..=precision {
                let z = j as f32 / precision as f32;
                let y = field(x, z);

                let q = rotation * Point3::new(x, y, z);
                let (sx, sy) = view.scale(q.x, q.y);
                let (px, py) = self.viewport.to_pixel(sx, sy);
                if px < 0 || py < 0 || px >= width || py >= height {
                    continue;
                }

                let column = px as usize;
                if py <= self.col_min[column] || py >= self.col_max[column] {
                    if i % STEP == 0 && j % STEP == 0 {
                        out.plot(column, py as usize);
                    }
                    self.col_min[column] = self.col_min[column].min(py);
                    self.col_max[column] = self.col_max[column].max(py);
                }
            }
        }
    }
}
