/// The wave height field
use std::f32::consts::PI;

/// Height of the surface at parameter (x, z).
///
/// Square-wave synthesis over radius: the first three odd harmonics of a
/// Fourier square wave, evaluated as a function of distance from the origin.
/// This produces concentric ripples with flattened crests.
pub fn height(x: f32, z: f32) -> f32 {
    let r = (x * x + z * z).sqrt();
    let w = PI * r;
    let y = w.cos() - (3.0 * w).cos() / 3.0 + (5.0 * w).cos() / 5.0;
    y * 0.5 + 0.2
}
