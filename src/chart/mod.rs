/// Chart layer: what to draw, how to scale it, and how to write it out.
///
/// ```text
///   Table ──► spec (ChartSpec × 5) ──► axis (x/y ranges) ──► render (PNG)
/// ```

pub mod axis;
pub mod render;
pub mod spec;
