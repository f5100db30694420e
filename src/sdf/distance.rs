//! Exact Euclidean distance transform.
//!
//! Separable lower-envelope-of-parabolas algorithm (Felzenszwalb & Huttenlocher, "Distance
//! Transforms of Sampled Functions"): one 1-D pass down every column, then one along every row,
//! on squared distances. Distances are measured between sample centers.

use crate::foundation::core::Size;
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::sdf::mask::Mask;

// Large enough to lose against any real squared distance, small enough to keep the
// parabola intersections finite in f64.
const FAR: f64 = 1e20;

/// Distance of every sample to the nearest sample where `seeds` is `true`.
///
/// Seed samples get `0`. Fails if there are no seeds at all.
pub fn distance_to_seeds(size: Size, seeds: &[bool]) -> GlyphResult<Vec<f32>> {
    if seeds.len() != size.area() {
        return Err(GlyphError::validation(format!(
            "seed buffer holds {} samples, expected {} for {size}",
            seeds.len(),
            size.area()
        )));
    }
    if !seeds.iter().any(|&s| s) {
        return Err(GlyphError::degenerate(
            "distance transform needs at least one seed sample",
        ));
    }

    let w = size.width as usize;
    let h = size.height as usize;
    let mut grid: Vec<f64> = seeds.iter().map(|&s| if s { 0.0 } else { FAR }).collect();

    let mut scratch = Envelope::with_capacity(w.max(h));
    let mut line = vec![0.0f64; w.max(h)];
    let mut out = vec![0.0f64; w.max(h)];

    for x in 0..w {
        for y in 0..h {
            line[y] = grid[y * w + x];
        }
        scratch.transform(&line[..h], &mut out[..h]);
        for y in 0..h {
            grid[y * w + x] = out[y];
        }
    }

    for y in 0..h {
        let row = &mut grid[y * w..(y + 1) * w];
        line[..w].copy_from_slice(row);
        scratch.transform(&line[..w], &mut out[..w]);
        row.copy_from_slice(&out[..w]);
    }

    Ok(grid.into_iter().map(|d2| d2.sqrt() as f32).collect())
}

/// Distance of each foreground sample to the nearest background sample (background gets `0`).
pub fn distance_to_background(mask: &Mask) -> GlyphResult<Vec<f32>> {
    let seeds: Vec<bool> = mask.foreground_flags().into_iter().map(|fg| !fg).collect();
    distance_to_seeds(mask.size(), &seeds)
}

/// Distance of each background sample to the nearest foreground sample (foreground gets `0`).
pub fn distance_to_foreground(mask: &Mask) -> GlyphResult<Vec<f32>> {
    distance_to_seeds(mask.size(), &mask.foreground_flags())
}

/// Reusable buffers for the 1-D squared distance transform.
struct Envelope {
    vertices: Vec<usize>,
    bounds: Vec<f64>,
}

impl Envelope {
    fn with_capacity(n: usize) -> Self {
        Self {
            vertices: vec![0; n],
            bounds: vec![0.0; n + 1],
        }
    }

    fn transform(&mut self, f: &[f64], d: &mut [f64]) {
        let n = f.len();
        if n == 0 {
            return;
        }
        let v = &mut self.vertices;
        let z = &mut self.bounds;

        let mut k = 0usize;
        v[0] = 0;
        z[0] = f64::NEG_INFINITY;
        z[1] = f64::INFINITY;

        for q in 1..n {
            let mut s = intersection(f, q, v[k]);
            while s <= z[k] {
                k -= 1;
                s = intersection(f, q, v[k]);
            }
            k += 1;
            v[k] = q;
            z[k] = s;
            z[k + 1] = f64::INFINITY;
        }

        k = 0;
        for (q, out) in d.iter_mut().enumerate() {
            while z[k + 1] < q as f64 {
                k += 1;
            }
            let dq = q as f64 - v[k] as f64;
            *out = dq * dq + f[v[k]];
        }
    }
}

fn intersection(f: &[f64], q: usize, p: usize) -> f64 {
    let (qf, pf) = (q as f64, p as f64);
    ((f[q] + qf * qf) - (f[p] + pf * pf)) / (2.0 * qf - 2.0 * pf)
}

#[cfg(test)]
#[path = "../../tests/unit/sdf/distance.rs"]
mod tests;
