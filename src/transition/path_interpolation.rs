//! Morphing between path descriptions of possibly different lengths.
//!
//! Two outlines are aligned by extending the shorter one: each of its
//! segments is split into as many equal pieces as there are segments of the
//! longer outline mapped onto it, so vertices spread proportionally along the
//! whole outline. After alignment every vertex moves linearly.

use crate::core::{PathDescription, PathVertex};

/// Interpolates from `from` to `to` at progress `t`.
///
/// `t` is clamped to `[0, 1]` and `t == 1` returns `to` exactly, so a settled
/// transition always ends on the target geometry. When either side is empty
/// there is nothing to morph and the target is returned as-is.
#[must_use]
pub fn interpolate(from: &PathDescription, to: &PathDescription, t: f64) -> PathDescription {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t >= 1.0 || from.is_empty() || to.is_empty() {
        return to.clone();
    }

    let target_len = from.len().max(to.len());
    let start = extend_vertices(from.vertices(), target_len);
    let end = extend_vertices(to.vertices(), target_len);

    let vertices = start
        .iter()
        .zip(&end)
        .map(|(a, b)| a.lerp(*b, t))
        .collect();
    PathDescription::new(vertices, to.is_closed())
}

/// Resamples `vertices` to exactly `target_len` vertices along its segments.
///
/// Inputs that already have `target_len` (or more) vertices are returned
/// unchanged. A single vertex is repeated.
#[must_use]
pub fn extend_vertices(vertices: &[PathVertex], target_len: usize) -> Vec<PathVertex> {
    if vertices.len() >= target_len || vertices.is_empty() {
        return vertices.to_vec();
    }
    if vertices.len() == 1 {
        return vec![vertices[0]; target_len];
    }

    let segments = vertices.len() - 1;
    let reference_segments = target_len - 1;
    let ratio = segments as f64 / reference_segments as f64;

    let mut pieces_per_segment = vec![0usize; segments];
    for reference in 0..reference_segments {
        let index = ((ratio * reference as f64).floor() as usize).min(segments - 1);
        pieces_per_segment[index] += 1;
    }

    let mut extended = Vec::with_capacity(target_len);
    extended.push(vertices[0]);
    for (segment, pieces) in vertices.windows(2).zip(pieces_per_segment) {
        let (start, end) = (segment[0], segment[1]);
        // Every segment receives at least one piece because ratio < 1.
        for piece in 1..=pieces {
            if piece == pieces {
                extended.push(end);
            } else {
                extended.push(start.lerp(end, piece as f64 / pieces as f64));
            }
        }
    }
    extended
}
