//! Liang-Barsky parametric line clipping

use crate::geometry::{ClipWindow, LineSegment};

/// Parametric interval `[u1, u2]` of `segment` that lies inside `window`,
/// or `None` when no part of it is visible.
///
/// Boundaries are tested left, right, bottom, top. For each, `p` is the
/// signed projection of the direction on the boundary normal and `q` the
/// distance of the start point inside it. `p < 0` is a potential entry,
/// `p > 0` a potential exit, `p == 0` means parallel.
pub fn clip_interval(segment: &LineSegment, window: &ClipWindow) -> Option<(f64, f64)> {
    let (x0, y0) = (segment.p0.x, segment.p0.y);
    let (dx, dy) = segment.delta();

    let p = [-dx, dx, -dy, dy];
    let q = [
        x0 - window.xmin(),
        window.xmax() - x0,
        y0 - window.ymin(),
        window.ymax() - y0,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;
    for (&pk, &qk) in p.iter().zip(q.iter()) {
        if pk == 0.0 {
            // Parallel: fully outside this boundary, or no constraint
            if qk < 0.0 {
                return None;
            }
            continue;
        }

        let r = qk / pk;
        if pk < 0.0 {
            if r > u2 {
                return None;
            }
            u1 = u1.max(r);
        } else {
            if r < u1 {
                return None;
            }
            u2 = u2.min(r);
        }
    }

    if u1 > u2 {
        return None;
    }
    Some((u1, u2))
}

/// Visible sub-segment of `segment` inside `window`, in the segment's own
/// direction. Pure; `None` means not visible.
pub fn clip_segment(segment: &LineSegment, window: &ClipWindow) -> Option<LineSegment> {
    clip_interval(segment, window)
        .map(|(u1, u2)| LineSegment::new(segment.point_at(u1), segment.point_at(u2)))
}
