//! Segment geometry shared by wall and flipper collision
//!
//! Both obstacle kinds reduce to the same test: how far is the ball center
//! from the closest point of a finite segment, and which way does the
//! surface push back.

use glam::Vec2;

/// Closest point on a finite segment to a query point.
#[derive(Debug, Clone, Copy)]
pub struct SegmentContact {
    /// Closest point on the segment
    pub point: Vec2,
    /// Distance from the query point to `point`
    pub distance: f32,
}

/// Project `p` onto the segment `a`-`b`, clamping to the endpoints.
///
/// Returns `None` for a degenerate (zero-length) segment, which can never
/// produce a collision response.
pub fn segment_contact(a: Vec2, b: Vec2, p: Vec2) -> Option<SegmentContact> {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        return None;
    }

    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    let point = a + seg * t;
    Some(SegmentContact {
        point,
        distance: p.distance(point),
    })
}

/// Specular reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
