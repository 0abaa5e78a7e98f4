//! Playfield geometry and collision primitives.

use std::f64::consts::{PI, TAU};

use crate::constants::{HEIGHT, WIDTH};

/// A point or vector in world space.
pub type Point = (f64, f64);

/// Wrap a position onto the toroidal playfield.
#[must_use]
pub fn wrap_position(x: f64, y: f64) -> Point {
    (x.rem_euclid(WIDTH), y.rem_euclid(HEIGHT))
}

#[must_use]
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax - bx).hypot(ay - by)
}

/// Normalize a radian difference into `[-π, π)`.
#[must_use]
pub fn shortest_angle(diff: f64) -> f64 {
    (diff + PI).rem_euclid(TAU) - PI
}

/// Turn `current` toward `target` by at most `max_step` radians.
#[must_use]
pub fn turn_toward(current: f64, target: f64, max_step: f64) -> f64 {
    current + shortest_angle(target - current).clamp(-max_step, max_step)
}

/// Even-odd ray cast.
#[must_use]
pub fn point_in_polygon(x: f64, y: f64, poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > y) != (yj > y) {
            let x_cross = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn edge_normals(poly: &[Point]) -> impl Iterator<Item = Point> + '_ {
    (0..poly.len()).map(move |i| {
        let (x1, y1) = poly[i];
        let (x2, y2) = poly[(i + 1) % poly.len()];
        let (nx, ny) = (-(y2 - y1), x2 - x1);
        let len = nx.hypot(ny);
        if len == 0.0 {
            (nx, ny)
        } else {
            (nx / len, ny / len)
        }
    })
}

fn project(poly: &[Point], axis: Point) -> (f64, f64) {
    poly.iter()
        .map(|&(x, y)| x * axis.0 + y * axis.1)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

/// Separating-axis test for two convex polygons. Touching counts as overlap.
#[must_use]
pub fn polygons_collide(a: &[Point], b: &[Point]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    edge_normals(a).chain(edge_normals(b)).all(|axis| {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        !(max_a < min_b || max_b < min_a)
    })
}

/// Rotate a local-space shape by `angle_deg` and translate it to `(x, y)`.
#[must_use]
pub fn transform(shape: &[Point], x: f64, y: f64, angle_deg: f64) -> Vec<Point> {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    shape
        .iter()
        .map(|&(px, py)| (x + px * cos_a - py * sin_a, y + px * sin_a + py * cos_a))
        .collect()
}
