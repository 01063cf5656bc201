//! Three-component vector algebra.
//!
//! Thin total functions over [`Vector3`]. None of them can fail; in
//! particular [`normalize`] maps the zero vector to itself.

use crate::types::Vector3;

#[inline]
pub fn magnitude(v: Vector3) -> f64 {
    v.length()
}

#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.dot(b)
}

#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

/// Unit vector in the direction of `v`, or zero when `v` has zero length.
///
/// Callers that need a real direction from two coincident points must
/// check for the zero result themselves.
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    let mag = magnitude(v);
    if mag > 0.0 { v / mag } else { Vector3::ZERO }
}

#[inline]
pub fn scale(v: Vector3, s: f64) -> Vector3 {
    v * s
}

#[inline]
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

#[inline]
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}
