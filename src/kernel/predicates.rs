// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::ops::{Add, Div, Mul, Sub};

use crate::geometry::{Point2, Rect2, Segment2};
use crate::kernel::orientation::orient2d;
use crate::numeric::scalar::Scalar;
use crate::operations::{One, Zero};

#[inline]
#[rustfmt::skip]
fn det3<T>(
    m00: &T, m01: &T, m02: &T,
    m10: &T, m11: &T, m12: &T,
    m20: &T, m21: &T, m22: &T,
) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let c0 = &(m11 * m22) - &(m12 * m21);
    let c1 = &(m10 * m22) - &(m12 * m20);
    let c2 = &(m10 * m21) - &(m11 * m20);
    &(&(m00 * &c0) - &(m01 * &c1)) + &(m02 * &c2)
}

/// Sign of the 4x4 lifted-coordinate determinant for the circumcircle test.
///
/// With `a`, `b`, `c` in counter-clockwise order the result is strictly
/// negative exactly when `d` lies inside the circle through them, zero when
/// the four points are co-circular.
pub fn in_circle<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let one = T::one();
    let a2 = &(&a.x * &a.x) + &(&a.y * &a.y);
    let b2 = &(&b.x * &b.x) + &(&b.y * &b.y);
    let c2 = &(&c.x * &c.x) + &(&c.y * &c.y);
    let d2 = &(&d.x * &d.x) + &(&d.y * &d.y);

    let m0 = det3(&a.x, &a.y, &one, &b.x, &b.y, &one, &c.x, &c.y, &one);
    let m1 = det3(&a2, &a.y, &one, &b2, &b.y, &one, &c2, &c.y, &one);
    let m2 = det3(&a2, &a.x, &one, &b2, &b.x, &one, &c2, &c.x, &one);
    let m3 = det3(&a2, &a.x, &a.y, &b2, &b.x, &b.y, &c2, &c.x, &c.y);

    let t0 = &d2 * &m0;
    let t1 = &d.x * &m1;
    let t2 = &d.y * &m2;
    &(&(&t0 - &t1) + &t2) - &m3
}

/// True when `p` is collinear with the segment and lies between its
/// endpoints (inclusive).
pub fn is_point_on_segment<T>(p: &Point2<T>, seg: &Segment2<T>) -> bool
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    if !orient2d(&seg.a, &seg.b, p).is_zero() {
        return false;
    }

    let (lo_x, hi_x) = if seg.a.x < seg.b.x {
        (&seg.a.x, &seg.b.x)
    } else {
        (&seg.b.x, &seg.a.x)
    };
    if &p.x < lo_x || &p.x > hi_x {
        return false;
    }

    let (lo_y, hi_y) = if seg.a.y < seg.b.y {
        (&seg.a.y, &seg.b.y)
    } else {
        (&seg.b.y, &seg.a.y)
    };
    if &p.y < lo_y || &p.y > hi_y {
        return false;
    }

    true
}

/// Squared distance from `p` to the segment `ab`.
pub fn segment_distance_squared<T>(p: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    let ab = b - a;
    let ap = p - a;

    let len2 = ab.norm2();
    if len2.is_zero() {
        return ap.norm2();
    }

    // clamp the projection parameter to the segment
    let mut t = &ap.dot(&ab) / &len2;
    if t < T::zero() {
        t = T::zero();
    } else if t > T::one() {
        t = T::one();
    }

    let qx = &a.x + &(&ab.x * &t);
    let qy = &a.y + &(&ab.y * &t);
    let dx = &p.x - &qx;
    let dy = &p.y - &qy;
    &(&dx * &dx) + &(&dy * &dy)
}

/// Tight axis-aligned bounds of a point set; `None` for an empty slice.
pub fn bounding_rect<T>(points: &[Point2<T>]) -> Option<Rect2<T>>
where
    T: Scalar,
{
    let first = points.first()?;
    let mut min_x = first.x.clone();
    let mut max_x = first.x.clone();
    let mut min_y = first.y.clone();
    let mut max_y = first.y.clone();

    for p in &points[1..] {
        if p.x < min_x {
            min_x = p.x.clone();
        }
        if p.x > max_x {
            max_x = p.x.clone();
        }
        if p.y < min_y {
            min_y = p.y.clone();
        }
        if p.y > max_y {
            max_y = p.y.clone();
        }
    }

    Some(Rect2 {
        min: Point2 { x: min_x, y: min_y },
        max: Point2 { x: max_x, y: max_y },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::dgar_f64::DgarF64;
    use crate::numeric::dgar_rational::DgarRational;

    #[test]
    fn in_circle_inside() {
        let a = Point2::<DgarF64>::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let d = Point2::new(0.25, 0.25);

        assert!(in_circle(&a, &b, &c, &d).is_negative());
    }

    #[test]
    fn in_circle_outside() {
        let a = Point2::<DgarF64>::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let d = Point2::new(5.0, 5.0);

        assert!(in_circle(&a, &b, &c, &d).is_positive());
    }

    #[test]
    fn in_circle_cocircular_exact() {
        // unit square: all four corners lie on one circle
        let a = Point2::<DgarRational>::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(1.0, 1.0);
        let d = Point2::new(0.0, 1.0);

        assert!(in_circle(&a, &b, &c, &d).is_zero());
    }

    #[test]
    fn point_on_segment() {
        let seg = Segment2::<DgarF64>::new(&Point2::new(0.0, 0.0), &Point2::new(2.0, 2.0));

        assert!(is_point_on_segment(&Point2::new(1.0, 1.0), &seg));
        assert!(!is_point_on_segment(&Point2::new(3.0, 3.0), &seg));
        assert!(!is_point_on_segment(&Point2::new(1.0, 0.0), &seg));
    }

    #[test]
    fn segment_distance() {
        let a = Point2::<DgarF64>::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);

        let d1 = segment_distance_squared(&Point2::new(5.0, 3.0), &a, &b);
        assert!((d1.0 - 9.0).abs() < 1e-12);

        // beyond the far endpoint: distance is to the endpoint itself
        let d2 = segment_distance_squared(&Point2::new(13.0, 4.0), &a, &b);
        assert!((d2.0 - 25.0).abs() < 1e-12);
    }

    #[test]
    fn bounding_rect_of_points() {
        let pts = vec![
            Point2::<DgarF64>::new(3.0, -1.0),
            Point2::new(-2.0, 4.0),
            Point2::new(0.0, 0.0),
        ];
        let r = bounding_rect(&pts).unwrap();
        assert_eq!(r.min, Point2::new(-2.0, -1.0));
        assert_eq!(r.max, Point2::new(3.0, 4.0));

        assert!(bounding_rect::<DgarF64>(&[]).is_none());
    }
}
