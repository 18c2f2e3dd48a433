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

use crate::geometry::point_2::Point2;
use crate::numeric::scalar::Scalar;

/// Axis-aligned rectangle. `min` is coordinate-wise <= `max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rect2<T>
where
    T: Scalar,
{
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T> Rect2<T>
where
    T: Scalar,
{
    /// Builds the rectangle spanned by two arbitrary corner points.
    pub fn from_corners(a: &Point2<T>, b: &Point2<T>) -> Self {
        let (min_x, max_x) = if a.x < b.x {
            (a.x.clone(), b.x.clone())
        } else {
            (b.x.clone(), a.x.clone())
        };
        let (min_y, max_y) = if a.y < b.y {
            (a.y.clone(), b.y.clone())
        } else {
            (b.y.clone(), a.y.clone())
        };
        Self {
            min: Point2 { x: min_x, y: min_y },
            max: Point2 { x: max_x, y: max_y },
        }
    }

    /// The four corners in cyclic boundary order, starting at `min`.
    pub fn corners(&self) -> [Point2<T>; 4] {
        [
            self.min.clone(),
            Point2 {
                x: self.max.x.clone(),
                y: self.min.y.clone(),
            },
            self.max.clone(),
            Point2 {
                x: self.min.x.clone(),
                y: self.max.y.clone(),
            },
        ]
    }

    /// Grows the rectangle by `margin` on every side.
    pub fn padded(&self, margin: T) -> Self
    where
        for<'a> &'a T: Add<&'a T, Output = T>
            + Sub<&'a T, Output = T>
            + Mul<&'a T, Output = T>
            + Div<&'a T, Output = T>,
    {
        Self {
            min: Point2 {
                x: &self.min.x - &margin,
                y: &self.min.y - &margin,
            },
            max: Point2 {
                x: &self.max.x + &margin,
                y: &self.max.y + &margin,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::dgar_f64::DgarF64;

    #[test]
    fn corners_normalize() {
        let r = Rect2::<DgarF64>::from_corners(&Point2::new(5.0, -2.0), &Point2::new(-1.0, 3.0));
        assert_eq!(r.min, Point2::new(-1.0, -2.0));
        assert_eq!(r.max, Point2::new(5.0, 3.0));
    }

    #[test]
    fn corners_walk_the_boundary() {
        let r = Rect2::<DgarF64>::from_corners(&Point2::new(0.0, 0.0), &Point2::new(2.0, 1.0));
        let [bl, br, tr, tl] = r.corners();
        assert_eq!(bl, Point2::new(0.0, 0.0));
        assert_eq!(br, Point2::new(2.0, 0.0));
        assert_eq!(tr, Point2::new(2.0, 1.0));
        assert_eq!(tl, Point2::new(0.0, 1.0));
    }

    #[test]
    fn padding_grows_every_side() {
        let r = Rect2::<DgarF64>::from_corners(&Point2::new(0.0, 0.0), &Point2::new(10.0, 10.0));
        let p = r.padded(DgarF64(100.0));
        assert_eq!(p.min, Point2::new(-100.0, -100.0));
        assert_eq!(p.max, Point2::new(110.0, 110.0));
    }
}
