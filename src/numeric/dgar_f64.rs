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

use num_traits::ToPrimitive;

use crate::{
    geometry::util::EPS,
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

use std::{
    hash::Hash,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// `f64` scalar with bitwise equality (for hashing/interning) and
/// EPS-classified sign tests (for predicates).
#[derive(Clone, Debug)]
pub struct DgarF64(pub f64);

impl Scalar for DgarF64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        DgarF64(num as f64 / den as f64)
    }
}

impl<'a, 'b> Add<&'b DgarF64> for &'a DgarF64 {
    type Output = DgarF64;

    fn add(self, rhs: &'b DgarF64) -> DgarF64 {
        DgarF64(self.0 + rhs.0)
    }
}

impl Add for DgarF64 {
    type Output = DgarF64;
    fn add(self, rhs: DgarF64) -> DgarF64 {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b DgarF64> for &'a DgarF64 {
    type Output = DgarF64;

    fn sub(self, rhs: &'b DgarF64) -> DgarF64 {
        DgarF64(self.0 - rhs.0)
    }
}

impl Sub for DgarF64 {
    type Output = DgarF64;
    fn sub(self, rhs: DgarF64) -> DgarF64 {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b DgarF64> for &'a DgarF64 {
    type Output = DgarF64;

    fn mul(self, rhs: &'b DgarF64) -> DgarF64 {
        DgarF64(self.0 * rhs.0)
    }
}

impl Mul for DgarF64 {
    type Output = DgarF64;
    fn mul(self, rhs: DgarF64) -> DgarF64 {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b DgarF64> for &'a DgarF64 {
    type Output = DgarF64;

    fn div(self, rhs: &'b DgarF64) -> DgarF64 {
        DgarF64(self.0 / rhs.0)
    }
}

impl Div for DgarF64 {
    type Output = DgarF64;
    fn div(self, rhs: DgarF64) -> DgarF64 {
        &self / &rhs
    }
}

impl<'c> AddAssign<&'c DgarF64> for DgarF64 {
    fn add_assign(&mut self, rhs: &'c DgarF64) {
        self.0 += rhs.0;
    }
}

impl<'d> SubAssign<&'d DgarF64> for DgarF64 {
    fn sub_assign(&mut self, rhs: &'d DgarF64) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for DgarF64 {
    fn from(value: i32) -> Self {
        DgarF64(value as f64)
    }
}

impl From<f64> for DgarF64 {
    fn from(value: f64) -> Self {
        DgarF64(value)
    }
}

impl From<DgarF64> for f64 {
    fn from(value: DgarF64) -> Self {
        value.0
    }
}

impl ToPrimitive for DgarF64 {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0 as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0 as u64)
    }
    fn to_f32(&self) -> Option<f32> {
        Some(self.0 as f32)
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl PartialEq for DgarF64 {
    fn eq(&self, other: &DgarF64) -> bool {
        self.0.to_bits() == other.0.to_bits() // Comparing with tolerance breaks the hashing contract
    }
}

impl Eq for DgarF64 {}

impl PartialOrd for DgarF64 {
    fn partial_cmp(&self, other: &DgarF64) -> Option<std::cmp::Ordering> {
        let diff = self.0 - other.0;
        if diff.abs() < EPS {
            return Some(std::cmp::Ordering::Equal);
        }
        if diff > EPS {
            return Some(std::cmp::Ordering::Greater);
        }
        if diff < -EPS {
            return Some(std::cmp::Ordering::Less);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl Hash for DgarF64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Zero for DgarF64 {
    fn zero() -> Self {
        DgarF64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.abs() < EPS
    }

    fn is_positive(&self) -> bool {
        self.0 > EPS
    }
    fn is_negative(&self) -> bool {
        self.0 < -EPS
    }
    fn is_positive_or_zero(&self) -> bool {
        self.0 >= -EPS
    }
    fn is_negative_or_zero(&self) -> bool {
        self.0 <= EPS
    }
}

impl One for DgarF64 {
    fn one() -> Self {
        DgarF64(1.0)
    }
}

impl Abs for DgarF64 {
    fn abs(&self) -> Self {
        DgarF64(self.0.abs())
    }
}

impl Neg for DgarF64 {
    type Output = DgarF64;

    fn neg(self) -> DgarF64 {
        DgarF64(-self.0)
    }
}

impl<'a> Neg for &'a DgarF64 {
    type Output = DgarF64;

    fn neg(self) -> DgarF64 {
        DgarF64(-self.0)
    }
}
