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

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::ToPrimitive;
use rug::Rational;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Zero},
};

/// Exact arbitrary-precision rational scalar. Every predicate sign computed
/// over this type is exact; every `f64` coordinate converts losslessly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DgarRational(pub Rational);

impl Scalar for DgarRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        DgarRational(Rational::from((num, den)))
    }
}

impl<'a, 'b> Add<&'b DgarRational> for &'a DgarRational {
    type Output = DgarRational;

    fn add(self, rhs: &'b DgarRational) -> DgarRational {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        DgarRational(result)
    }
}

impl Add for DgarRational {
    type Output = DgarRational;
    fn add(self, rhs: DgarRational) -> DgarRational {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b DgarRational> for &'a DgarRational {
    type Output = DgarRational;

    fn sub(self, rhs: &'b DgarRational) -> DgarRational {
        // in-place API on rug::Rational: result = self - rhs
        let mut result = self.0.clone();
        result -= &rhs.0;
        DgarRational(result)
    }
}

impl Sub for DgarRational {
    type Output = DgarRational;
    fn sub(self, rhs: DgarRational) -> DgarRational {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b DgarRational> for &'a DgarRational {
    type Output = DgarRational;

    fn mul(self, rhs: &'b DgarRational) -> DgarRational {
        // in-place API on rug::Rational: result = self * rhs
        let mut result = self.0.clone();
        result *= &rhs.0;
        DgarRational(result)
    }
}

impl Mul for DgarRational {
    type Output = DgarRational;
    fn mul(self, rhs: DgarRational) -> DgarRational {
        &self * &rhs
    }
}

impl<'a, 'b> Div<&'b DgarRational> for &'a DgarRational {
    type Output = DgarRational;

    fn div(self, rhs: &'b DgarRational) -> DgarRational {
        // in-place API on rug::Rational: result = self / rhs
        let mut result = self.0.clone();
        result /= &rhs.0;
        DgarRational(result)
    }
}

impl Div for DgarRational {
    type Output = DgarRational;
    fn div(self, rhs: DgarRational) -> DgarRational {
        &self / &rhs
    }
}

impl<'c> AddAssign<&'c DgarRational> for DgarRational {
    fn add_assign(&mut self, rhs: &'c DgarRational) {
        self.0 += &rhs.0;
    }
}

impl<'d> SubAssign<&'d DgarRational> for DgarRational {
    fn sub_assign(&mut self, rhs: &'d DgarRational) {
        self.0 -= &rhs.0;
    }
}

impl From<i32> for DgarRational {
    fn from(value: i32) -> Self {
        DgarRational(Rational::from(value))
    }
}

impl From<f64> for DgarRational {
    fn from(value: f64) -> Self {
        // Every finite f64 is an exact rational; NaN/infinity have no place
        // in a coordinate and cannot be represented here.
        DgarRational(Rational::from_f64(value).expect("non-finite coordinate"))
    }
}

impl PartialOrd for DgarRational {
    fn partial_cmp(&self, other: &DgarRational) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl ToPrimitive for DgarRational {
    fn to_i64(&self) -> Option<i64> {
        Some(self.0.to_f64() as i64)
    }
    fn to_u64(&self) -> Option<u64> {
        Some(self.0.to_f64() as u64)
    }
    fn to_f32(&self) -> Option<f32> {
        Some(self.0.to_f64() as f32)
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl Zero for DgarRational {
    fn zero() -> Self {
        DgarRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }
    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
    fn is_positive_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Less
    }
    fn is_negative_or_zero(&self) -> bool {
        self.0.cmp0() != Ordering::Greater
    }
}

impl One for DgarRational {
    fn one() -> Self {
        DgarRational(Rational::from(1))
    }
}

impl Abs for DgarRational {
    fn abs(&self) -> Self {
        DgarRational(self.0.clone().abs())
    }
}

impl Neg for DgarRational {
    type Output = DgarRational;

    fn neg(self) -> DgarRational {
        DgarRational(-self.0)
    }
}

impl<'a> Neg for &'a DgarRational {
    type Output = DgarRational;

    fn neg(self) -> DgarRational {
        DgarRational(-self.0.clone())
    }
}
