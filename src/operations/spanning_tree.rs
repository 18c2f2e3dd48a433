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

use crate::error::{Result, TriangulationError};
use crate::geometry::{Point2, Segment2};
use crate::numeric::scalar::Scalar;
use crate::operations::disjoint_set::DisjointSet;

/// A weighted undirected edge detached from the mesh topology.
/// `weight` is the squared Euclidean length of the segment.
#[derive(Debug, Clone)]
pub struct SimpleEdge<T: Scalar> {
    pub origin: Point2<T>,
    pub destination: Point2<T>,
    pub weight: T,
}

impl<T: Scalar> SimpleEdge<T> {
    pub fn new(origin: Point2<T>, destination: Point2<T>, weight: T) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }
}

/// Kruskal over an explicit vertex set and weighted edge list.
///
/// Sorts ascending by weight (descending when `minimum` is false) with a
/// stable sort, then greedily accepts every edge joining two disjoint
/// partitions. Duplicate edges are harmless: the second copy always closes a
/// cycle and is discarded. For `V` vertices spanning `C` components of the
/// edge set the result holds `V - C` segments.
pub fn kruskal<T>(
    vertices: &[Point2<T>],
    mut edges: Vec<SimpleEdge<T>>,
    minimum: bool,
) -> Result<Vec<Segment2<T>>>
where
    T: Scalar,
{
    if vertices.is_empty() {
        return Err(TriangulationError::NoStoredVertices);
    }

    if minimum {
        edges.sort_by(|one, other| one.weight.partial_cmp(&other.weight).unwrap_or(Ordering::Equal));
    } else {
        edges.sort_by(|one, other| other.weight.partial_cmp(&one.weight).unwrap_or(Ordering::Equal));
    }

    let mut partitions = DisjointSet::new(vertices.iter().cloned());
    let mut result = Vec::new();

    for edge in edges {
        if partitions.disjoint(&edge.origin, &edge.destination) {
            partitions.union(&edge.origin, &edge.destination);
            result.push(Segment2::new(&edge.origin, &edge.destination));
        }
    }

    Ok(result)
}
