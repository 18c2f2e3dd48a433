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

use ahash::AHashMap;

use crate::geometry::{Point2, Segment2};
use crate::kernel::orientation::orient2d;
use crate::kernel::predicates::is_point_on_segment;
use crate::numeric::scalar::Scalar;
use crate::operations::Zero;

/// Sentinel vertex slot for dual quarter-edges, which have no origin.
pub const NIL: usize = usize::MAX;

/// Rotated (dual) edge: 90 degrees counter-clockwise within the group.
#[inline]
pub fn rot(e: usize) -> usize {
    (e & !3) | ((e + 1) & 3)
}

/// Reversed edge, same orientation.
#[inline]
pub fn sym(e: usize) -> usize {
    (e & !3) | ((e + 2) & 3)
}

/// Rotated edge, clockwise. Inverse of [`rot`].
#[inline]
pub fn rot_inv(e: usize) -> usize {
    (e & !3) | ((e + 3) & 3)
}

/// Dual of the reversed edge; coincides with [`rot_inv`] under the group
/// 4-cycle.
#[inline]
pub fn rot_sym(e: usize) -> usize {
    rot(sym(e))
}

/// One quarter-edge record. Four consecutive arena slots form one edge group
/// `{e, rot(e), sym(e), rot_inv(e)}`; only `onext` and `orig` are stored,
/// every other navigation operator is index arithmetic or composition.
#[derive(Debug, Clone)]
pub struct QuadEdge {
    /// Next edge counter-clockwise around this quarter's origin.
    pub onext: usize,
    /// Vertex slot of this quarter's origin; [`NIL`] on dual quarters.
    pub orig: usize,
    /// Tombstone set by [`QuadEdgeMesh::remove`].
    pub removed: bool,
    /// Transient flag owned by the enumeration pass.
    pub marked: bool,
}

/// Arena-backed quad-edge subdivision with an interned vertex pool.
///
/// Edge identity is the arena slot index; group membership is `id & !3`.
/// Coordinate-equal points always share one vertex slot, so vertex identity
/// comparisons are slot comparisons.
#[derive(Debug, Clone)]
pub struct QuadEdgeMesh<T: Scalar> {
    pub edges: Vec<QuadEdge>,
    pub vertices: Vec<Point2<T>>,
    vertex_ids: AHashMap<Point2<T>, usize>,
}

impl<T: Scalar> QuadEdgeMesh<T> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            vertices: Vec::new(),
            vertex_ids: AHashMap::new(),
        }
    }

    /// Interns a point, returning its vertex slot. Coordinate-equal points
    /// map to the same slot.
    pub fn add_vertex(&mut self, p: Point2<T>) -> usize {
        if let Some(&v) = self.vertex_ids.get(&p) {
            return v;
        }
        let v = self.vertices.len();
        self.vertex_ids.insert(p.clone(), v);
        self.vertices.push(p);
        v
    }

    #[inline]
    pub fn vertex(&self, v: usize) -> &Point2<T> {
        &self.vertices[v]
    }

    /// Allocates a fresh isolated edge group from vertex `org` to `dst`.
    /// The primal quarters are self-looped; the dual quarters point at each
    /// other, closing both `onext` rings.
    pub fn make_edge(&mut self, org: usize, dst: usize) -> usize {
        let e = self.edges.len();
        debug_assert_eq!(e & 3, 0);
        self.edges.push(QuadEdge {
            onext: e,
            orig: org,
            removed: false,
            marked: false,
        });
        self.edges.push(QuadEdge {
            onext: e + 3,
            orig: NIL,
            removed: false,
            marked: false,
        });
        self.edges.push(QuadEdge {
            onext: e + 2,
            orig: dst,
            removed: false,
            marked: false,
        });
        self.edges.push(QuadEdge {
            onext: e + 1,
            orig: NIL,
            removed: false,
            marked: false,
        });
        e
    }

    #[inline]
    pub fn onext(&self, e: usize) -> usize {
        self.edges[e].onext
    }

    #[inline]
    pub fn oprev(&self, e: usize) -> usize {
        rot(self.onext(rot(e)))
    }

    #[inline]
    pub fn lnext(&self, e: usize) -> usize {
        rot(self.onext(rot_inv(e)))
    }

    #[inline]
    pub fn lprev(&self, e: usize) -> usize {
        sym(self.onext(e))
    }

    #[inline]
    pub fn dprev(&self, e: usize) -> usize {
        rot_inv(self.onext(rot_inv(e)))
    }

    #[inline]
    pub fn orig(&self, e: usize) -> usize {
        self.edges[e].orig
    }

    #[inline]
    pub fn dest(&self, e: usize) -> usize {
        self.edges[sym(e)].orig
    }

    #[inline]
    pub fn orig_point(&self, e: usize) -> &Point2<T> {
        &self.vertices[self.edges[e].orig]
    }

    #[inline]
    pub fn dest_point(&self, e: usize) -> &Point2<T> {
        &self.vertices[self.edges[sym(e)].orig]
    }

    #[inline]
    pub fn is_removed(&self, e: usize) -> bool {
        self.edges[e & !3].removed
    }

    #[inline]
    pub fn marked(&self, e: usize) -> bool {
        self.edges[e].marked
    }

    #[inline]
    pub fn set_marked(&mut self, e: usize, value: bool) {
        self.edges[e].marked = value;
    }

    /// Guibas-Stolfi splice: exchanges the `onext` successors of `a` and `b`
    /// and of their duals, merging two origin rings into one or splitting
    /// one ring in two. Every ring it touches stays closed.
    pub fn splice(&mut self, a: usize, b: usize) {
        let alpha = rot(self.onext(a));
        let beta = rot(self.onext(b));

        let t1 = self.onext(b);
        let t2 = self.onext(a);
        let t3 = self.onext(beta);
        let t4 = self.onext(alpha);

        self.edges[a].onext = t1;
        self.edges[b].onext = t2;
        self.edges[alpha].onext = t3;
        self.edges[beta].onext = t4;
    }

    /// Creates an edge from `dest(a)` to `orig(b)` lying in the face between
    /// `a` and `b`, splicing it into both rings. Returns the new edge.
    pub fn connect(&mut self, a: usize, b: usize) -> usize {
        let e = self.make_edge(self.dest(a), self.orig(b));
        let after = self.lnext(a);
        self.splice(e, after);
        self.splice(sym(e), b);
        e
    }

    /// Edge flip: detaches `e` from its quadrilateral and reconnects it
    /// across the opposite diagonal, updating both endpoints.
    pub fn swap(&mut self, e: usize) {
        let a = self.oprev(e);
        let b = self.oprev(sym(e));

        self.splice(e, a);
        self.splice(sym(e), b);
        let al = self.lnext(a);
        self.splice(e, al);
        let bl = self.lnext(b);
        self.splice(sym(e), bl);

        let new_org = self.dest(a);
        let new_dst = self.dest(b);
        self.edges[e].orig = new_org;
        self.edges[sym(e)].orig = new_dst;
    }

    /// Detaches `e` from both endpoint rings and tombstones its group.
    pub fn remove(&mut self, e: usize) {
        let ep = self.oprev(e);
        self.splice(e, ep);
        let es = sym(e);
        let esp = self.oprev(es);
        self.splice(es, esp);

        let base = e & !3;
        for q in &mut self.edges[base..base + 4] {
            q.removed = true;
        }
    }
}

impl<T: Scalar> QuadEdgeMesh<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// True when `p` lies on the closed segment spanned by `e`.
    pub fn has_point(&self, e: usize, p: &Point2<T>) -> bool {
        let seg = Segment2::new(self.orig_point(e), self.dest_point(e));
        is_point_on_segment(p, &seg)
    }

    /// True when `p` lies strictly right of the directed edge `e`.
    pub fn point_at_right(&self, e: usize, p: &Point2<T>) -> bool {
        orient2d(p, self.dest_point(e), self.orig_point(e)).is_positive()
    }
}

impl<T: Scalar> Default for QuadEdgeMesh<T> {
    fn default() -> Self {
        Self::new()
    }
}
