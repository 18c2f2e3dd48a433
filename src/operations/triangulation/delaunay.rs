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

use log::{debug, trace, warn};

use crate::error::{Result, TriangulationError};
use crate::geometry::{Point2, Rect2, Segment2};
use crate::kernel::predicates::{bounding_rect, in_circle, segment_distance_squared};
use crate::mesh::quad_edge::{NIL, QuadEdgeMesh, sym};
use crate::numeric::scalar::Scalar;
use crate::operations::Zero;
use crate::operations::spanning_tree::{self, SimpleEdge};

/// Padding added around the input bounds for the synthetic boundary
/// rectangle, so every input point lies strictly inside it.
const BBOX_MARGIN: i32 = 100;

/// Incremental Delaunay triangulation over a quad-edge subdivision
/// (Guibas-Stolfi), bootstrapped from a padded bounding rectangle whose four
/// synthetic corners are excluded from all output.
#[derive(Debug, Clone)]
pub struct Delaunay<T: Scalar> {
    pub mesh: QuadEdgeMesh<T>,
    /// Primal quarter-edges in creation order; the enumeration pass walks
    /// exactly this list. Boundary-rectangle edges are not in it.
    pub edges: Vec<usize>,
    /// Input points retained for spanning-tree extraction.
    pub vertices: Vec<Point2<T>>,
    bbox: Option<Rect2<T>>,
    corner_ids: [usize; 4],
    current: usize,
}

impl<T: Scalar> Delaunay<T>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn new() -> Self {
        Self {
            mesh: QuadEdgeMesh::new(),
            edges: Vec::new(),
            vertices: Vec::new(),
            bbox: None,
            corner_ids: [NIL; 4],
            current: 0,
        }
    }

    /// The padded boundary rectangle, once a triangulation has been started.
    pub fn bbox(&self) -> Option<&Rect2<T>> {
        self.bbox.as_ref()
    }

    /// Builds the boundary quadrilateral from the rectangle's corners and
    /// sets the working edge. The corner vertices stay recorded so the
    /// enumeration pass can exclude every face touching them.
    pub fn set_bbox(&mut self, rect: Rect2<T>) {
        let [bl, br, tr, tl] = rect.corners();
        self.bbox = Some(rect);

        let vbl = self.mesh.add_vertex(bl);
        let vbr = self.mesh.add_vertex(br);
        let vtr = self.mesh.add_vertex(tr);
        let vtl = self.mesh.add_vertex(tl);

        let ab = self.mesh.make_edge(vbl, vbr);
        let bc = self.mesh.make_edge(vbr, vtr);
        let cd = self.mesh.make_edge(vtr, vtl);
        let da = self.mesh.make_edge(vtl, vbl);

        self.mesh.splice(sym(ab), bc);
        self.mesh.splice(sym(bc), cd);
        self.mesh.splice(sym(cd), da);
        self.mesh.splice(sym(da), ab);

        self.corner_ids = [vbl, vbr, vtr, vtl];
        self.current = ab;
    }

    /// Triangulates `points` in input order from a fresh subdivision.
    ///
    /// Fails with [`TriangulationError::EmptyPointSet`] on an empty slice.
    /// Pass `store_vertices` when spanning-tree extraction will follow.
    pub fn triangulate(&mut self, points: &[Point2<T>], store_vertices: bool) -> Result<()> {
        let rect = bounding_rect(points).ok_or(TriangulationError::EmptyPointSet)?;
        debug!("triangulating {} points", points.len());

        self.mesh = QuadEdgeMesh::new();
        self.edges.clear();
        self.vertices.clear();
        self.set_bbox(rect.padded(T::from(BBOX_MARGIN)));

        if store_vertices {
            self.vertices = points.to_vec();
        }
        for point in points {
            self.insert_point(point.clone())?;
        }
        Ok(())
    }

    /// Directed walk toward `point` starting at `start`, after
    /// Brown-Faigle. Returns an edge that `point` is an endpoint of, or an
    /// edge of the triangle strictly containing it.
    pub fn locate(&self, point: &Point2<T>, start: usize) -> Result<usize> {
        let mut edge = start;
        if self.mesh.point_at_right(edge, point) {
            edge = sym(edge);
        }

        let max_steps = self.mesh.edges.len() + 8;
        for _ in 0..max_steps {
            if point == self.mesh.orig_point(edge) || point == self.mesh.dest_point(edge) {
                return Ok(edge);
            }

            let next = self.mesh.onext(edge);
            let dprev = self.mesh.dprev(edge);
            let mut op = 0u8;
            if !self.mesh.point_at_right(next, point) {
                op += 1;
            }
            if !self.mesh.point_at_right(dprev, point) {
                op += 2;
            }
            match op {
                0 => return Ok(edge),
                1 => edge = next,
                2 => edge = dprev,
                _ => {
                    // both candidates face the point; take the closer edge
                    if self.edge_distance(next, point) < self.edge_distance(dprev, point) {
                        edge = next;
                    } else {
                        edge = dprev;
                    }
                }
            }
        }
        Err(TriangulationError::PointLocationOverrun { steps: max_steps })
    }

    fn edge_distance(&self, e: usize, point: &Point2<T>) -> T {
        segment_distance_squared(point, self.mesh.orig_point(e), self.mesh.dest_point(e))
    }

    /// Inserts one point into the current subdivision.
    ///
    /// A point coincident with an existing vertex is a silent no-op. A point
    /// lying exactly on an edge removes that edge first and re-triangulates
    /// its two incident triangles. Everything else gets a star of new edges
    /// to the surrounding polygon, then Lawson flips restore the Delaunay
    /// property in the affected region.
    pub fn insert_point(&mut self, point: Point2<T>) -> Result<()> {
        if self.mesh.edges.is_empty() {
            return Err(TriangulationError::EmptyPointSet);
        }

        let mut edge = self.locate(&point, self.current)?;

        if &point == self.mesh.orig_point(edge) || &point == self.mesh.dest_point(edge) {
            trace!("skipping coincident point {:?}", point);
            return Ok(());
        }

        if self.mesh.has_point(edge, &point) {
            debug!("point {:?} lies on an existing edge, removing it", point);
            let prev = self.mesh.oprev(edge);
            let base = edge & !3;
            self.mesh.remove(edge);
            self.edges.retain(|&q| (q & !3) != base);
            edge = prev;
        }

        let v = self.mesh.add_vertex(point.clone());
        let mut base = self.mesh.make_edge(self.mesh.orig(edge), v);
        self.edges.push(base);
        self.mesh.splice(base, edge);
        self.current = base;

        // fan out to every vertex of the surrounding polygon
        loop {
            base = self.mesh.connect(edge, sym(base));
            self.edges.push(base);
            edge = self.mesh.oprev(base);
            if self.mesh.lnext(edge) == self.current {
                break;
            }
        }

        // Lawson flip walk, bounded so a degenerate configuration fails
        // instead of cycling
        let max_steps = 4 * self.mesh.edges.len();
        let mut steps = 0usize;
        loop {
            steps += 1;
            if steps > max_steps {
                warn!("legalization exceeded {max_steps} steps around {point:?}");
                return Err(TriangulationError::DegenerateConfiguration { flips: max_steps });
            }

            let t = self.mesh.oprev(edge);
            let t_dest = self.mesh.dest_point(t).clone();
            if self.mesh.point_at_right(edge, &t_dest)
                && in_circle(
                    self.mesh.orig_point(edge),
                    &t_dest,
                    self.mesh.dest_point(edge),
                    &point,
                )
                .is_negative()
            {
                self.mesh.swap(edge);
                edge = self.mesh.oprev(edge);
            } else if self.mesh.onext(edge) == self.current {
                return Ok(());
            } else {
                let next = self.mesh.onext(edge);
                edge = self.mesh.lprev(next);
            }
        }
    }

    /// One marking pass over the stored edge list: faces touching a
    /// synthetic corner are suppressed, every other face is reported exactly
    /// once as a vertex-slot triple.
    fn face_ids(&mut self) -> Vec<[usize; 3]> {
        for &q in &self.edges {
            let s = sym(q);
            self.mesh.set_marked(q, false);
            self.mesh.set_marked(s, false);
            if self.corner_ids.contains(&self.mesh.orig(q)) {
                self.mesh.set_marked(q, true);
            }
            if self.corner_ids.contains(&self.mesh.dest(q)) {
                self.mesh.set_marked(s, true);
            }
        }

        let mut faces = Vec::new();
        for &e in &self.edges {
            let q1 = e;
            let q2 = self.mesh.lnext(q1);
            let q3 = self.mesh.lnext(q2);
            if !self.mesh.marked(q1) && !self.mesh.marked(q2) && !self.mesh.marked(q3) {
                faces.push([self.mesh.orig(q1), self.mesh.orig(q2), self.mesh.orig(q3)]);
            }

            let s1 = sym(e);
            let s2 = self.mesh.lnext(s1);
            let s3 = self.mesh.lnext(s2);
            if !self.mesh.marked(s1) && !self.mesh.marked(s2) && !self.mesh.marked(s3) {
                faces.push([self.mesh.orig(s1), self.mesh.orig(s2), self.mesh.orig(s3)]);
            }

            self.mesh.set_marked(e, true);
            self.mesh.set_marked(s1, true);
        }
        faces
    }

    /// Walks the finished mesh once, feeding every emitted triangle to
    /// `processor`.
    pub fn process_triangles<F>(&mut self, mut processor: F)
    where
        F: FnMut(&Point2<T>, &Point2<T>, &Point2<T>),
    {
        for [a, b, c] in self.face_ids() {
            processor(self.mesh.vertex(a), self.mesh.vertex(b), self.mesh.vertex(c));
        }
    }

    /// Every emitted triangle as a point triple.
    pub fn triangles(&mut self) -> Vec<[Point2<T>; 3]> {
        self.face_ids()
            .into_iter()
            .map(|[a, b, c]| {
                [
                    self.mesh.vertex(a).clone(),
                    self.mesh.vertex(b).clone(),
                    self.mesh.vertex(c).clone(),
                ]
            })
            .collect()
    }

    /// The three weighted sides of every emitted triangle. Interior edges
    /// appear once per adjacent face; the duplicate always loses in the
    /// spanning-tree pass.
    pub fn simple_edges(&mut self) -> Vec<SimpleEdge<T>> {
        let mut edges = Vec::new();
        for [a, b, c] in self.face_ids() {
            let pa = self.mesh.vertex(a).clone();
            let pb = self.mesh.vertex(b).clone();
            let pc = self.mesh.vertex(c).clone();

            let wab = pa.distance_squared(&pb);
            let wbc = pb.distance_squared(&pc);
            let wca = pc.distance_squared(&pa);

            edges.push(SimpleEdge::new(pa.clone(), pb.clone(), wab));
            edges.push(SimpleEdge::new(pb, pc.clone(), wbc));
            edges.push(SimpleEdge::new(pc, pa, wca));
        }
        edges
    }

    /// Spanning tree (minimum, or maximum when `minimum` is false) over the
    /// triangulation's edge graph.
    ///
    /// Fails with [`TriangulationError::NoStoredVertices`] unless the
    /// triangulation was built with `store_vertices`.
    pub fn kruskal(&mut self, minimum: bool) -> Result<Vec<Segment2<T>>> {
        if self.vertices.is_empty() {
            return Err(TriangulationError::NoStoredVertices);
        }
        let edges = self.simple_edges();
        spanning_tree::kruskal(&self.vertices, edges, minimum)
    }
}
