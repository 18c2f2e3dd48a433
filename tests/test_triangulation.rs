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

use std::collections::HashSet;

use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

use dgar::error::TriangulationError;
use dgar::geometry::Point2;
use dgar::kernel::{in_circle, orient2d};
use dgar::numeric::dgar_f64::DgarF64;
use dgar::numeric::dgar_rational::DgarRational;
use dgar::operations::Zero;
use dgar::operations::triangulation::Delaunay;

fn pt(x: f64, y: f64) -> Point2<DgarF64> {
    Point2::new(x, y)
}

fn square() -> Vec<Point2<DgarF64>> {
    vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]
}

fn bits(p: &Point2<DgarF64>) -> (u64, u64) {
    (p.x.0.to_bits(), p.y.0.to_bits())
}

/// Order-independent fingerprint of a triangle set.
fn triangle_set(tris: &[[Point2<DgarF64>; 3]]) -> Vec<[(u64, u64); 3]> {
    let mut keys: Vec<[(u64, u64); 3]> = tris
        .iter()
        .map(|t| {
            let mut k = [bits(&t[0]), bits(&t[1]), bits(&t[2])];
            k.sort_unstable();
            k
        })
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn square_yields_two_triangles() {
    let points = square();
    let mut dt = Delaunay::new();
    dt.triangulate(&points, false).unwrap();

    let tris = dt.triangles();
    assert_eq!(tris.len(), 2);

    // every emitted vertex is an input point, never a synthetic corner
    let inputs: HashSet<_> = points.iter().map(bits).collect();
    for t in &tris {
        for p in t {
            assert!(inputs.contains(&bits(p)));
        }
    }
}

#[test]
fn square_spanning_tree_skips_the_diagonal() {
    let points = square();
    let mut dt = Delaunay::new();
    dt.triangulate(&points, true).unwrap();

    let tree = dt.kruskal(true).unwrap();
    assert_eq!(tree.len(), 3);

    let mut total = 0.0;
    for seg in &tree {
        let len = seg.length_squared().to_f64().unwrap().sqrt();
        assert!((len - 10.0).abs() < 1e-9, "diagonal leaked into the tree");
        total += len;
    }
    assert!((total - 30.0).abs() < 1e-9);
}

#[test]
fn square_plus_center_fans_around_it() {
    let mut points = square();
    points.push(pt(5.0, 5.0));

    let mut dt = Delaunay::new();
    dt.triangulate(&points, false).unwrap();

    let tris = dt.triangles();
    assert_eq!(tris.len(), 4);

    let center = bits(&pt(5.0, 5.0));
    for t in &tris {
        assert!(
            t.iter().any(|p| bits(p) == center),
            "triangle without the center vertex"
        );
    }

    // no input point strictly inside any circumcircle
    for t in &tris {
        let a = &t[0];
        let (b, c) = if orient2d(&t[0], &t[1], &t[2]).is_negative() {
            (&t[2], &t[1])
        } else {
            (&t[1], &t[2])
        };
        for p in &points {
            if p == a || p == b || p == c {
                continue;
            }
            assert!(!in_circle(a, b, c, p).is_negative());
        }
    }
}

#[test]
fn on_edge_insertion_retriangulates_cleanly() {
    let mut points = square();
    points.push(pt(5.0, 0.0)); // exactly on the bottom edge

    let mut dt = Delaunay::new();
    dt.triangulate(&points, false).unwrap();

    let tris = dt.triangles();
    assert_eq!(tris.len(), 3);

    let mut vertices = HashSet::new();
    for t in &tris {
        assert!(
            !orient2d(&t[0], &t[1], &t[2]).is_zero(),
            "zero-area triangle emitted"
        );
        for p in t {
            vertices.insert(bits(p));
        }
    }
    assert_eq!(vertices.len(), 5, "split vertex duplicated or lost");
    assert!(vertices.contains(&bits(&pt(5.0, 0.0))));
}

#[test]
fn insertion_is_idempotent() {
    let mut once = square();
    once.push(pt(4.0, 6.0));

    let mut twice = once.clone();
    twice.push(pt(4.0, 6.0));
    twice.push(pt(10.0, 0.0));

    let mut dt1 = Delaunay::new();
    dt1.triangulate(&once, false).unwrap();
    let mut dt2 = Delaunay::new();
    dt2.triangulate(&twice, false).unwrap();

    assert_eq!(triangle_set(&dt1.triangles()), triangle_set(&dt2.triangles()));
}

#[test]
fn triangle_count_matches_the_planar_identity() {
    // N = 7, hull size h = 4: expect 2N - 2 - h = 8 triangles
    let mut points = square();
    points.push(pt(3.0, 2.0));
    points.push(pt(7.0, 3.0));
    points.push(pt(4.0, 7.0));

    let mut dt = Delaunay::new();
    dt.triangulate(&points, false).unwrap();
    assert_eq!(dt.triangles().len(), 8);
}

#[test]
fn random_points_satisfy_the_delaunay_property_exactly() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = HashSet::new();
    let mut points: Vec<Point2<DgarRational>> = Vec::new();
    while points.len() < 24 {
        let x = rng.random_range(0..200) as f64 / 4.0;
        let y = rng.random_range(0..200) as f64 / 4.0;
        if seen.insert((x.to_bits(), y.to_bits())) {
            points.push(Point2::new(x, y));
        }
    }

    let mut dt = Delaunay::new();
    dt.triangulate(&points, false).unwrap();
    let tris = dt.triangles();
    assert!(tris.len() >= points.len() - 2);

    for t in &tris {
        let a = &t[0];
        let (b, c) = if orient2d(&t[0], &t[1], &t[2]).is_negative() {
            (&t[2], &t[1])
        } else {
            (&t[1], &t[2])
        };
        assert!(!orient2d(a, b, c).is_zero(), "degenerate triangle emitted");
        for p in &points {
            if p == a || p == b || p == c {
                continue;
            }
            assert!(
                !in_circle(a, b, c, p).is_negative(),
                "empty-circumcircle violation at {p:?}"
            );
        }
    }
}

#[test]
fn random_triangulation_spans_all_vertices() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = HashSet::new();
    let mut points: Vec<Point2<DgarF64>> = Vec::new();
    while points.len() < 30 {
        let x = rng.random_range(0..1000) as f64 / 8.0;
        let y = rng.random_range(0..1000) as f64 / 8.0;
        if seen.insert((x.to_bits(), y.to_bits())) {
            points.push(Point2::new(x, y));
        }
    }

    let mut dt = Delaunay::new();
    dt.triangulate(&points, true).unwrap();

    let inputs: HashSet<_> = points.iter().map(bits).collect();
    for t in &dt.triangles() {
        for p in t {
            assert!(inputs.contains(&bits(p)), "synthetic corner leaked: {p:?}");
        }
    }

    // the edge graph of a triangulation is connected: a full tree comes back
    let tree = dt.kruskal(true).unwrap();
    assert_eq!(tree.len(), points.len() - 1);
}

#[test]
fn bbox_pads_the_input_bounds() {
    let mut dt = Delaunay::new();
    dt.triangulate(&square(), false).unwrap();

    let rect = dt.bbox().unwrap();
    assert_eq!(rect.min, pt(-100.0, -100.0));
    assert_eq!(rect.max, pt(110.0, 110.0));
}

#[test]
fn locate_finds_existing_vertices() {
    let points = square();
    let mut dt = Delaunay::new();
    dt.triangulate(&points, false).unwrap();

    let start = dt.edges[0];
    let target = pt(10.0, 10.0);
    let edge = dt.locate(&target, start).unwrap();
    assert!(
        *dt.mesh.orig_point(edge) == target || *dt.mesh.dest_point(edge) == target,
        "locate stopped away from the queried vertex"
    );
}

#[test]
fn sparse_inputs_produce_no_triangles() {
    let mut dt = Delaunay::new();
    dt.triangulate(&[pt(1.0, 2.0)], false).unwrap();
    assert!(dt.triangles().is_empty());

    let mut dt = Delaunay::new();
    dt.triangulate(&[pt(1.0, 2.0), pt(8.0, 3.0)], true).unwrap();
    assert!(dt.triangles().is_empty());
    assert!(dt.kruskal(true).unwrap().is_empty());
}

#[test]
fn empty_input_is_an_error() {
    let mut dt: Delaunay<DgarF64> = Delaunay::new();
    assert_eq!(
        dt.triangulate(&[], false),
        Err(TriangulationError::EmptyPointSet)
    );
}

#[test]
fn insertion_without_a_bbox_is_an_error() {
    let mut dt: Delaunay<DgarF64> = Delaunay::new();
    assert_eq!(
        dt.insert_point(pt(1.0, 1.0)),
        Err(TriangulationError::EmptyPointSet)
    );
}

#[test]
fn spanning_tree_requires_stored_vertices() {
    let mut dt = Delaunay::new();
    dt.triangulate(&square(), false).unwrap();
    assert_eq!(dt.kruskal(true), Err(TriangulationError::NoStoredVertices));
}
