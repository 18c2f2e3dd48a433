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

use dgar::operations::disjoint_set::DisjointSet;

#[test]
fn singletons_are_disjoint() {
    let mut set = DisjointSet::new(0..5);

    assert_eq!(set.len(), 5);
    for a in 0..5 {
        for b in 0..5 {
            if a != b {
                assert!(set.disjoint(&a, &b));
            }
        }
    }
}

#[test]
fn find_is_idempotent() {
    let mut set = DisjointSet::new(0..8);
    set.union(&0, &1);
    set.union(&1, &2);
    set.union(&5, &6);

    for x in 0..8 {
        let root = set.find(&x);
        assert_eq!(set.find(&x), root);
        assert_eq!(set.find(&x), root);
    }
}

#[test]
fn union_joins_partitions() {
    let mut set = DisjointSet::new(0..4);

    set.union(&0, &1);
    assert!(!set.disjoint(&0, &1));
    assert!(set.disjoint(&0, &2));

    set.union(&2, &3);
    set.union(&1, &3);
    assert!(!set.disjoint(&0, &3));
    assert!(!set.disjoint(&1, &2));
}

#[test]
fn union_is_commutative_in_effect() {
    let mut left = DisjointSet::new(0..6);
    left.union(&0, &1);
    left.union(&2, &3);
    left.union(&1, &2);

    let mut right = DisjointSet::new(0..6);
    right.union(&1, &0);
    right.union(&3, &2);
    right.union(&2, &1);

    for a in 0..6 {
        for b in 0..6 {
            assert_eq!(left.disjoint(&a, &b), right.disjoint(&a, &b));
        }
    }
}

#[test]
fn redundant_union_is_harmless() {
    let mut set = DisjointSet::new(0..3);
    set.union(&0, &1);
    set.union(&0, &1);
    set.union(&1, &0);

    assert!(!set.disjoint(&0, &1));
    assert!(set.disjoint(&0, &2));
}

#[test]
fn unseen_entries_become_singletons() {
    let mut set: DisjointSet<&str> = DisjointSet::new([]);
    assert!(set.is_empty());

    assert!(set.disjoint(&"a", &"b"));
    assert_eq!(set.len(), 2);

    set.union(&"a", &"c");
    assert_eq!(set.len(), 3);
    assert!(!set.disjoint(&"a", &"c"));
}

#[test]
fn insert_is_idempotent() {
    let mut set = DisjointSet::new([10, 20]);
    let slot = set.insert(10);
    assert_eq!(set.insert(10), slot);
    assert_eq!(set.len(), 2);
}
