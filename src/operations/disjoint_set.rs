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

use std::hash::Hash;

use ahash::AHashMap;

#[derive(Debug, Clone)]
struct Node {
    parent: usize,
    rank: u32,
}

/// Mergeable partition over arbitrary hashable elements.
///
/// Nodes live in a slot arena keyed through a hash map, so elements are
/// identified by value, never by a stringified key. Roots are self-parented;
/// `find` halves paths as it walks, keeping trees shallow alongside
/// union-by-rank.
#[derive(Debug, Clone)]
pub struct DisjointSet<K>
where
    K: Eq + Hash + Clone,
{
    nodes: Vec<Node>,
    ids: AHashMap<K, usize>,
}

impl<K> DisjointSet<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = Self {
            nodes: Vec::new(),
            ids: AHashMap::new(),
        };
        for entry in entries {
            set.insert(entry);
        }
        set
    }

    /// Adds `entry` as a singleton partition; idempotent. Returns its slot.
    pub fn insert(&mut self, entry: K) -> usize {
        if let Some(&slot) = self.ids.get(&entry) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(Node {
            parent: slot,
            rank: 0,
        });
        self.ids.insert(entry, slot);
        slot
    }

    /// Slot of the representative of `entry`'s partition. Unseen entries
    /// become singletons.
    pub fn find(&mut self, entry: &K) -> usize {
        let slot = match self.ids.get(entry) {
            Some(&slot) => slot,
            None => self.insert(entry.clone()),
        };
        self.find_slot(slot)
    }

    fn find_slot(&mut self, mut slot: usize) -> usize {
        while self.nodes[slot].parent != slot {
            let grandparent = self.nodes[self.nodes[slot].parent].parent;
            self.nodes[slot].parent = grandparent;
            slot = grandparent;
        }
        slot
    }

    /// True when the two entries live in different partitions.
    pub fn disjoint(&mut self, one: &K, other: &K) -> bool {
        self.find(one) != self.find(other)
    }

    /// Merges the partitions of `one` and `other` (union by rank).
    pub fn union(&mut self, one: &K, other: &K) {
        let r1 = self.find(one);
        let r2 = self.find(other);

        if r1 == r2 {
            return;
        }

        if self.nodes[r1].rank < self.nodes[r2].rank {
            self.nodes[r1].parent = r2;
        } else if self.nodes[r2].rank < self.nodes[r1].rank {
            self.nodes[r2].parent = r1;
        } else {
            self.nodes[r2].parent = r1;
            self.nodes[r1].rank += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
