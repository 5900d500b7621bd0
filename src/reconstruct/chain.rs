// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Chain reconstruction - segment soup to maximal polylines
//!
//! Segments are only ever joined head-to-tail (`end` of one onto `start` of
//! the next), never reversed. Each segment ends up in exactly one polyline.
//!
//! When several unused segments match the same endpoint (a T-junction), the
//! first one in soup order wins. Such inputs have no canonical answer and
//! the result depends on emission order.

use crate::geometry::{points_equal, Polyline, Segment};

/// Sequential reconstructor for a single segment soup
pub struct ChainReconstructor<'a> {
    soup: &'a [Segment],
    consumed: Vec<bool>,
}

impl<'a> ChainReconstructor<'a> {
    pub fn new(soup: &'a [Segment]) -> Self {
        Self {
            soup,
            consumed: vec![false; soup.len()],
        }
    }

    /// Reconstruct every polyline of `soup`
    pub fn reconstruct(soup: &'a [Segment]) -> Vec<Polyline> {
        Self::new(soup).run()
    }

    /// Consume the soup, emitting polylines in head discovery order
    pub fn run(mut self) -> Vec<Polyline> {
        let mut polylines = Vec::new();
        let mut i = 0;

        // `i` is revisited until consumed: a head found elsewhere may leave it unused
        while i < self.soup.len() {
            if self.consumed[i] {
                i += 1;
                continue;
            }

            let head = self.find_head(i);
            polylines.push(self.walk_forward(head));
        }

        polylines
    }

    /// Walk predecessors back from `candidate` to the start of its chain
    ///
    /// Returns `candidate` itself when it lies on a ring.
    fn find_head(&self, candidate: usize) -> usize {
        let target_end = self.soup[candidate].end;
        let mut visited = vec![false; self.soup.len()];
        visited[candidate] = true;
        let mut current = candidate;

        loop {
            let Some(prev) = self.find_unconsumed(|s| points_equal(&s.end, &self.soup[current].start))
            else {
                return current;
            };

            if points_equal(&self.soup[prev].start, &target_end) {
                // Loop closed back onto the candidate
                return candidate;
            }

            if visited[prev] {
                // Predecessors cycle without passing through the candidate
                return current;
            }

            visited[prev] = true;
            current = prev;
        }
    }

    /// Follow successors from `head`, consuming every segment used
    fn walk_forward(&mut self, head: usize) -> Polyline {
        self.consumed[head] = true;
        let first = self.soup[head].start;
        let mut points = vec![first, self.soup[head].end];
        let mut current = head;

        loop {
            if points_equal(&self.soup[current].end, &first) {
                return Polyline::closed(points);
            }

            let segment = self.soup[current];
            let Some(next) = self.find_unconsumed(|s| segment.continues_into(s)) else {
                return Polyline::open(points);
            };

            self.consumed[next] = true;
            points.push(self.soup[next].end);
            current = next;
        }
    }

    /// First unconsumed segment in soup order matching `predicate`
    fn find_unconsumed(&self, predicate: impl Fn(&Segment) -> bool) -> Option<usize> {
        self.soup
            .iter()
            .enumerate()
            .find(|(i, s)| !self.consumed[*i] && predicate(*s))
            .map(|(i, _)| i)
    }
}
