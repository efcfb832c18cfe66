// ============================================================================
// This code is part of ParMIS.
// ----------------------------------------------------------------------------
// MIT License
//
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use crate::DefInt;
use crate::graph::Edge;

/// Everything that disqualifies a candidate set, collected in one pass
/// over the raw edge list. A candidate is a maximal independent set iff
/// all four lists come back empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// ids outside `[0, n)`.
    pub out_of_range: Vec<DefInt>,
    /// ids listed more than once.
    pub duplicates: Vec<DefInt>,
    /// edges with both endpoints selected (independence violations).
    pub conflicting_edges: Vec<(DefInt, DefInt)>,
    /// vertices neither selected nor adjacent to a selected vertex
    /// (maximality violations).
    pub uncovered: Vec<DefInt>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.out_of_range.is_empty()
            && self.duplicates.is_empty()
            && self.conflicting_edges.is_empty()
            && self.uncovered.is_empty()
    }
}

/// Validates `mis` against `(n, edges)` without trusting the solver's
/// adjacency structure. O(n + m).
pub fn check(n: usize, edges: &[Edge], mis: &[DefInt]) -> CheckReport {
    let mut report = CheckReport::default();

    let mut selected = vec![false; n];
    for &v in mis {
        let vi = v as usize;
        if vi >= n {
            report.out_of_range.push(v);
        } else if selected[vi] {
            report.duplicates.push(v);
        } else {
            selected[vi] = true;
        }
    }

    let mut covered = selected.clone();
    for e in edges {
        let (u, v) = (e.u as usize, e.v as usize);
        if u >= n || v >= n {
            continue;
        }
        if selected[u] && selected[v] {
            report.conflicting_edges.push((e.u, e.v));
        }
        if selected[u] {
            covered[v] = true;
        }
        if selected[v] {
            covered[u] = true;
        }
    }

    for (v, &c) in covered.iter().enumerate() {
        if !c {
            report.uncovered.push(v as DefInt);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(DefInt, DefInt)]) -> Vec<Edge> {
        pairs.iter().map(|&(u, v)| Edge::new(u, v)).collect()
    }

    #[test]
    fn accepts_a_valid_mis() {
        // path 0-1-2-3-4
        let es = edges(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert!(check(5, &es, &[0, 2, 4]).passed());
    }

    #[test]
    fn reports_independence_violation() {
        let es = edges(&[(0, 1), (1, 2)]);
        let report = check(3, &es, &[0, 1]);
        assert_eq!(report.conflicting_edges, vec![(0, 1)]);
        assert!(!report.passed());
    }

    #[test]
    fn reports_uncovered_vertex() {
        let es = edges(&[(0, 1), (2, 3)]);
        let report = check(4, &es, &[0]);
        assert_eq!(report.uncovered, vec![2, 3]);
    }

    #[test]
    fn reports_out_of_range_and_duplicate_ids() {
        let es = edges(&[(0, 1)]);
        let report = check(2, &es, &[0, 0, 7]);
        assert_eq!(report.duplicates, vec![0]);
        assert_eq!(report.out_of_range, vec![7]);
    }

    #[test]
    fn empty_graph_and_empty_set_pass() {
        assert!(check(0, &[], &[]).passed());
    }

    #[test]
    fn isolated_vertices_must_be_selected() {
        let report = check(2, &[], &[0]);
        assert_eq!(report.uncovered, vec![1]);
    }

    #[test]
    fn verdict_is_idempotent() {
        let es = edges(&[(0, 1), (1, 2), (0, 2)]);
        let first = check(3, &es, &[0, 2]);
        let second = check(3, &es, &[0, 2]);
        assert_eq!(first, second);
    }
}
