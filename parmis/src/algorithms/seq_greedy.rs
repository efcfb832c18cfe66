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
use crate::graph::Graph;

/// Deterministic baseline. Walks vertices by ascending degree (the sort
/// is stable, so equal degrees keep id order) and takes every vertex
/// whose neighborhood is still untouched. O((n + m) log n).
pub fn maximal_independent_set(g: &Graph) -> Vec<bool> {
    let n = g.n;
    let mut order: Vec<DefInt> = (0..n as DefInt).collect();
    order.sort_by_key(|&v| g.index(v as usize).degree);

    let mut marked = vec![false; n];
    let mut in_mis = vec![false; n];
    for &v in &order {
        let v = v as usize;
        if marked[v] {
            continue;
        }
        in_mis[v] = true;
        marked[v] = true;
        for &ngh in g.index(v).neighbors {
            marked[ngh as usize] = true;
        }
    }
    in_mis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn solve(n: usize, pairs: &[(DefInt, DefInt)]) -> Vec<DefInt> {
        let edges: Vec<Edge> = pairs.iter().map(|&(u, v)| Edge::new(u, v)).collect();
        let g = Graph::from_edges(n, &edges).unwrap();
        maximal_independent_set(&g)
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(|(v, _)| v as DefInt)
            .collect()
    }

    #[test]
    fn path_takes_alternating_vertices() {
        assert_eq!(solve(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]), vec![0, 2, 4]);
    }

    #[test]
    fn triangle_takes_lowest_id() {
        assert_eq!(solve(3, &[(0, 1), (1, 2), (0, 2)]), vec![0]);
    }

    #[test]
    fn star_takes_all_leaves() {
        assert_eq!(solve(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn disjoint_edges_take_lower_endpoints() {
        assert_eq!(solve(4, &[(0, 1), (2, 3)]), vec![0, 2]);
    }

    #[test]
    fn complete_graph_takes_vertex_zero() {
        assert_eq!(
            solve(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]),
            vec![0]
        );
    }

    #[test]
    fn no_edges_takes_everything() {
        assert_eq!(solve(3, &[]), vec![0, 1, 2]);
    }
}
