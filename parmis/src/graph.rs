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

use rayon::prelude::*;
use thiserror::Error;

use crate::DefInt;

// **************************************************************
//    EDGE ARRAY REPRESENTATION
// **************************************************************

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub u: DefInt,
    pub v: DefInt,
}

impl Edge {
    pub fn new(u: DefInt, v: DefInt) -> Self { Self { u, v } }
}

impl Default for Edge {
    fn default() -> Self { Self { u: 0, v: 0 } }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge ({u}, {v}): endpoint out of range for {n} vertices")]
    EndpointOutOfRange { u: DefInt, v: DefInt, n: usize },
    #[error("self loop on vertex {0}")]
    SelfLoop(DefInt),
}

// **************************************************************
//    ADJACENCY ARRAY REPRESENTATION
// **************************************************************

pub struct Vertex<'a> {
    pub neighbors: &'a [DefInt],
    pub degree: usize,
}

impl<'a> Default for Vertex<'a> {
    fn default() -> Self {
        Self { neighbors: &[], degree: 0 }
    }
}

#[derive(Debug)]
pub struct Graph {
    pub offsets: Vec<DefInt>,
    pub edges: Vec<DefInt>,
    pub n: usize,
    pub m: usize,
}

impl Graph {
    /// Symmetrizes `edges` into CSR adjacency lists. Every undirected
    /// input pair lands in both endpoints' lists; lists are sorted and
    /// deduplicated, so `degree(v)` is the number of distinct neighbors.
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        for e in edges {
            if e.u as usize >= n || e.v as usize >= n {
                return Err(GraphError::EndpointOutOfRange { u: e.u, v: e.v, n });
            }
            if e.u == e.v {
                return Err(GraphError::SelfLoop(e.u));
            }
        }

        let mut adj: Vec<Vec<DefInt>> = vec![Vec::new(); n];
        for e in edges {
            adj[e.u as usize].push(e.v);
            adj[e.v as usize].push(e.u);
        }
        adj.par_iter_mut().for_each(|nghs| {
            nghs.sort_unstable();
            nghs.dedup();
        });

        let mut offsets = Vec::with_capacity(n + 1);
        let mut m = 0usize;
        offsets.push(0);
        for nghs in &adj {
            m += nghs.len();
            offsets.push(m as DefInt);
        }
        let mut flat = Vec::with_capacity(m);
        for nghs in &adj {
            flat.extend_from_slice(nghs);
        }

        Ok(Self { offsets, edges: flat, n, m })
    }

    #[inline(always)]
    pub fn index(&self, i: usize) -> Vertex {
        debug_assert!(i < self.n);

        let (of, of_next) = (
            self.offsets[i] as usize,
            self.offsets[i + 1] as usize
        );

        Vertex {
            neighbors: &self.edges[of..of_next],
            degree: of_next - of,
        }
    }
}
