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

//! Maximal independent set solvers over static in-memory graphs.
//!
//! A maximal independent set S of an undirected graph has no two adjacent
//! members, and every vertex outside S has a neighbor in S. Three kernels
//! are provided: a deterministic degree-sorted greedy baseline, Luby's
//! randomized parallel algorithm, and a root-based parallel algorithm that
//! simulates serial greedy over a random permutation. An independent
//! checker validates any candidate set against the raw edge list.

use std::sync::atomic::Ordering;

pub mod algorithms;
pub mod checker;
pub mod graph;
pub mod graph_io;
pub mod solver;

/// Default integer type for vertex ids.
pub type DefInt = u32;

/// Memory ordering for all per-vertex atomics. Phases are separated by
/// rayon joins, which already order cross-phase reads after writes.
pub const ORDER: Ordering = Ordering::Relaxed;
