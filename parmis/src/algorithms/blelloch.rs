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

//! Root-based MIS in the style of Blelloch, Fineman, and Shun. Simulates
//! the serial greedy that scans vertices in the order of a random
//! permutation: a vertex joins the set once every higher-priority
//! neighbor has been eliminated (its priority count reaches zero), and
//! its neighbors are eliminated in turn. Deterministic given the
//! permutation; expected O(log n / log log n) rounds.

use std::sync::atomic::AtomicU32;

use rayon::prelude::*;

use parkit::random::Random;
use parkit::verbose_println;

use crate::{DefInt, ORDER};
use crate::graph::Graph;

/// The priority permutation: rank of every vertex in the order of its
/// hashed key. The key includes the vertex id, so keys are unique and the
/// unstable sorts on both paths produce the same ranks.
fn random_permutation(n: usize, rng: &Random, parallel: bool) -> Vec<DefInt> {
    let mut order: Vec<DefInt> = (0..n as DefInt).collect();
    let mut perm = vec![0 as DefInt; n];
    if parallel {
        order.par_sort_unstable_by_key(|&v| (rng.ith_rand(v as u64), v));
        // ranks scatter to distinct slots: `order` is a permutation
        let perm_ptr = perm.as_ptr() as usize;
        order.par_iter().enumerate().for_each(|(rank, &v)| unsafe {
            (perm_ptr as *mut DefInt).add(v as usize).write(rank as DefInt);
        });
    } else {
        order.sort_unstable_by_key(|&v| (rng.ith_rand(v as u64), v));
        for (rank, &v) in order.iter().enumerate() {
            perm[v as usize] = rank as DefInt;
        }
    }
    perm
}

pub fn maximal_independent_set(g: &Graph, seed: u64) -> (Vec<bool>, usize) {
    let n = g.n;
    if n == 0 {
        return (Vec::new(), 0);
    }
    let perm = random_permutation(n, &Random::new(seed), true);

    // count of still-undecided neighbors ahead of v in the permutation;
    // v is a root exactly when this reaches zero
    let count: Vec<AtomicU32> = (0..n)
        .into_par_iter()
        .map(|v| {
            let pv = perm[v];
            let ahead = g
                .index(v)
                .neighbors
                .iter()
                .filter(|&&u| perm[u as usize] < pv)
                .count();
            AtomicU32::new(ahead as u32)
        })
        .collect();

    let mut root_round = vec![0u32; n];
    root_round.par_iter_mut().enumerate().for_each(|(v, r)| {
        if count[v].load(ORDER) == 0 {
            *r = 1;
        }
    });
    let mut removed = vec![0u32; n];
    let mut in_mis = vec![false; n];

    let mut round = 0u32;
    loop {
        round += 1;
        verbose_println!("Round {round}");

        // admit this round's roots
        in_mis.par_iter_mut().enumerate().for_each(|(v, m)| {
            if root_round[v] == round {
                *m = true;
            }
        });

        // eliminate undecided neighbors of the new roots
        removed.par_iter_mut().enumerate().for_each(|(v, rem)| {
            if count[v].load(ORDER) == 0 {
                return;
            }
            for &ngh in g.index(v).neighbors {
                if root_round[ngh as usize] == round {
                    count[v].store(0, ORDER);
                    *rem = round;
                    break;
                }
            }
        });

        // promote vertices whose higher-priority neighborhood just
        // drained; reaching zero is witnessed by the fetch_sub return
        root_round.par_iter_mut().enumerate().for_each(|(v, root)| {
            if count[v].load(ORDER) == 0 {
                return;
            }
            let pv = perm[v];
            let mut rooted = false;
            for &ngh in g.index(v).neighbors {
                let u = ngh as usize;
                if removed[u] == round && pv > perm[u] && count[v].fetch_sub(1, ORDER) == 1 {
                    rooted = true;
                }
            }
            if rooted {
                *root = round + 1;
            }
        });

        if !root_round.par_iter().any(|&r| r == round + 1) {
            break;
        }
    }

    (in_mis, round as usize)
}

/// Worklist rendition for a single thread: the current roots and the
/// vertices they eliminated, processed round by round. Same permutation,
/// same set, same round count as the parallel path.
pub fn maximal_independent_set_seq(g: &Graph, seed: u64) -> (Vec<bool>, usize) {
    let n = g.n;
    if n == 0 {
        return (Vec::new(), 0);
    }
    let perm = random_permutation(n, &Random::new(seed), false);

    let mut count: Vec<u32> = (0..n)
        .map(|v| {
            let pv = perm[v];
            g.index(v)
                .neighbors
                .iter()
                .filter(|&&u| perm[u as usize] < pv)
                .count() as u32
        })
        .collect();

    let mut roots: Vec<DefInt> = (0..n as DefInt)
        .filter(|&v| count[v as usize] == 0)
        .collect();
    let mut in_mis = vec![false; n];

    let mut round = 0usize;
    while !roots.is_empty() {
        round += 1;
        verbose_println!("Round {round}");

        let mut eliminated: Vec<DefInt> = Vec::new();
        for &root in &roots {
            in_mis[root as usize] = true;
            for &ngh in g.index(root as usize).neighbors {
                let u = ngh as usize;
                if count[u] > 0 {
                    count[u] = 0;
                    eliminated.push(ngh);
                }
            }
        }

        let mut next_roots: Vec<DefInt> = Vec::new();
        for &u in &eliminated {
            let pu = perm[u as usize];
            for &ngh in g.index(u as usize).neighbors {
                let v = ngh as usize;
                if perm[v] > pu && count[v] > 0 {
                    count[v] -= 1;
                    if count[v] == 0 {
                        next_roots.push(ngh);
                    }
                }
            }
        }
        roots = next_roots;
    }

    (in_mis, round)
}
