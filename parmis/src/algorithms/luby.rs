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

//! Luby's randomized MIS. Each round draws candidates with probability
//! 1/(2 deg), drops the loser of every conflicting edge (larger degree
//! wins, larger id on equal degree), commits the survivors, and
//! eliminates their neighborhoods. Expected O(log n) rounds.
//!
//! `selected` and `conflict` hold the round number in which the vertex
//! entered the candidate set / lost its tie-break; only equality with the
//! current round means anything, so the arrays never need clearing.
//! Coin flips are keyed on (seed, round, vertex), so the output is the
//! same for every worker count.

use std::sync::atomic::{AtomicBool, AtomicU32};

use rayon::prelude::*;

use parkit::parallel::ParallelFor;
use parkit::random::Random;
use parkit::verbose_println;

use crate::ORDER;
use crate::graph::Graph;

const GRANULARITY: usize = 256;

pub fn maximal_independent_set(g: &Graph, seed: u64) -> (Vec<bool>, usize) {
    let n = g.n;
    if n == 0 {
        return (Vec::new(), 0);
    }
    let rng = Random::new(seed);

    let active: Vec<AtomicBool> = (0..n)
        .into_par_iter()
        .map(|_| AtomicBool::new(true))
        .collect();
    let degree: Vec<AtomicU32> = (0..n)
        .into_par_iter()
        .map(|v| AtomicU32::new(g.index(v).degree as u32))
        .collect();
    let mut selected = vec![0u32; n];
    let mut conflict = vec![0u32; n];
    let mut in_mis = vec![false; n];

    let mut round = 0u32;
    loop {
        round += 1;
        verbose_println!("Round {round}");
        let coins = rng.fork(round as u64);

        // candidate selection: isolated-in-the-residual vertices always
        // enter, the rest with probability 1/(2 deg)
        selected.par_iter_mut().enumerate().for_each(|(v, sel)| {
            if !active[v].load(ORDER) {
                return;
            }
            let d = degree[v].load(ORDER);
            if d == 0 || coins.ith_rand_f64(v as u64) < 1.0 / (2.0 * d as f64) {
                *sel = round;
            }
        });

        // conflict resolution: the loser of every conflicting edge backs
        // off for this round
        conflict.par_iter_mut().enumerate().for_each(|(v, conf)| {
            if selected[v] != round {
                return;
            }
            let dv = degree[v].load(ORDER);
            for &ngh in g.index(v).neighbors {
                let u = ngh as usize;
                if selected[u] != round {
                    continue;
                }
                let du = degree[u].load(ORDER);
                if dv < du || (dv == du && v < u) {
                    *conf = round;
                    break;
                }
            }
        });

        // commit the surviving candidates
        in_mis.par_iter_mut().enumerate().for_each(|(v, m)| {
            if selected[v] == round && conflict[v] != round {
                *m = true;
                active[v].store(false, ORDER);
            }
        });

        // eliminate neighbors of the new members, one degree decrement
        // per adjacent member
        let (selected, conflict) = (&selected, &conflict);
        (0..n).par_for(
            |v| {
                if !active[v].load(ORDER) {
                    return;
                }
                let mut eliminated = false;
                for &ngh in g.index(v).neighbors {
                    let u = ngh as usize;
                    if selected[u] == round && conflict[u] != round {
                        degree[v].fetch_sub(1, ORDER);
                        eliminated = true;
                    }
                }
                if eliminated {
                    active[v].store(false, ORDER);
                }
            },
            Some(GRANULARITY),
        );

        if !active.par_iter().any(|a| a.load(ORDER)) {
            break;
        }
    }

    (in_mis, round as usize)
}

/// Single-thread rendition of the same phased rounds. Shares the coin
/// draws with the parallel path, so both return the identical set for a
/// given seed.
pub fn maximal_independent_set_seq(g: &Graph, seed: u64) -> (Vec<bool>, usize) {
    let n = g.n;
    if n == 0 {
        return (Vec::new(), 0);
    }
    let rng = Random::new(seed);

    let mut active = vec![true; n];
    let mut degree: Vec<u32> = (0..n).map(|v| g.index(v).degree as u32).collect();
    let mut selected = vec![0u32; n];
    let mut conflict = vec![0u32; n];
    let mut in_mis = vec![false; n];
    let mut num_active = n;

    let mut round = 0u32;
    while num_active > 0 {
        round += 1;
        verbose_println!("Round {round}");
        let coins = rng.fork(round as u64);

        for v in 0..n {
            if !active[v] {
                continue;
            }
            let d = degree[v];
            if d == 0 || coins.ith_rand_f64(v as u64) < 1.0 / (2.0 * d as f64) {
                selected[v] = round;
            }
        }

        for v in 0..n {
            if selected[v] != round {
                continue;
            }
            for &ngh in g.index(v).neighbors {
                let u = ngh as usize;
                if selected[u] != round {
                    continue;
                }
                if degree[v] < degree[u] || (degree[v] == degree[u] && v < u) {
                    conflict[v] = round;
                    break;
                }
            }
        }

        for v in 0..n {
            if selected[v] == round && conflict[v] != round {
                in_mis[v] = true;
                active[v] = false;
                num_active -= 1;
            }
        }

        for v in 0..n {
            if !active[v] {
                continue;
            }
            let mut eliminated = false;
            for &ngh in g.index(v).neighbors {
                let u = ngh as usize;
                if selected[u] == round && conflict[u] != round {
                    degree[v] -= 1;
                    eliminated = true;
                }
            }
            if eliminated {
                active[v] = false;
                num_active -= 1;
            }
        }
    }

    (in_mis, round as usize)
}
