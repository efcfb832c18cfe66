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

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use thiserror::Error;

use parkit::parallel::pinned_pool;

use crate::DefInt;
use crate::algorithms::{blelloch, luby, seq_greedy};
use crate::graph::{Edge, Graph, GraphError};

/// Fixed default seed; runs are reproducible unless the caller overrides.
pub const DEFAULT_SEED: u64 = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    #[value(name = "SeqGreedy")]
    SeqGreedy,
    #[value(name = "Luby")]
    Luby,
    #[value(name = "Blelloch")]
    Blelloch,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Algorithm::SeqGreedy => write!(f, "SeqGreedy"),
            Algorithm::Luby => write!(f, "Luby"),
            Algorithm::Blelloch => write!(f, "Blelloch"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SeqGreedy" => Ok(Algorithm::SeqGreedy),
            "Luby" => Ok(Algorithm::Luby),
            "Blelloch" => Ok(Algorithm::Blelloch),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid thread count {0}; need at least one worker")]
    InvalidConfig(usize),
    #[error(transparent)]
    InvalidGraph(#[from] GraphError),
    #[error("cannot build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub struct SolveOptions {
    pub algorithm: Algorithm,
    pub threads: usize,
    pub seed: u64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::SeqGreedy,
            threads: 1,
            seed: DEFAULT_SEED,
        }
    }
}

pub struct Solution {
    /// Members of the set, ascending.
    pub mis: Vec<DefInt>,
    pub rounds: usize,
    pub elapsed: Duration,
}

/// Builds the graph and runs the selected kernel. One thread takes the
/// kernel's sequential path; more run its parallel path on a dedicated
/// pinned pool of that size.
pub fn solve(n: usize, edges: &[Edge], opts: &SolveOptions) -> Result<Solution, SolverError> {
    if opts.threads == 0 {
        return Err(SolverError::InvalidConfig(0));
    }
    let g = Graph::from_edges(n, edges)?;

    let pool = if opts.threads > 1 && opts.algorithm != Algorithm::SeqGreedy {
        Some(pinned_pool(opts.threads)?)
    } else {
        None
    };

    let start = Instant::now();
    let (in_mis, rounds) = match (opts.algorithm, &pool) {
        (Algorithm::SeqGreedy, _) => (seq_greedy::maximal_independent_set(&g), 1),
        (Algorithm::Luby, None) => luby::maximal_independent_set_seq(&g, opts.seed),
        (Algorithm::Luby, Some(p)) => p.install(|| luby::maximal_independent_set(&g, opts.seed)),
        (Algorithm::Blelloch, None) => blelloch::maximal_independent_set_seq(&g, opts.seed),
        (Algorithm::Blelloch, Some(p)) => {
            p.install(|| blelloch::maximal_independent_set(&g, opts.seed))
        }
    };
    let elapsed = start.elapsed();

    let mis = in_mis
        .iter()
        .enumerate()
        .filter(|(_, &f)| f)
        .map(|(v, _)| v as DefInt)
        .collect();

    Ok(Solution { mis, rounds, elapsed })
}
