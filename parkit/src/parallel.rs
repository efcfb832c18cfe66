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

use std::ops::Range;

use affinity::set_thread_affinity;
use num_traits::PrimInt;
use rayon::prelude::*;

pub trait ParallelFor<T, F> {
    fn par_for(&self, f: F, granularity: Option<usize>)
    where
        T: PrimInt,
        F: Fn(T) + Send + Sync;
}

impl<F> ParallelFor<usize, F> for Range<usize> {
    #[inline(always)]
    fn par_for(&self, f: F, granularity: Option<usize>)
    where
        F: Fn(usize) + Send + Sync,
    {
        let (start, end) = (self.start, self.end);
        if let Some(g) = granularity {
            (start..end)
                .into_par_iter()
                .with_min_len(g)
                .with_max_len(g)
                .for_each(|i| { f(i); });
        } else {
            (start..end).into_par_iter().for_each(f);
        }
    }
}

/// Builds a worker pool of `threads` threads, each pinned to its own core.
pub fn pinned_pool(threads: usize) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .start_handler(|i| {
            let _ = set_thread_affinity([i]);
        })
        .build()
}
