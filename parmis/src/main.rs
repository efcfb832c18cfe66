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

use std::process;

use clap::Parser;

use parmis::checker;
use parmis::graph_io;
use parmis::solver::{self, Algorithm, SolveOptions, SolverError};

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the input graph's filename
    #[clap(value_parser, required = true)]
    ifname: String,

    /// the algorithm to use
    #[clap(value_enum, default_value_t = Algorithm::SeqGreedy)]
    algorithm: Algorithm,

    /// the number of worker threads
    #[clap(value_parser, default_value_t = 1)]
    threads: usize,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            use clap::error::ErrorKind;
            let usage_error = !matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = e.print();
            process::exit(if usage_error { 1 } else { 0 });
        }
    };

    let (n, edges) = match graph_io::read_edge_list(&args.ifname) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    let opts = SolveOptions {
        algorithm: args.algorithm,
        threads: args.threads,
        seed: solver::DEFAULT_SEED,
    };
    let solution = match solver::solve(n, &edges, &opts) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("error: {e}");
            let code = match e {
                SolverError::InvalidGraph(_) => 2,
                _ => 1,
            };
            process::exit(code);
        }
    };

    println!("algorithm: {}", args.algorithm);
    println!("threads:   {}", args.threads);
    println!("rounds:    {}", solution.rounds);
    println!("runtime:   {} ms", solution.elapsed.as_millis());
    println!("|MIS|:     {}", solution.mis.len());

    let report = checker::check(n, &edges, &solution.mis);
    for &(u, v) in &report.conflicting_edges {
        println!("check: both endpoints of ({u}, {v}) are selected");
    }
    for &v in &report.uncovered {
        println!("check: vertex {v} could still be added");
    }
    for &v in &report.out_of_range {
        println!("check: id {v} is out of range");
    }
    for &v in &report.duplicates {
        println!("check: id {v} appears more than once");
    }
    println!("check:     {}", if report.passed() { "PASS" } else { "FAIL" });
}
