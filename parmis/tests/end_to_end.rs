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

use rand::Rng;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use parmis::DefInt;
use parmis::checker::check;
use parmis::graph::Edge;
use parmis::solver::{solve, Algorithm, SolveOptions, DEFAULT_SEED};

const ALL_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::SeqGreedy, Algorithm::Luby, Algorithm::Blelloch];

fn edges(pairs: &[(DefInt, DefInt)]) -> Vec<Edge> {
    pairs.iter().map(|&(u, v)| Edge::new(u, v)).collect()
}

fn opts(algorithm: Algorithm, threads: usize) -> SolveOptions {
    SolveOptions { algorithm, threads, seed: DEFAULT_SEED }
}

fn checked_solve(n: usize, es: &[Edge], algorithm: Algorithm, threads: usize) -> Vec<DefInt> {
    let solution = solve(n, es, &opts(algorithm, threads)).unwrap();
    let report = check(n, es, &solution.mis);
    assert!(
        report.passed(),
        "{algorithm} with {threads} threads failed the checker: {report:?}"
    );
    solution.mis
}

fn erdos_renyi(n: usize, p: f64, seed: u64) -> Vec<Edge> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let mut es = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                es.push(Edge::new(u as DefInt, v as DefInt));
            }
        }
    }
    es
}

// ---------------------------------------------------------------------------
// Sequential greedy scenarios
// ---------------------------------------------------------------------------

#[test]
fn greedy_on_a_path_takes_alternating_vertices() {
    let es = edges(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(checked_solve(5, &es, Algorithm::SeqGreedy, 1), vec![0, 2, 4]);
}

#[test]
fn greedy_on_a_triangle_takes_vertex_zero() {
    let es = edges(&[(0, 1), (1, 2), (0, 2)]);
    assert_eq!(checked_solve(3, &es, Algorithm::SeqGreedy, 1), vec![0]);
}

#[test]
fn greedy_on_a_star_takes_all_leaves() {
    let es = edges(&[(0, 1), (0, 2), (0, 3), (0, 4)]);
    assert_eq!(checked_solve(5, &es, Algorithm::SeqGreedy, 1), vec![1, 2, 3, 4]);
}

#[test]
fn greedy_on_disjoint_edges_takes_lower_endpoints() {
    let es = edges(&[(0, 1), (2, 3)]);
    assert_eq!(checked_solve(4, &es, Algorithm::SeqGreedy, 1), vec![0, 2]);
}

#[test]
fn greedy_is_a_function_of_the_graph_alone() {
    let es = erdos_renyi(200, 0.05, 11);
    let first = checked_solve(200, &es, Algorithm::SeqGreedy, 1);
    let second = checked_solve(200, &es, Algorithm::SeqGreedy, 1);
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Boundaries, all kernels
// ---------------------------------------------------------------------------

#[test]
fn empty_graph_yields_the_empty_set() {
    for algorithm in ALL_ALGORITHMS {
        for threads in [1, 4] {
            assert!(checked_solve(0, &[], algorithm, threads).is_empty());
        }
    }
}

#[test]
fn edgeless_graph_yields_every_vertex() {
    let expected: Vec<DefInt> = (0..6).collect();
    for algorithm in ALL_ALGORITHMS {
        for threads in [1, 4] {
            assert_eq!(checked_solve(6, &[], algorithm, threads), expected);
        }
    }
}

#[test]
fn complete_graph_yields_a_single_vertex() {
    let mut pairs = Vec::new();
    for u in 0..6u32 {
        for v in (u + 1)..6 {
            pairs.push((u, v));
        }
    }
    let es = edges(&pairs);
    for algorithm in ALL_ALGORITHMS {
        for threads in [1, 4] {
            assert_eq!(checked_solve(6, &es, algorithm, threads).len(), 1);
        }
    }
    assert_eq!(checked_solve(6, &es, Algorithm::SeqGreedy, 1), vec![0]);
}

#[test]
fn single_edge_yields_one_endpoint() {
    let es = edges(&[(0, 1)]);
    for algorithm in ALL_ALGORITHMS {
        assert_eq!(checked_solve(2, &es, algorithm, 1).len(), 1);
    }
}

#[test]
fn isolated_vertex_beside_a_clique_is_always_selected() {
    // 0..3 form K4, vertex 4 is isolated
    let es = edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    for algorithm in ALL_ALGORITHMS {
        for threads in [1, 4] {
            let mis = checked_solve(5, &es, algorithm, threads);
            assert!(mis.contains(&4), "{algorithm} dropped the isolated vertex");
        }
    }
}

#[test]
fn duplicate_input_edges_do_not_change_the_result() {
    let once = edges(&[(0, 1), (1, 2)]);
    let twice = edges(&[(0, 1), (0, 1), (1, 2), (2, 1)]);
    for algorithm in ALL_ALGORITHMS {
        assert_eq!(
            checked_solve(3, &once, algorithm, 1),
            checked_solve(3, &twice, algorithm, 1)
        );
    }
}

// ---------------------------------------------------------------------------
// Reproducibility
// ---------------------------------------------------------------------------

#[test]
fn luby_with_a_fixed_seed_is_reproducible() {
    let es = erdos_renyi(300, 0.03, 5);
    let first = checked_solve(300, &es, Algorithm::Luby, 1);
    let second = checked_solve(300, &es, Algorithm::Luby, 1);
    assert_eq!(first, second);
}

#[test]
fn luby_output_does_not_depend_on_the_thread_count() {
    let es = erdos_renyi(300, 0.03, 6);
    let one = checked_solve(300, &es, Algorithm::Luby, 1);
    let four = checked_solve(300, &es, Algorithm::Luby, 4);
    assert_eq!(one, four);
}

#[test]
fn blelloch_output_does_not_depend_on_the_thread_count() {
    let es = erdos_renyi(300, 0.03, 7);
    let one = checked_solve(300, &es, Algorithm::Blelloch, 1);
    let four = checked_solve(300, &es, Algorithm::Blelloch, 4);
    assert_eq!(one, four);
}

// ---------------------------------------------------------------------------
// Random graph end-to-end
// ---------------------------------------------------------------------------

#[test]
fn erdos_renyi_1000_all_kernels_pass_the_checker() {
    let es = erdos_renyi(1000, 0.01, 1);
    for algorithm in ALL_ALGORITHMS {
        for threads in [1, 4] {
            let mis = checked_solve(1000, &es, algorithm, threads);
            assert!(
                mis.len() >= 100,
                "{algorithm} returned a suspiciously small set ({})",
                mis.len()
            );
        }
    }
}

#[test]
fn parallel_round_counts_stay_logarithmic() {
    let es = erdos_renyi(1000, 0.01, 2);
    for algorithm in [Algorithm::Luby, Algorithm::Blelloch] {
        let solution = solve(1000, &es, &opts(algorithm, 4)).unwrap();
        assert!(
            solution.rounds <= 60,
            "{algorithm} needed {} rounds",
            solution.rounds
        );
    }
}
