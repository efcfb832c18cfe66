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

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use parkit::verbose_println;

use crate::DefInt;
use crate::graph::Edge;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: std::io::Error },
    #[error("{0}")]
    Parse(String),
}

fn next_token<'a, T, I>(tokens: &mut I, what: &str) -> Result<T, ReadError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let t = tokens
        .next()
        .ok_or_else(|| ReadError::Parse(format!("unexpected end of input while reading {what}")))?;
    t.parse()
        .map_err(|_| ReadError::Parse(format!("cannot parse {what} from {t:?}")))
}

/// Reads a whitespace-separated edge list: the vertex count, the edge
/// count, then that many endpoint pairs. Tokens past the last edge are
/// ignored.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<(usize, Vec<Edge>), ReadError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|source| ReadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut tokens = s.split_ascii_whitespace();

    let n: usize = next_token(&mut tokens, "the vertex count")?;
    let m: usize = next_token(&mut tokens, "the edge count")?;

    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let u: DefInt = next_token(&mut tokens, "an edge endpoint")?;
        let v: DefInt = next_token(&mut tokens, "an edge endpoint")?;
        edges.push(Edge::new(u, v));
    }

    verbose_println!("read n={} m={} from {}", n, edges.len(), path.display());
    Ok((n, edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("parmis-graph-io-{name}"));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_simple_edge_list() {
        let path = write_temp("simple", "5 4\n0 1\n1 2\n2 3\n3 4\n");
        let (n, edges) = read_edge_list(&path).unwrap();
        assert_eq!(n, 5);
        assert_eq!(edges, vec![
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 4),
        ]);
    }

    #[test]
    fn tolerates_arbitrary_whitespace() {
        let path = write_temp("whitespace", "  3\t2\n\n 0 1\t1    2 ");
        let (n, edges) = read_edge_list(&path).unwrap();
        assert_eq!(n, 3);
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn ignores_tokens_past_the_last_edge() {
        let path = write_temp("trailing", "2 1 0 1 99 98");
        let (n, edges) = read_edge_list(&path).unwrap();
        assert_eq!(n, 2);
        assert_eq!(edges, vec![Edge::new(0, 1)]);
    }

    #[test]
    fn fails_on_missing_file() {
        let err = read_edge_list("/nonexistent/parmis-input").unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
    }

    #[test]
    fn fails_on_premature_eof() {
        let path = write_temp("eof", "4 3\n0 1\n1 2\n");
        let err = read_edge_list(&path).unwrap_err();
        assert!(matches!(err, ReadError::Parse(_)));
    }

    #[test]
    fn fails_on_malformed_token() {
        let path = write_temp("malformed", "4 one\n");
        let err = read_edge_list(&path).unwrap_err();
        assert!(matches!(err, ReadError::Parse(_)));
    }
}
