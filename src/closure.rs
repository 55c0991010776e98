use crate::basics::*;
use crate::relation::Relation;

/// Smallest reflexive and transitive relation containing the covering
/// edges: per-source reachability with an explicit stack, no recursion.
/// A cyclic cover still terminates, yielding the reachability preorder
/// (which is then not antisymmetric).
pub fn reflexive_transitive_closure(cover: &Relation) -> Relation {
  let universe = cover.universe();
  let n = universe.len();
  let mut adjacency = vec![Vec::new(); n];
  for (a, b) in cover.pairs() {
    // constructor already dropped out-of-universe pairs
    adjacency[cover.index_of(a).unwrap()].push(cover.index_of(b).unwrap());
  }
  let mut closed = Vec::new();
  for source in 0..n {
    let mut seen = vec![false; n];
    seen[source] = true;
    closed.push((universe[source].clone(), universe[source].clone()));
    let mut stack = vec![source];
    while let Some(v) = stack.pop() {
      for &w in &adjacency[v] {
        if !seen[w] {
          seen[w] = true;
          closed.push((universe[source].clone(), universe[w].clone()));
          stack.push(w);
        }
      }
    }
  }
  Relation::new(universe.to_vec(), closed)
}

/// Minimal covering pairs of a full order: keep (a,b), a != b, iff no
/// intermediate c has both (a,c) and (c,b) in R. Assumes R is already
/// reflexive and transitive; on anything else the output is not a
/// meaningful covering set.
pub fn covering_reduction(full: &Relation) -> Vec<Pair> {
  let n = full.universe().len();
  let mut covers = Vec::new();
  for (a, b) in full.pairs() {
    let (i, j) = (full.index_of(a).unwrap(), full.index_of(b).unwrap());
    if i == j {
      continue;
    }
    let has_intermediate =
      (0..n).any(|k| k != i && k != j && full.contains_idx(i, k) && full.contains_idx(k, j));
    if !has_intermediate {
      covers.push((a.clone(), b.clone()));
    }
  }
  covers
}
