use crate::basics::*;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// A finite relation over an explicitly enumerated universe.
///
/// Pairs whose endpoints fall outside the universe are dropped at
/// construction; membership queries for them simply report absent.
/// Duplicate pairs collapse, first insertion wins the display slot.
pub struct Relation {
  universe: Vec<Element>,
  index: HashMap<Element, usize>,
  pairs: Vec<Pair>,
  members: HashSet<(usize, usize)>,
}

impl Relation {
  pub fn new(universe: Vec<Element>, pairs: impl IntoIterator<Item = Pair>) -> Self {
    let index: HashMap<Element, usize> =
      universe.iter().enumerate().map(|(i, e)| (e.clone(), i)).collect();
    let mut kept = Vec::new();
    let mut members = HashSet::new();
    for (a, b) in pairs {
      let (Some(&i), Some(&j)) = (index.get(&a), index.get(&b)) else {
        continue;
      };
      if members.insert((i, j)) {
        kept.push((a, b));
      }
    }
    Self { universe, index, pairs: kept, members }
  }

  pub fn universe(&self) -> &[Element] {
    &self.universe
  }

  pub fn pairs(&self) -> &[Pair] {
    &self.pairs
  }

  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }

  pub fn index_of(&self, e: &Element) -> Option<usize> {
    self.index.get(e).copied()
  }

  pub fn contains_idx(&self, i: usize, j: usize) -> bool {
    self.members.contains(&(i, j))
  }

  pub fn contains(&self, a: &Element, b: &Element) -> bool {
    match (self.index.get(a), self.index.get(b)) {
      (Some(&i), Some(&j)) => self.members.contains(&(i, j)),
      _ => false,
    }
  }

  /// Row-major 0/1 matrix indexed by universe order. Doubles as the
  /// adjacency matrix when the relation holds covering edges.
  pub fn matrix(&self) -> Vec<Vec<u8>> {
    (0..self.universe.len())
      .into_par_iter()
      .map(|i| {
        (0..self.universe.len()).map(|j| self.members.contains(&(i, j)) as u8).collect()
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn elems(names: &[&str]) -> Vec<Element> {
    names.iter().map(|&n| n.into()).collect()
  }

  #[test]
  fn drops_pairs_outside_universe() {
    let r = Relation::new(elems(&["a", "b"]), vec![pair("a", "b"), pair("a", "z"), pair("z", "b")]);
    assert_eq!(r.pairs(), &[pair("a", "b")]);
    assert!(!r.contains(&"a".into(), &"z".into()));
  }

  #[test]
  fn collapses_duplicates_keeping_first() {
    let r = Relation::new(elems(&["a", "b"]), vec![pair("a", "b"), pair("b", "a"), pair("a", "b")]);
    assert_eq!(r.len(), 2);
    assert_eq!(r.pairs(), &[pair("a", "b"), pair("b", "a")]);
  }

  #[test]
  fn membership_matches_pair_list() {
    let r = Relation::new(elems(&["1", "2", "3"]), vec![pair("1", "2"), pair("2", "3")]);
    assert!(r.contains(&"1".into(), &"2".into()));
    assert!(!r.contains(&"2".into(), &"1".into()));
    assert!(!r.contains(&"3".into(), &"3".into()));
  }

  #[test]
  fn matrix_rows_follow_universe_order() {
    let r = Relation::new(elems(&["1", "2", "3"]), vec![pair("1", "2"), pair("2", "3"), pair("3", "3")]);
    assert_eq!(r.matrix(), vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 1]]);
  }
}
