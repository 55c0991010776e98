use crate::basics::*;
use crate::relation::Relation;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Outcome of a property check: either it holds, or the first
/// counter-example found. Checks never raise; every failure is a value.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(tag = "holds", content = "witness")]
pub enum Check<W> {
  #[serde(rename = "true")]
  Holds,
  #[serde(rename = "false")]
  Fails(W),
}

impl<W> Check<W> {
  pub fn holds(&self) -> bool {
    matches!(self, Check::Holds)
  }

  pub fn witness(&self) -> Option<&W> {
    match self {
      Check::Holds => None,
      Check::Fails(w) => Some(w),
    }
  }
}

/// The chain (a,b), (b,c) whose composite (a,c) is missing from R.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
pub struct TransitiveGap {
  pub first: Pair,
  pub second: Pair,
  pub missing: Pair,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
pub struct PropertyReport {
  pub reflexive: Check<Element>,
  pub symmetric: Check<Pair>,
  pub antisymmetric: Check<Pair>,
  pub transitive: Check<TransitiveGap>,
}

impl PropertyReport {
  pub fn analyze(relation: &Relation) -> Self {
    Self {
      reflexive: reflexive(relation),
      symmetric: symmetric(relation),
      antisymmetric: antisymmetric(relation),
      transitive: transitive(relation),
    }
  }
}

pub fn reflexive(relation: &Relation) -> Check<Element> {
  for x in relation.universe() {
    if !relation.contains(x, x) {
      return Check::Fails(x.clone());
    }
  }
  Check::Holds
}

pub fn symmetric(relation: &Relation) -> Check<Pair> {
  // (a,a) pairs are their own mirror, so the diagonal never fails here
  for (a, b) in relation.pairs() {
    if !relation.contains(b, a) {
      return Check::Fails((a.clone(), b.clone()));
    }
  }
  Check::Holds
}

pub fn antisymmetric(relation: &Relation) -> Check<Pair> {
  for (a, b) in relation.pairs() {
    if a != b && relation.contains(b, a) {
      return Check::Fails((a.clone(), b.clone()));
    }
  }
  Check::Holds
}

pub fn transitive(relation: &Relation) -> Check<TransitiveGap> {
  // index R by first coordinate so each (a,b) only scans pairs leaving b
  let by_source = relation.pairs().iter().map(|(a, b)| (a, b)).into_group_map();
  for (a, b) in relation.pairs() {
    let Some(continuations) = by_source.get(b) else {
      continue;
    };
    for &c in continuations {
      if !relation.contains(a, c) {
        return Check::Fails(TransitiveGap {
          first: (a.clone(), b.clone()),
          second: (b.clone(), c.clone()),
          missing: (a.clone(), c.clone()),
        });
      }
    }
  }
  Check::Holds
}

#[cfg(test)]
mod tests {
  use super::*;

  fn elems(names: &[&str]) -> Vec<Element> {
    names.iter().map(|&n| n.into()).collect()
  }

  fn diagonal(names: &[&str]) -> Vec<Pair> {
    names.iter().map(|&n| pair(n, n)).collect()
  }

  #[test]
  fn reflexive_witness_is_the_removed_element() {
    let mut pairs = diagonal(&["1", "2", "3"]);
    let full = Relation::new(elems(&["1", "2", "3"]), pairs.clone());
    assert!(reflexive(&full).holds());
    pairs.retain(|p| *p != pair("2", "2"));
    let broken = Relation::new(elems(&["1", "2", "3"]), pairs);
    assert_eq!(reflexive(&broken), Check::Fails("2".into()));
  }

  #[test]
  fn symmetric_witness_verifies_against_relation() {
    let r = Relation::new(
      elems(&["a", "b", "c"]),
      vec![pair("a", "a"), pair("a", "b"), pair("b", "a"), pair("b", "c")],
    );
    let Check::Fails((a, b)) = symmetric(&r) else {
      panic!("expected a symmetry failure");
    };
    assert_eq!((a.clone(), b.clone()), pair("b", "c"));
    assert!(r.contains(&a, &b));
    assert!(!r.contains(&b, &a));
  }

  #[test]
  fn diagonal_pairs_never_break_symmetry() {
    let r = Relation::new(elems(&["a", "b"]), diagonal(&["a", "b"]));
    assert!(symmetric(&r).holds());
  }

  #[test]
  fn antisymmetric_reports_first_mirrored_pair() {
    let r = Relation::new(
      elems(&["1", "2", "3"]),
      vec![pair("1", "1"), pair("1", "2"), pair("2", "1"), pair("2", "3")],
    );
    assert_eq!(antisymmetric(&r), Check::Fails(pair("1", "2")));
    let order = Relation::new(elems(&["1", "2"]), vec![pair("1", "1"), pair("1", "2")]);
    assert!(antisymmetric(&order).holds());
  }

  #[test]
  fn transitive_gap_is_a_real_counter_example() {
    let r = Relation::new(elems(&["1", "2", "3"]), vec![pair("1", "2"), pair("2", "3")]);
    let Check::Fails(gap) = transitive(&r) else {
      panic!("expected a transitivity failure");
    };
    assert_eq!(gap.first, pair("1", "2"));
    assert_eq!(gap.second, pair("2", "3"));
    assert_eq!(gap.missing, pair("1", "3"));
    assert!(r.contains(&gap.first.0, &gap.first.1));
    assert!(r.contains(&gap.second.0, &gap.second.1));
    assert!(!r.contains(&gap.missing.0, &gap.missing.1));
  }

  #[test]
  fn divisibility_on_small_universe_is_an_order() {
    let pairs = vec![
      pair("1", "1"), pair("2", "2"), pair("3", "3"), pair("6", "6"),
      pair("1", "2"), pair("1", "3"), pair("1", "6"), pair("2", "6"), pair("3", "6"),
    ];
    let r = Relation::new(elems(&["1", "2", "3", "6"]), pairs);
    let report = PropertyReport::analyze(&r);
    assert!(report.reflexive.holds());
    assert!(!report.symmetric.holds());
    assert!(report.antisymmetric.holds());
    assert!(report.transitive.holds());
  }
}
