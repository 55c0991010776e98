use crate::basics::Element;
use crate::relation::Relation;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NodePlacement {
  pub element: Element,
  pub level: usize,
  pub x: f64,
  pub y: f64,
}

/// Planar coordinates for drawing a Hasse diagram. Coordinates are
/// unitless in (0, 1); y = 1 is the bottom row (level 0), matching the
/// conventional orientation. Purely presentational, no semantic weight.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Layout {
  pub nodes: Vec<NodePlacement>,
  pub depth: usize,
}

impl Layout {
  pub fn level_of(&self, e: &Element) -> Option<usize> {
    self.nodes.iter().find(|n| n.element == *e).map(|n| n.level)
  }
}

/// Longest-path leveling of the covering edges: every node lands strictly
/// above all of its direct predecessors, so no Hasse edge points downward
/// or sideways. A cover with no zero-in-degree element (a cycle) gets the
/// first universe element forced to level 0 so the relaxation terminates;
/// that drawing is a degenerate fallback, not a correct order layout.
pub fn hasse_layout(cover: &Relation) -> Layout {
  let universe = cover.universe();
  let n = universe.len();
  let mut adjacency = vec![Vec::new(); n];
  let mut indegree = vec![0usize; n];
  for (a, b) in cover.pairs() {
    let (i, j) = (cover.index_of(a).unwrap(), cover.index_of(b).unwrap());
    adjacency[i].push(j);
    indegree[j] += 1;
  }

  let mut levels = vec![0usize; n];
  let mut worklist: VecDeque<usize> =
    (0..n).filter(|&i| indegree[i] == 0).collect();
  if worklist.is_empty() && n > 0 {
    worklist.push_back(0);
  }
  while let Some(a) = worklist.pop_front() {
    for &b in &adjacency[a] {
      let raised = levels[a] + 1;
      // cap at n so the cyclic fallback cannot relax forever
      if raised > levels[b] && raised < n.max(1) {
        levels[b] = raised;
        worklist.push_back(b);
      }
    }
  }

  let depth = levels.iter().copied().max().unwrap_or(0);
  let rows = (0..n).map(|i| (levels[i], i)).into_group_map();
  let mut nodes = vec![None; n];
  for (&level, row) in rows.iter() {
    let y = if depth == 0 { 0.5 } else { 1.0 - level as f64 / depth as f64 };
    for (slot, &i) in row.iter().enumerate() {
      nodes[i] = Some(NodePlacement {
        element: universe[i].clone(),
        level,
        x: (slot + 1) as f64 / (row.len() + 1) as f64,
        y,
      });
    }
  }
  Layout { nodes: nodes.into_iter().flatten().collect(), depth }
}
