use crate::properties::PropertyReport;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Debug)]
pub struct Classification {
  pub partial_order: bool,
  pub equivalence: bool,
}

impl Classification {
  pub fn from_report(report: &PropertyReport) -> Self {
    let reflexive = report.reflexive.holds();
    let transitive = report.transitive.holds();
    Self {
      partial_order: reflexive && report.antisymmetric.holds() && transitive,
      equivalence: reflexive && report.symmetric.holds() && transitive,
    }
  }
}
