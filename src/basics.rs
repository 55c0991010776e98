use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Hash, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[serde(transparent)]
pub struct Element(pub String);

impl std::fmt::Display for Element {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<&str> for Element {
  fn from(s: &str) -> Self {
    Element(s.to_string())
  }
}

impl From<String> for Element {
  fn from(s: String) -> Self {
    Element(s)
  }
}

pub type Pair = (Element, Element);

pub fn pair(a: impl Into<Element>, b: impl Into<Element>) -> Pair {
  (a.into(), b.into())
}

// stable index order for matrices and tables
pub fn sorted_universe(elements: &[Element]) -> Vec<Element> {
  let mut sorted = elements.to_vec();
  sorted.sort();
  sorted
}
