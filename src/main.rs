use clap::{Parser, Subcommand};
use ordrel::basics::{Element, Pair};
use ordrel::classify::Classification;
use ordrel::closure::{covering_reduction, reflexive_transitive_closure};
use ordrel::layout::hasse_layout;
use ordrel::modular;
use ordrel::properties::PropertyReport;
use ordrel::relation::Relation;
use serde::Serialize;

/// Explore finite relations, partial orders and arithmetic over Z_n.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Property report and classification of a relation
  Analyze {
    /// Comma-separated universe, e.g. "1,2,3"
    #[arg(long)]
    elements: String,
    /// Whitespace-separated pairs, e.g. "1>2 2>3"
    #[arg(long)]
    pairs: String,
  },
  /// Reflexive-transitive closure of covering edges
  Closure {
    #[arg(long)]
    elements: String,
    #[arg(long)]
    pairs: String,
  },
  /// Minimal covering pairs of a full order
  Reduce {
    #[arg(long)]
    elements: String,
    #[arg(long)]
    pairs: String,
  },
  /// Hasse-diagram coordinates for covering edges
  Layout {
    #[arg(long)]
    elements: String,
    #[arg(long)]
    pairs: String,
  },
  /// Inverse of A mod N
  Inverse { a: i64, n: i64 },
  /// BASE^EXP mod N
  Power { base: i64, exp: u64, n: i64 },
  /// Solve A*x = B (mod N)
  Congruence { a: i64, b: i64, n: i64 },
  /// Cayley table over Z_N
  Table {
    n: usize,
    /// Multiplication instead of addition
    #[arg(long)]
    mul: bool,
  },
}

fn parse_elements(raw: &str) -> Vec<Element> {
  let mut seen = Vec::new();
  for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
    let element = Element::from(token);
    if !seen.contains(&element) {
      seen.push(element);
    }
  }
  seen
}

fn parse_pairs(raw: &str) -> Vec<Pair> {
  raw
    .split_whitespace()
    .filter_map(|token| {
      let (a, b) = token.split_once('>')?;
      Some((Element::from(a.trim()), Element::from(b.trim())))
    })
    .collect()
}

fn emit(value: &impl Serialize) {
  println!("{}", serde_json::to_string_pretty(value).unwrap());
}

#[derive(Serialize)]
struct AnalyzeOutput {
  properties: PropertyReport,
  classification: Classification,
}

fn main() {
  match Args::parse().command {
    Command::Analyze { elements, pairs } => {
      let relation = Relation::new(parse_elements(&elements), parse_pairs(&pairs));
      eprintln!("elements: {}, pairs kept: {}", relation.universe().len(), relation.len());
      let properties = PropertyReport::analyze(&relation);
      let classification = Classification::from_report(&properties);
      emit(&AnalyzeOutput { properties, classification });
    }
    Command::Closure { elements, pairs } => {
      let cover = Relation::new(parse_elements(&elements), parse_pairs(&pairs));
      let closed = reflexive_transitive_closure(&cover);
      eprintln!("cover edges: {}, closure pairs: {}", cover.len(), closed.len());
      emit(&closed.pairs());
    }
    Command::Reduce { elements, pairs } => {
      let full = Relation::new(parse_elements(&elements), parse_pairs(&pairs));
      let covers = covering_reduction(&full);
      eprintln!("relation pairs: {}, covering pairs: {}", full.len(), covers.len());
      emit(&covers);
    }
    Command::Layout { elements, pairs } => {
      let cover = Relation::new(parse_elements(&elements), parse_pairs(&pairs));
      let layout = hasse_layout(&cover);
      eprintln!("levels: {}", layout.depth + 1);
      emit(&layout);
    }
    Command::Inverse { a, n } => emit(&modular::mod_inverse(a, n)),
    Command::Power { base, exp, n } => emit(&modular::mod_pow(base, exp, n)),
    Command::Congruence { a, b, n } => emit(&modular::solve_linear_congruence(a, b, n)),
    Command::Table { n, mul } => {
      let op = if mul { modular::TableOp::Mul } else { modular::TableOp::Add };
      emit(&modular::build_table(n, op));
    }
  }
}
