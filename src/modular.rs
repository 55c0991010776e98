use num_integer::Integer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// a mod n mapped into [0, |n|); always non-negative, unlike `%`.
/// Modulus 0 leaves a untouched (the usual x mod 0 = x convention).
pub fn normalize(a: i64, n: i64) -> i64 {
  if n == 0 {
    return a;
  }
  a.rem_euclid(n.abs())
}

#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Debug)]
pub struct ExtGcd {
  pub g: i64,
  pub x: i64,
  pub y: i64,
}

/// Iterative extended Euclid: g = gcd(a, b) = a*x + b*y, g >= 0.
pub fn ext_gcd(a: i64, b: i64) -> ExtGcd {
  let (mut old_r, mut r) = (a.abs(), b.abs());
  let (mut old_x, mut x) = (1i64, 0i64);
  let (mut old_y, mut y) = (0i64, 1i64);
  while r != 0 {
    let q = old_r / r;
    (old_r, r) = (r, old_r - q * r);
    (old_x, x) = (x, old_x - q * x);
    (old_y, y) = (y, old_y - q * y);
  }
  // coefficients were computed against |a|, |b|
  ExtGcd { g: old_r, x: old_x * a.signum(), y: old_y * b.signum() }
}

/// The inverse of a mod n in [0, n), or None when gcd(a, n) != 1.
pub fn mod_inverse(a: i64, n: i64) -> Option<i64> {
  let ExtGcd { g, x, .. } = ext_gcd(a, n);
  (g == 1).then(|| normalize(x, n))
}

/// Square-and-multiply with every intermediate reduced mod n.
/// exp = 0 yields 1 mod n, so 0 when n = 1.
pub fn mod_pow(base: i64, exp: u64, n: i64) -> i64 {
  let n = n.abs();
  if n == 0 {
    return 0;
  }
  let mut result = normalize(1, n);
  let mut base = normalize(base, n) as i128;
  let mut exp = exp;
  while exp > 0 {
    if exp & 1 == 1 {
      result = ((result as i128 * base) % n as i128) as i64;
    }
    base = base * base % n as i128;
    exp >>= 1;
  }
  result
}

/// One solution class of a*x = b (mod n): the full set is
/// { base + k*modulus : k in Z }.
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Debug)]
pub struct Congruence {
  pub base: i64,
  pub modulus: i64,
}

pub fn solve_linear_congruence(a: i64, b: i64, n: i64) -> Option<Congruence> {
  if n == 0 {
    return None;
  }
  let g = a.abs().gcd(&n.abs());
  if b % g != 0 {
    return None;
  }
  let (a1, b1, n1) = (a / g, b / g, n.abs() / g);
  if n1 == 1 {
    // everything is congruent mod 1
    return Some(Congruence { base: 0, modulus: 1 });
  }
  let inverse = mod_inverse(a1, n1)?;
  let base = (inverse as i128 * normalize(b1, n1) as i128 % n1 as i128) as i64;
  Some(Congruence { base, modulus: n1 })
}

#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Debug)]
pub enum TableOp {
  Add,
  Mul,
}

/// n x n Cayley table of addition or multiplication over Z_n,
/// entry (i, j) = (i op j) mod n. Rows are independent, so rayon.
pub fn build_table(n: usize, op: TableOp) -> Vec<Vec<i64>> {
  let modulus = n as i64;
  (0..modulus)
    .into_par_iter()
    .map(|i| {
      (0..modulus)
        .map(|j| match op {
          TableOp::Add => normalize(i + j, modulus),
          TableOp::Mul => normalize(i * j, modulus),
        })
        .collect()
    })
    .collect()
}
