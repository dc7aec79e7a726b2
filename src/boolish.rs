use std::{cmp, ops};

use ish_macro::boolish_int_eq;

use super::{Ish, Ishable};

const TRUTHY: &[&str] = &["true", "yes", "yeah", "yep", "yup", "on", "y", "1", "ok", "👍"];
const FALSY: &[&str] = &["false", "no", "nope", "nah", "off", "n", "0", "norway", "👎"];

/// A `bool` that compares equal to anything that reads like it.
#[derive(Debug, Clone, Copy)]
pub struct BoolIsh {
  value: bool,
}

impl Ishable for bool {
  type Output = BoolIsh;
  fn ish(&self) -> Self::Output {
    BoolIsh { value: *self }
  }
}

impl ops::Sub<Ish> for bool {
  type Output = BoolIsh;

  fn sub(self, _rhs: Ish) -> Self::Output {
    BoolIsh { value: self }
  }
}

fn str_fuzzy_eq(value: bool, other: &str) -> bool {
  let other = other.trim().to_lowercase();
  let words = if value { TRUTHY } else { FALSY };
  words.contains(&other.as_str())
}

// Only 1 and 0 are recognised; every other number matches neither.
fn i64_fuzzy_eq(value: bool, other: i64) -> bool {
  let expected = if value { 1 } else { 0 };
  other == expected
}

impl cmp::PartialEq<BoolIsh> for &str {
  fn eq(&self, other: &BoolIsh) -> bool {
    str_fuzzy_eq(other.value, self)
  }
}

impl cmp::PartialEq<BoolIsh> for String {
  fn eq(&self, other: &BoolIsh) -> bool {
    str_fuzzy_eq(other.value, self)
  }
}

impl cmp::PartialEq<BoolIsh> for bool {
  fn eq(&self, other: &BoolIsh) -> bool {
    *self == other.value
  }
}

boolish_int_eq!();

impl<T> cmp::PartialEq<T> for BoolIsh
where
  T: cmp::PartialEq<BoolIsh>,
{
  fn eq(&self, other: &T) -> bool {
    other.eq(self)
  }
}
