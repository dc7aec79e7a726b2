use std::{cmp, fmt, ops};

use crate::{Ish, Ishable, ISH_FUDGE_DEFAULT};

/// A float that equals anything within `fudge` of it.
#[derive(Clone, Copy)]
pub struct FloatIsh {
  value: f64,
  fudge: f64,
}

impl fmt::Debug for FloatIsh {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ±{}", self.value, self.fudge)
  }
}

impl Ishable for f64 {
  type Output = FloatIsh;
  fn ish(&self) -> Self::Output {
    FloatIsh { value: *self, fudge: ISH_FUDGE_DEFAULT }
  }
}

impl Ishable for f32 {
  type Output = FloatIsh;
  fn ish(&self) -> Self::Output {
    FloatIsh { value: *self as f64, fudge: ISH_FUDGE_DEFAULT }
  }
}

impl ops::Sub<Ish> for f64 {
  type Output = FloatIsh;

  fn sub(self, rhs: Ish) -> Self::Output {
    FloatIsh { value: self, fudge: rhs.fudge }
  }
}

impl ops::Sub<Ish> for f32 {
  type Output = FloatIsh;

  fn sub(self, rhs: Ish) -> Self::Output {
    FloatIsh { value: self as f64, fudge: rhs.fudge }
  }
}

impl cmp::PartialEq<FloatIsh> for f64 {
  fn eq(&self, other: &FloatIsh) -> bool {
    (other.value - self).abs() <= other.fudge
  }
}

impl cmp::PartialEq<FloatIsh> for f32 {
  fn eq(&self, other: &FloatIsh) -> bool {
    (*self as f64).eq(other)
  }
}

impl<T> cmp::PartialEq<T> for FloatIsh
where
  T: cmp::PartialEq<FloatIsh>,
{
  fn eq(&self, other: &T) -> bool {
    other.eq(self)
  }
}

#[cfg(test)]
mod test {
  use super::{Ish, Ishable};
  use crate::ish;

  #[test]
  fn test_f64() {
    assert_eq!(0.0 - ish, 0.0);
    assert_eq!(0.0 - ish, -0.000000000001);
    assert_eq!(0.0 - ish, 0.000000000001);
    assert_eq!(1.0 - ish, 1.0 + 0.000000000001);
    assert_eq!(1.0 - ish, 1.0 - 0.000000000001);

    assert_eq!(1.0 - 0.000000000001, 1.0 - ish);
    assert_eq!(-1.0 - ish, -1.0 - 0.000000000001);
    assert_eq!(-1.0 - ish, -1.0 + 0.000000000001);

    assert!(-1.0 - ish != -1.00001);
  }

  #[test]
  fn test_f32() {
    assert_eq!(0.0f32 - ish, -0.000000000001);
    assert_eq!(1.0f32 - ish, 1.0 + 0.000000000001);
    assert_eq!(-1.0f32 - ish, -1.0 - 0.000000000001);
    assert_eq!(0.5f32 - ish, 0.5f32);
    assert!(1.0f32 == 1.0f64 - ish);
    assert!(1.5f32 != 1.0f64 - ish);

    assert!(-1.0f32 - ish != -1.00001);
  }

  #[test]
  fn test_ish_method() {
    assert_eq!((0.0f64).ish(), -0.000000000001);
    assert_eq!((1.0f64).ish(), 1.0 + 0.000000000001);
    assert_eq!((-1.0f64).ish(), -1.0 - 0.000000000001);
    assert_eq!((0.25f32).ish(), 0.25);

    assert!((-1.0f64).ish() != -1.00001);
    assert!((-1.0f64).ish() != -2.0);
  }

  #[test]
  fn test_custom_fudge() {
    assert_eq!(-1.0 - Ish::new(0.001), -1.00001);
    assert!(-1.0 - Ish::new(0.001) != -1.1);
    assert!(-1.0 - Ish::new(-0.001) != -1.1);
  }

  #[test]
  fn test_floatish_debug() {
    assert_eq!(format!("{:?}", 3.1 - Ish::new(0.0001)), "3.1 ±0.0001");
  }
}
