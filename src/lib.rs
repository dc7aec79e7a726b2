//! Fuzzy equality for things that are only roughly true, false, or equal.
//!
//! Subtract [`ish`] from a `bool` to get a value that compares equal to the
//! many ways people write "yes" and "no". Subtract it from a float to get a
//! number that compares equal to anything close enough.
//!
//! ```
//! use ish::ish;
//!
//! assert!(true-ish == "TRUE");
//! assert!(true-ish == "true");
//! assert!(true-ish == "on");
//! assert!(true-ish == "YEAH");
//! assert!(true-ish == "👍");
//! assert!(true-ish == 1);
//! assert!(true-ish == 1u64);
//! assert!("True" == true-ish);
//! assert!(1i8 == true-ish);
//!
//! assert!(true-ish != 0);
//! assert!(true-ish != "false");
//! assert!(true-ish != "penguins!");
//!
//! assert!(false-ish == "FALSE");
//! assert!(false-ish == "off");
//! assert!(false-ish == "nope");
//! assert!(false-ish == "Norway");
//! assert!(false-ish == "👎");
//! assert!(false-ish == 0);
//!
//! assert!(false-ish != "nopeee");
//! assert!(false-ish != 1);
//! assert!(false-ish != "true");
//! assert!(false-ish != "ferret");
//!
//! assert!(1.0-ish == 1.00000001);
//! assert!(1.0-ish != 1.0000002);
//! assert!(1.0-ish == 0.99999999);
//! assert!(1.0-ish != -1.0);
//! ```
//!
//! Values that are neither recognisably true nor recognisably false compare
//! unequal to both `true-ish` and `false-ish`.

mod boolish;
mod floatish;

pub use self::boolish::BoolIsh;
pub use self::floatish::FloatIsh;

const ISH_FUDGE_DEFAULT: f64 = 0.0000001;

/// A value that has a fuzzy counterpart.
pub trait Ishable {
  type Output;
  fn ish(&self) -> Self::Output;
}

/// Tolerance carried into whatever it is subtracted from. Use [`ish`] for the
/// default, or `Ish::new` for a custom fudge.
#[derive(Debug, Clone, Copy)]
pub struct Ish {
  fudge: f64,
}

impl Ish {
  pub fn new(fudge: f64) -> Self {
    Self { fudge }
  }
}

/// * `true-ish` is a vaguely truthy value.
/// * `false-ish` is a vaguely falsy value.
/// * `1.0-ish` equals any float within 0.0000001 of `1.0`.
#[allow(non_upper_case_globals)]
pub const ish: Ish = Ish {
  fudge: ISH_FUDGE_DEFAULT,
};

#[test]
fn ish_tests() {
  assert_eq!(Ish::new(0.001).fudge, 0.001);
  assert_eq!(ish.fudge, ISH_FUDGE_DEFAULT);
}
