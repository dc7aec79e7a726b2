//! Source generator for the integer comparisons of `BoolIsh`.
//!
//! Each integer type in [`INT_TYPES`] gets one `impl` block, stamped out of
//! [`BOOLISH_EQ_TEMPLATE`]. The `ish-gen` binary prints the blocks and the
//! `boolish_int_eq!` macro splices them into the `ish` crate.

mod error;
mod generator;
mod template;

pub use error::TemplateError;
pub use generator::Generator;
pub use template::{Template, PLACEHOLDER};

pub const INT_TYPES: &[&str] = &[
  "i8", "i16", "i32", "i64", "isize",
  "u8", "u16", "u32", "u64", "usize",
];

pub const BOOLISH_EQ_TEMPLATE: &str = "\
impl cmp::PartialEq<BoolIsh> for {ty} {
    fn eq(&self, other: &BoolIsh) -> bool {
        i64_fuzzy_eq(other.value, *self as i64)
    }
}";
