use proc_macro::TokenStream;

mod expand;
mod macro_utils;

/// Implements `PartialEq<BoolIsh>` for the listed integer types, or for every
/// type in `ish_gen::INT_TYPES` when called with no arguments.
///
/// `cmp`, `BoolIsh` and `i64_fuzzy_eq` must be in scope at the call site.
#[proc_macro]
pub fn boolish_int_eq(tokens: TokenStream) -> TokenStream {
  macro_utils::boolish_int_eq(tokens)
}
