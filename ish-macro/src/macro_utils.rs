use proc_macro::TokenStream;
use syn::{parse_macro_input, Ident, Token};
use syn::parse::{Result, Parse, ParseStream};
use quote::quote;

use crate::expand;

pub struct TypeList(pub Vec<Ident>);

impl Parse for TypeList {
  fn parse(input: ParseStream) -> Result<Self> {
    let mut types = Vec::new();
    while !input.cursor().eof() {
      types.push(input.parse::<Ident>()?);
      if input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
      }
    }
    Ok(TypeList(types))
  }
}

pub fn boolish_int_eq(tokens: TokenStream) -> TokenStream {
  let types = parse_macro_input!(tokens as TypeList).0;
  let impls = expand::boolish_int_eq(&types)
    .unwrap_or_else(|e| e.to_compile_error());
  TokenStream::from(quote!{
    #impls
  })
}
