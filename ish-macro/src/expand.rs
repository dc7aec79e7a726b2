use ish_gen::{Generator, BOOLISH_EQ_TEMPLATE};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, ItemImpl};

pub fn boolish_int_eq(types: &[Ident]) -> syn::Result<TokenStream> {
  let names = types.iter().map(Ident::to_string).collect::<Vec<_>>();
  let generator = if names.is_empty() {
    Generator::boolish_int_eq()
  } else {
    Generator::new(BOOLISH_EQ_TEMPLATE, names.iter().map(String::as_str))
  }
  .map_err(|e| syn::Error::new(Span::call_site(), e))?;

  impls(&generator, types)
}

/// Parses each block as an `impl` item. A block that doesn't parse is
/// reported at the ident it was rendered from.
fn impls(generator: &Generator<'_>, types: &[Ident]) -> syn::Result<TokenStream> {
  // Blocks from the built-in list have no ident to point at.
  let spans = types.iter().map(Ident::span)
    .chain(std::iter::repeat(Span::call_site()));

  let items = generator.generate()
    .zip(spans)
    .map(|(block, span)| {
      syn::parse_str::<ItemImpl>(&block)
        .map_err(|e| syn::Error::new(span, format!("generated impl does not parse: {}", e)))
    })
    .collect::<syn::Result<Vec<_>>>()?;

  Ok(quote! { #(#items)* })
}

#[cfg(test)]
mod test {
  use super::*;

  fn ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
  }

  #[test]
  fn listed_types() {
    let tokens = boolish_int_eq(&[ident("u8"), ident("i64")]).unwrap();
    let file: syn::File = syn::parse2(tokens).unwrap();
    let self_tys = file.items.iter().map(|item| match item {
      syn::Item::Impl(impl_) => {
        let ty = &impl_.self_ty;
        quote!(#ty).to_string()
      }
      _ => panic!("expected an impl"),
    }).collect::<Vec<_>>();
    assert_eq!(self_tys, vec!["u8", "i64"]);
  }

  #[test]
  fn empty_list_uses_every_int_type() {
    let tokens = boolish_int_eq(&[]).unwrap();
    let file: syn::File = syn::parse2(tokens).unwrap();
    assert_eq!(file.items.len(), ish_gen::INT_TYPES.len());
  }

  #[test]
  fn unparsable_block_is_an_error() {
    let generator = Generator::new("impl for {ty} {", ["u8"]).unwrap();
    let err = impls(&generator, &[ident("u8")]).unwrap_err();
    assert!(err.to_string().starts_with("generated impl does not parse"));

    let tokens = err.to_compile_error().to_string();
    assert!(tokens.contains("compile_error"));
  }
}
