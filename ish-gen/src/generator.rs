use std::io::{self, Write};

use itertools::Itertools;
use log::{debug, warn};

use crate::error::TemplateError;
use crate::template::Template;
use crate::{BOOLISH_EQ_TEMPLATE, INT_TYPES};

/// Stamps one block out of a template for every type token, in the order the
/// tokens were given.
#[derive(Clone, Debug)]
pub struct Generator<'a> {
  template: Template<'a>,
  types: Vec<&'a str>,
}

impl<'a> Generator<'a> {
  pub fn new<I>(template: &'a str, types: I) -> Result<Self, TemplateError>
  where
    I: IntoIterator<Item = &'a str>,
  {
    let template = Template::parse(template)?;
    let types = types.into_iter().collect::<Vec<_>>();

    for ty in types.iter().duplicates() {
      warn!("type `{}` is listed more than once, its block will be repeated", ty);
    }

    Ok(Generator { template, types })
  }

  pub fn types(&self) -> &[&'a str] {
    &self.types
  }

  /// Lazily yields one block per type. Each call starts over from the first
  /// type.
  pub fn generate(&self) -> impl Iterator<Item = String> + '_ {
    self.types.iter().map(move |ty| {
      debug!("rendering block for `{}`", ty);
      self.template.render(ty)
    })
  }

  /// Writes every block followed by a blank line.
  pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
    for block in self.generate() {
      out.write_all(block.as_bytes())?;
      out.write_all(b"\n\n")?;
    }
    out.flush()
  }

  pub fn render(&self) -> String {
    self.generate()
      .map(|mut block| {
        block.push_str("\n\n");
        block
      })
      .collect()
  }
}

impl Generator<'static> {
  /// `PartialEq<BoolIsh>` for every integer type in [`INT_TYPES`].
  pub fn boolish_int_eq() -> Result<Self, TemplateError> {
    Generator::new(BOOLISH_EQ_TEMPLATE, INT_TYPES.iter().copied())
  }
}
