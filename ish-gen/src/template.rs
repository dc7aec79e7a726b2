use crate::error::TemplateError;

/// Marks where a type token goes in a template.
pub const PLACEHOLDER: &str = "{ty}";

/// A template with a single substitution point, kept as the text on either
/// side of the placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template<'a> {
  head: &'a str,
  tail: &'a str,
}

impl<'a> Template<'a> {
  pub fn parse(src: &'a str) -> Result<Self, TemplateError> {
    let count = src.matches(PLACEHOLDER).count();
    match count {
      0 => Err(TemplateError::MissingPlaceholder),
      1 => {
        let (head, tail) = src
          .split_once(PLACEHOLDER)
          .ok_or(TemplateError::MissingPlaceholder)?;
        Ok(Template { head, tail })
      }
      _ => Err(TemplateError::ExtraPlaceholder { count }),
    }
  }

  pub fn render(&self, ty: &str) -> String {
    let mut block = String::with_capacity(self.head.len() + ty.len() + self.tail.len());
    block.push_str(self.head);
    block.push_str(ty);
    block.push_str(self.tail);
    block
  }
}

#[test]
fn template_tests() {
  let t = Template::parse("impl X for {ty} { ... }").unwrap();
  assert_eq!(t.render("i8"), "impl X for i8 { ... }");

  // Braces that aren't the placeholder pass through untouched.
  let t = Template::parse("fn f() -> {ty} { {} {t} }").unwrap();
  assert_eq!(t.render("u8"), "fn f() -> u8 { {} {t} }");

  assert_eq!(
    Template::parse("{ty} {{ty}}"),
    Err(TemplateError::ExtraPlaceholder { count: 2 }));

  let t = Template::parse("{ty}").unwrap();
  assert_eq!(t.render(""), "");

  assert_eq!(Template::parse("impl X for T {}"), Err(TemplateError::MissingPlaceholder));
}
