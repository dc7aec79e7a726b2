#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
  #[error("template has no `{{ty}}` placeholder")]
  MissingPlaceholder,

  #[error("template has {count} `{{ty}}` placeholders, expected exactly one")]
  ExtraPlaceholder { count: usize },
}
