use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};

/// Aggregated plugin failure. A build keeps going through every sub-plugin
/// before reporting, so one value may carry several underlying errors.
#[derive(Debug)]
pub struct PluginError(pub Vec<anyhow::Error>);

impl Deref for PluginError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for PluginError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for PluginError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for PluginError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl Display for PluginError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

pub type PluginResult<T> = anyhow::Result<T, PluginError>;

#[test]
fn test_plugin_error_display() {
  let error = PluginError(vec![anyhow::anyhow!("upload failed"), anyhow::anyhow!("bad pattern")]);
  assert_eq!(error.to_string(), "upload failed\nbad pattern");
  assert_eq!(error.len(), 2);
}
