use crate::error::UpdateError;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "up-version")]
pub struct Arguments {
    /// The new version, e.g. 1.2.3
    #[arg(value_name = "VERSION", allow_hyphen_values = true, num_args = 0..)]
    pub versions: Vec<String>,
}

impl Arguments {
    /// Returns the single requested version, or a usage error when zero or
    /// several were given.
    pub fn version(&self, program: &str) -> Result<&str, UpdateError> {
        match self.versions.as_slice() {
            [version] => Ok(version.as_str()),
            _ => Err(UpdateError::UsageError { program: program.to_string() }),
        }
    }
}
