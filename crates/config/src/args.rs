use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.statemint)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load the env file into the process environment.
    ///
    /// A missing file is not an error when the default path is used, so the
    /// service can run from plain environment variables.
    pub fn load_env_file(&self) -> Result<(), crate::ConfigError> {
        match dotenv::from_path(&self.env_file) {
            Ok(()) => Ok(()),
            Err(dotenv::Error::Io(_)) if self.env_file == ".env" => Ok(()),
            Err(source) => Err(crate::ConfigError::EnvFileError {
                path: self.env_file.clone(),
                source,
            }),
        }
    }
}
