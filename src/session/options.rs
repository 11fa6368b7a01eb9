use std::fmt;

/// Largest number of black pieces a session accepts by default.
pub const DEFAULT_MAX_BLACK: usize = 16;

/// Error for unusable command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// Flag not recognised
    Unknown { name: String },
    /// Flag needs a value and none was given
    MissingValue { name: String },
    /// Value could not be parsed or is out of range
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::Unknown { name } => write!(f, "Unknown option '{name}'"),
            OptionError::MissingValue { name } => write!(f, "Option '{name}' needs a value"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// Placement limits and display settings for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_black_pieces: usize,
    pub min_black_pieces: usize,
    /// Mark the white piece's reachable squares in the final board
    pub show_reachable: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_black_pieces: DEFAULT_MAX_BLACK,
            min_black_pieces: 1,
            show_reachable: true,
        }
    }
}

impl SessionConfig {
    /// Build a config from command-line flags, starting from the defaults.
    ///
    /// Accepts `--max-black N`, `--min-black N` and `--no-highlight`.
    pub fn from_args<I>(args: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = SessionConfig::default();
        let mut args = args.into_iter();
        while let Some(name) = args.next() {
            match name.as_str() {
                "--no-highlight" => config.show_reachable = false,
                "--max-black" | "--min-black" => {
                    let value = args
                        .next()
                        .ok_or_else(|| OptionError::MissingValue { name: name.clone() })?;
                    let n = value.parse::<usize>().map_err(|_| OptionError::InvalidValue {
                        name: name.clone(),
                        value: value.clone(),
                    })?;
                    if name == "--max-black" {
                        config.max_black_pieces = n;
                    } else {
                        config.min_black_pieces = n;
                    }
                }
                _ => return Err(OptionError::Unknown { name }),
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// At least one black piece is always required, and the minimum
    /// cannot exceed the maximum or the 63 squares left after the white piece.
    fn validate(&self) -> Result<(), OptionError> {
        if self.max_black_pieces == 0 || self.max_black_pieces > 63 {
            return Err(OptionError::InvalidValue {
                name: "--max-black".to_string(),
                value: self.max_black_pieces.to_string(),
            });
        }
        if self.min_black_pieces == 0 || self.min_black_pieces > self.max_black_pieces {
            return Err(OptionError::InvalidValue {
                name: "--min-black".to_string(),
                value: self.min_black_pieces.to_string(),
            });
        }
        Ok(())
    }
}
