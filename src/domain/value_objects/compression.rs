//! Archive compression setting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the archived entry is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// DEFLATE, the usual zip default
    #[default]
    Deflated,
    /// No compression
    Stored,
}

impl Compression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::Deflated => "deflated",
            Compression::Stored => "stored",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deflated" | "deflate" => Ok(Compression::Deflated),
            "stored" | "store" | "none" => Ok(Compression::Stored),
            other => Err(format!(
                "unknown compression '{}' (expected 'deflated' or 'stored')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("Deflate".parse::<Compression>(), Ok(Compression::Deflated));
        assert_eq!(" none ".parse::<Compression>(), Ok(Compression::Stored));
    }

    #[test]
    fn rejects_unknown() {
        let err = "bzip2".parse::<Compression>().unwrap_err();
        assert!(err.contains("bzip2"));
    }

    #[test]
    fn default_is_deflated() {
        assert_eq!(Compression::default(), Compression::Deflated);
    }
}
