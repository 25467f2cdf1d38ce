//! Error codes.

use std::fmt;

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Code {
    #[default]
    Unknown,
    Validation,
    DomainFailure,
    Internal,
    Io,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Unknown => "UNKNOWN",
            Code::Validation => "VALIDATION",
            Code::DomainFailure => "DOMAIN_FAILURE",
            Code::Internal => "INTERNAL",
            Code::Io => "IO",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(Code::DomainFailure.to_string(), "DOMAIN_FAILURE");
        assert_eq!(Code::default(), Code::Unknown);
    }
}
