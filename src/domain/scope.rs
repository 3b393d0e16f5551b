//! Maven dependency scopes

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Build scope of a Maven dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyScope {
    /// Default scope, available everywhere
    Compile,
    /// Supplied by the runtime container
    Provided,
    /// Needed at runtime only
    Runtime,
    /// Test classpath only
    Test,
    /// Provided by an explicit system path
    System,
    /// BOM import inside dependency management
    Import,
}

impl DependencyScope {
    /// Returns the scope as written in a POM
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyScope::Compile => "compile",
            DependencyScope::Provided => "provided",
            DependencyScope::Runtime => "runtime",
            DependencyScope::Test => "test",
            DependencyScope::System => "system",
            DependencyScope::Import => "import",
        }
    }

    /// Returns all scopes
    pub fn all() -> &'static [DependencyScope] {
        &[
            DependencyScope::Compile,
            DependencyScope::Provided,
            DependencyScope::Runtime,
            DependencyScope::Test,
            DependencyScope::System,
            DependencyScope::Import,
        ]
    }
}

impl FromStr for DependencyScope {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|scope| scope.as_str() == normalized)
            .copied()
            .ok_or_else(|| ParseError::unknown_scope(normalized))
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
