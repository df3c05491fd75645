use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Database backend wired into generated Python backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// No database configuration
    #[default]
    None,
    /// PostgreSQL through SQLAlchemy
    Postgresql,
    /// MongoDB through PyMongo
    Mongodb,
}

impl DatabaseType {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::None => "none",
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Mongodb => "mongodb",
        }
    }

    /// Returns true if a database was selected.
    pub fn is_some(&self) -> bool {
        !matches!(self, DatabaseType::None)
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(DatabaseType::None),
            "postgresql" | "postgres" | "pg" => Ok(DatabaseType::Postgresql),
            "mongodb" | "mongo" => Ok(DatabaseType::Mongodb),
            _ => Err(format!(
                "unknown database '{}', expected 'none', 'postgresql' or 'mongodb'",
                s
            )),
        }
    }
}
