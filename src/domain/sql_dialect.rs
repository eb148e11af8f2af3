use std::str::FromStr;

use anyhow::{Result, anyhow};

/// Target database flavour. Decides how duplicate rows are tolerated and
/// which character delimits string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlDialectKind {
    #[default]
    MySql,
    Sqlite,
    PostgreSql,
}

impl SqlDialectKind {
    pub const ALL: [SqlDialectKind; 3] = [
        SqlDialectKind::MySql,
        SqlDialectKind::Sqlite,
        SqlDialectKind::PostgreSql,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SqlDialectKind::MySql => "mysql",
            SqlDialectKind::Sqlite => "sqlite",
            SqlDialectKind::PostgreSql => "postgres",
        }
    }

    pub fn insert_head(self) -> &'static str {
        match self {
            SqlDialectKind::MySql => "INSERT IGNORE INTO",
            SqlDialectKind::Sqlite => "INSERT OR IGNORE INTO",
            SqlDialectKind::PostgreSql => "INSERT INTO",
        }
    }

    pub fn statement_tail(self) -> &'static str {
        match self {
            SqlDialectKind::MySql | SqlDialectKind::Sqlite => ";",
            SqlDialectKind::PostgreSql => "\nON CONFLICT DO NOTHING;",
        }
    }

    pub fn string_quote(self) -> char {
        match self {
            SqlDialectKind::MySql => '"',
            SqlDialectKind::Sqlite | SqlDialectKind::PostgreSql => '\'',
        }
    }
}

impl std::fmt::Display for SqlDialectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqlDialectKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(SqlDialectKind::MySql),
            "sqlite" => Ok(SqlDialectKind::Sqlite),
            "postgres" | "postgresql" => Ok(SqlDialectKind::PostgreSql),
            _ => Err(anyhow!(
                "Unsupported dialect: {value}. Available values: mysql,sqlite,postgres"
            )),
        }
    }
}
