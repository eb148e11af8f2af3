use crate::domain::{
    fixture_error::FixtureError,
    id_batch::{IdRange, decimal_width},
    sql_dialect::SqlDialectKind,
};

pub const DEFAULT_START_ID: i64 = 1;
pub const DEFAULT_END_ID: i64 = 2;
pub const DEFAULT_OWNER: i64 = 1;
pub const DEFAULT_UNIT: &str = "V";
pub const DEFAULT_TOKEN_PREFIX: &str = "01234567890123456789";
pub const DEFAULT_TOKEN_PAD: char = 'a';
pub const DEFAULT_DESCRIPTION: &str = "test";

/// Width of the `tokens.token` column.
pub const TOKEN_WIDTH: usize = 32;

/// Fixed column values shared by every generated row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSettings {
    pub owner: i64,
    pub unit: String,
    pub token_prefix: String,
    pub token_pad: char,
    pub description_prefix: String,
    pub dialect: SqlDialectKind,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER,
            unit: DEFAULT_UNIT.to_string(),
            token_prefix: DEFAULT_TOKEN_PREFIX.to_string(),
            token_pad: DEFAULT_TOKEN_PAD,
            description_prefix: DEFAULT_DESCRIPTION.to_string(),
            dialect: SqlDialectKind::default(),
        }
    }
}

impl FixtureSettings {
    /// Checks that every id of `range` yields a token that fits
    /// [`TOKEN_WIDTH`] and that the text columns are usable.
    pub fn validate(&self, range: &IdRange) -> Result<(), FixtureError> {
        if self.unit.trim().is_empty() {
            return Err(FixtureError::EmptyUnit);
        }
        if self.description_prefix.trim().is_empty() {
            return Err(FixtureError::EmptyDescription);
        }

        let widest_id = range.widest_id();
        let required = self.token_prefix.chars().count() + decimal_width(widest_id);
        if required > TOKEN_WIDTH {
            return Err(FixtureError::TokenOverflow {
                id: widest_id,
                required,
                width: TOKEN_WIDTH,
            });
        }
        Ok(())
    }
}
