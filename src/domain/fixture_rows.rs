use std::iter;

use crate::domain::fixture_settings::{FixtureSettings, TOKEN_WIDTH};

/// A row of the `objects` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRow<'a> {
    pub id: i64,
    pub name: String,
    pub ugrp_id: i64,
    pub unit_symbol: &'a str,
}

impl<'a> ObjectRow<'a> {
    pub fn new(id: i64, settings: &'a FixtureSettings) -> Self {
        Self {
            id,
            name: format!("{} object {id}", settings.description_prefix),
            ugrp_id: settings.owner,
            unit_symbol: &settings.unit,
        }
    }
}

/// A row of the `tokens` table, owned by the object with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub token: String,
    pub object_id: i64,
    pub description: String,
}

impl TokenRow {
    pub fn new(id: i64, settings: &FixtureSettings) -> Self {
        Self {
            token: build_token(&settings.token_prefix, settings.token_pad, id),
            object_id: id,
            description: format!("{} token {id}", settings.description_prefix),
        }
    }
}

/// `prefix`, then `pad` repeated up to [`TOKEN_WIDTH`], then the decimal id.
///
/// When prefix and id already reach the width the padding run is empty and
/// the token is left as is; callers reject that case up front through
/// `FixtureSettings::validate`.
pub fn build_token(prefix: &str, pad: char, id: i64) -> String {
    let id_text = id.to_string();
    let pad_length = TOKEN_WIDTH.saturating_sub(prefix.chars().count() + id_text.len());

    let mut token = String::with_capacity(TOKEN_WIDTH);
    token.push_str(prefix);
    token.extend(iter::repeat_n(pad, pad_length));
    token.push_str(&id_text);
    token
}
