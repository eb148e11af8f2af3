pub mod fixture_error;
pub mod fixture_rows;
pub mod fixture_settings;
pub mod id_batch;
pub mod sql_dialect;
