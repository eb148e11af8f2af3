use std::{
    fmt,
    io::{self, Write},
};

use log::debug;

use crate::domain::{
    fixture_rows::{ObjectRow, TokenRow},
    fixture_settings::FixtureSettings,
    id_batch::IdRange,
};

const OBJECTS_TARGET: &str = "objects (id, name, ugrp_id, unit_symbol)";
const TOKENS_TARGET: &str = "tokens (token, object_id, description)";
const ROW_SEPARATOR: &[u8] = b",\n";

/// Renders the `objects`/`tokens` statement pair for an id range.
#[derive(Debug, Clone, Copy)]
pub struct InsertScriptWriter<'a> {
    settings: &'a FixtureSettings,
}

impl<'a> InsertScriptWriter<'a> {
    pub fn new(settings: &'a FixtureSettings) -> Self {
        Self { settings }
    }

    /// Writes the objects statement, a blank line, then the tokens
    /// statement and a trailing newline. Rows are streamed, never buffered
    /// as a whole.
    pub fn write_range<W: Write>(&self, writer: &mut W, range: IdRange) -> io::Result<()> {
        debug!(
            "Rendering ids {}..={} ({} rows)",
            range.start_id,
            range.end_id,
            range.row_count()
        );
        let dialect = self.settings.dialect;
        let quote = dialect.string_quote();

        writeln!(writer, "{} {OBJECTS_TARGET} VALUES", dialect.insert_head())?;
        write_rows(writer, range, |writer, id| {
            let row = ObjectRow::new(id, self.settings);
            write!(
                writer,
                "    ({}, {}, {}, {})",
                row.id,
                Quoted(quote, &row.name),
                row.ugrp_id,
                Quoted(quote, row.unit_symbol)
            )
        })?;
        writer.write_all(dialect.statement_tail().as_bytes())?;

        writer.write_all(b"\n\n")?;

        writeln!(writer, "{} {TOKENS_TARGET} VALUES", dialect.insert_head())?;
        write_rows(writer, range, |writer, id| {
            let row = TokenRow::new(id, self.settings);
            write!(
                writer,
                "    ({}, {}, {})",
                Quoted(quote, &row.token),
                row.object_id,
                Quoted(quote, &row.description)
            )
        })?;
        writer.write_all(dialect.statement_tail().as_bytes())?;

        writer.write_all(b"\n")
    }
}

fn write_rows<W, F>(writer: &mut W, range: IdRange, mut write_row: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, i64) -> io::Result<()>,
{
    for id in range.ids() {
        if id != range.start_id {
            writer.write_all(ROW_SEPARATOR)?;
        }
        write_row(writer, id)?;
    }
    Ok(())
}

/// A string literal in the given quote character, embedded quotes doubled.
struct Quoted<'a>(char, &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Quoted(quote, text) = *self;
        write!(f, "{quote}")?;
        for part in text.split_inclusive(quote) {
            f.write_str(part)?;
            if part.ends_with(quote) {
                write!(f, "{quote}")?;
            }
        }
        write!(f, "{quote}")
    }
}
