use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::{Context, Result};
use log::info;

use crate::{
    application::commands::{GenerateTestInsertsCommand, GenerateTestInsertsResult, OutputTarget},
    domain::{
        fixture_settings::FixtureSettings,
        id_batch::{IdBatchSlicer, IdRange},
    },
    infrastructure::insert_script::InsertScriptWriter,
};

/// Writes one objects/tokens statement pair covering `[start_id, end_id]`.
///
/// The range and settings are validated first, so an empty range or an id
/// too wide for the token column fails before anything reaches `writer`.
pub fn generate_inserts<W: Write>(
    writer: &mut W,
    start_id: i64,
    end_id: i64,
    settings: &FixtureSettings,
) -> Result<()> {
    let id_range = IdRange::new(start_id, end_id)?;
    settings.validate(&id_range)?;
    InsertScriptWriter::new(settings).write_range(writer, id_range)?;
    Ok(())
}

#[derive(Debug, Default)]
pub struct GenerateTestInsertsUseCase;

impl GenerateTestInsertsUseCase {
    pub fn execute(
        &self,
        command: GenerateTestInsertsCommand,
    ) -> Result<GenerateTestInsertsResult> {
        let id_range = IdRange::new(command.start_id, command.end_id)?;
        command.settings.validate(&id_range)?;
        let id_batch_slicer = IdBatchSlicer::new(id_range, command.batch_size)?;

        info!(
            "Generating {} rows for ids {}..={} ({} dialect) into {}",
            id_range.row_count(),
            id_range.start_id,
            id_range.end_id,
            command.settings.dialect,
            command.output
        );

        let statement_count = match &command.output {
            OutputTarget::Stdout => {
                let mut output_writer = BufWriter::new(io::stdout().lock());
                self.write_script(&mut output_writer, &id_batch_slicer, &command.settings)?
            }
            OutputTarget::File(path) => {
                let output_file = File::create(path)
                    .with_context(|| format!("Unable to create file: {}", path.display()))?;
                let mut output_writer = BufWriter::new(output_file);
                self.write_script(&mut output_writer, &id_batch_slicer, &command.settings)
                    .with_context(|| format!("Unable to write file: {}", path.display()))?
            }
        };

        Ok(GenerateTestInsertsResult {
            output: command.output,
            row_count: id_range.row_count(),
            statement_count,
        })
    }

    /// Renders every slice, separated by a blank line, and flushes. Returns
    /// the number of statements written.
    fn write_script<W: Write>(
        &self,
        output_writer: &mut W,
        id_batch_slicer: &IdBatchSlicer,
        settings: &FixtureSettings,
    ) -> Result<usize> {
        let mut generated_statement_count = 0usize;
        for (index, id_range) in id_batch_slicer.iter_ranges().enumerate() {
            if index > 0 {
                output_writer.write_all(b"\n")?;
            }
            generate_inserts(output_writer, id_range.start_id, id_range.end_id, settings)?;
            generated_statement_count += 2;
        }
        output_writer.flush()?;

        Ok(generated_statement_count)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{GenerateTestInsertsUseCase, generate_inserts};
    use crate::{
        application::commands::{GenerateTestInsertsCommand, OutputTarget},
        domain::{
            fixture_error::FixtureError,
            fixture_settings::FixtureSettings,
            id_batch::{IdBatchSlicer, IdRange},
        },
    };

    fn command(
        start_id: i64,
        end_id: i64,
        batch_size: Option<usize>,
    ) -> GenerateTestInsertsCommand {
        GenerateTestInsertsCommand {
            start_id,
            end_id,
            batch_size,
            output: OutputTarget::Stdout,
            settings: FixtureSettings::default(),
        }
    }

    fn render_script(start_id: i64, end_id: i64, batch_size: Option<usize>) -> (String, usize) {
        let range = IdRange::new(start_id, end_id).expect("range should be valid");
        let slicer = IdBatchSlicer::new(range, batch_size).expect("slicer should be created");
        let mut buffer = Vec::new();
        let statement_count = GenerateTestInsertsUseCase
            .write_script(&mut buffer, &slicer, &FixtureSettings::default())
            .expect("script should render");
        (
            String::from_utf8(buffer).expect("script should be utf8"),
            statement_count,
        )
    }

    #[test]
    fn generate_inserts_rejects_reversed_range_without_writing() {
        let mut buffer = Vec::new();
        let error = generate_inserts(&mut buffer, 5, 4, &FixtureSettings::default())
            .expect_err("reversed range must be rejected");

        assert_eq!(
            error.downcast_ref::<FixtureError>(),
            Some(&FixtureError::InvalidRange { start: 5, end: 4 })
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn generate_inserts_rejects_token_overflow_without_writing() {
        let mut buffer = Vec::new();
        let settings = FixtureSettings::default();
        let error = generate_inserts(&mut buffer, 1, 10_000_000_000_000, &settings)
            .expect_err("fourteen digit id must overflow");

        assert!(error.to_string().contains("needs 34 characters"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn unbatched_script_matches_single_statement_pair() {
        let mut expected = Vec::new();
        generate_inserts(&mut expected, 1, 30, &FixtureSettings::default())
            .expect("inserts should render");

        let (script, statement_count) = render_script(1, 30, None);
        assert_eq!(script.as_bytes(), expected.as_slice());
        assert_eq!(statement_count, 2);
    }

    #[test]
    fn batched_script_splits_into_statement_pairs() {
        let (script, statement_count) = render_script(1, 5, Some(2));

        assert_eq!(statement_count, 6);
        assert_eq!(script.matches("INSERT IGNORE INTO objects").count(), 3);
        assert_eq!(script.matches("INSERT IGNORE INTO tokens").count(), 3);
        assert!(script.contains("\"test token 4\");\n\nINSERT IGNORE INTO objects"));
        assert!(script.contains("    (5, \"test object 5\", 1, \"V\");\n"));
        assert!(script.ends_with("\"test token 5\");\n"));
    }

    #[test]
    fn execute_writes_file_and_reports_counts() {
        let directory = tempfile::tempdir().expect("temp dir should be created");
        let path = directory.path().join("fixtures.sql");

        let result = GenerateTestInsertsUseCase
            .execute(GenerateTestInsertsCommand {
                output: OutputTarget::File(path.clone()),
                ..command(1, 2, None)
            })
            .expect("generation should succeed");

        assert_eq!(result.row_count, 2);
        assert_eq!(result.statement_count, 2);
        assert_eq!(result.output, OutputTarget::File(path.clone()));
        let content = fs::read_to_string(&path).expect("output should be readable");
        assert!(content.starts_with("INSERT IGNORE INTO objects"));
        assert!(content.ends_with("\"test token 2\");\n"));
    }

    #[test]
    fn execute_reports_missing_directory_with_context() {
        let directory = tempfile::tempdir().expect("temp dir should be created");
        let path = directory.path().join("missing").join("fixtures.sql");

        let error = GenerateTestInsertsUseCase
            .execute(GenerateTestInsertsCommand {
                output: OutputTarget::File(path),
                ..command(1, 2, None)
            })
            .expect_err("missing parent directory must fail");

        assert!(error.to_string().starts_with("Unable to create file:"));
    }

    #[test]
    fn execute_rejects_zero_batch_size() {
        let error = GenerateTestInsertsUseCase
            .execute(command(1, 2, Some(0)))
            .expect_err("zero batch size must be rejected");

        assert_eq!(
            error.downcast_ref::<FixtureError>(),
            Some(&FixtureError::InvalidBatchSize(0))
        );
    }
}
