use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::config::Paths;
use crate::data::loader::load_table;
use crate::data::model::ModelTable;
use crate::data::writer::write_json;

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

/// Convert the bc03 text table at `input` into a JSON document at `output`.
///
/// The whole input is parsed before `output` is touched, so a bad line
/// leaves any existing output file as it was.
pub fn convert(input: &Path, output: &Path) -> Result<ModelTable> {
    let table = load_table(input)?;
    write_json(&table, output)?;
    Ok(table)
}

/// Run [`convert`] on a [`Paths`] pair.
pub fn convert_paths(paths: &Paths) -> Result<ModelTable> {
    convert(&paths.input, &paths.output)
}

/// Printed once the output document has been written.
pub const COMPLETION_MESSAGE: &str = "Conversion complete. JSON file created in the public folder.";

/// Convert `paths` and report completion on `out`. Nothing is reported on
/// failure; the error is returned to the caller.
pub fn run(paths: &Paths, out: &mut impl Write) -> Result<()> {
    convert_paths(paths)?;
    writeln!(out, "{COMPLETION_MESSAGE}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::ParseError;
    use crate::data::model::AgeLabel;
    use serde_json::Value;

    fn setup(input: &str) -> (tempfile::TempDir, Paths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths {
            input: dir.path().join("bc03_models.txt"),
            output: dir.path().join("bc03_models.json"),
        };
        std::fs::write(&paths.input, input).unwrap();
        (dir, paths)
    }

    fn read_output(paths: &Paths) -> Value {
        serde_json::from_str(&std::fs::read_to_string(&paths.output).unwrap()).unwrap()
    }

    #[test]
    fn test_convert_single_line() {
        let (_dir, paths) = setup("100.0 1.0 2.0 3.0 4.0 5.0 6.0\n");

        convert_paths(&paths).unwrap();

        let doc = read_output(&paths);
        assert_eq!(doc["wavelengths"], serde_json::json!([100.0]));
        for (i, age) in AgeLabel::ALL.iter().enumerate() {
            assert_eq!(
                doc["models"][age.as_str()],
                serde_json::json!([(i + 1) as f64]),
                "series {age}"
            );
        }
    }

    #[test]
    fn test_convert_two_lines_aligned() {
        let (_dir, paths) = setup("100.0 1 2 3 4 5 6\n200.0 11 12 13 14 15 16\n");

        let table = convert_paths(&paths).unwrap();
        assert_eq!(table.len(), 2);

        let doc = read_output(&paths);
        assert_eq!(doc["wavelengths"], serde_json::json!([100.0, 200.0]));
        let models = doc["models"].as_object().unwrap();
        assert_eq!(models.len(), 6);
        for (i, age) in AgeLabel::ALL.iter().enumerate() {
            let col = (i + 1) as f64;
            assert_eq!(
                models[age.as_str()],
                serde_json::json!([col, col + 10.0]),
                "series {age}"
            );
        }
    }

    #[test]
    fn test_convert_empty_input() {
        let (_dir, paths) = setup("");

        let table = convert_paths(&paths).unwrap();
        assert!(table.is_empty());

        let doc = read_output(&paths);
        assert_eq!(doc["wavelengths"], serde_json::json!([]));
        for age in AgeLabel::ALL {
            assert_eq!(doc["models"][age.as_str()], serde_json::json!([]));
        }
    }

    #[test]
    fn test_convert_short_line_writes_nothing() {
        let (_dir, paths) = setup("100.0 1 2 3 4 5 6\n200.0 1 2 3 4 5\n");

        let err = convert_paths(&paths).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::TooFewColumns { line: 2, found: 6 })
        );
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_convert_non_numeric_keeps_previous_output() {
        let (_dir, paths) = setup("100.0 1 2 abc 4 5 6\n");
        std::fs::write(&paths.output, "previous").unwrap();

        let err = convert_paths(&paths).unwrap_err();
        assert!(format!("{err:#}").contains("'abc' is not a number"));
        assert_eq!(std::fs::read_to_string(&paths.output).unwrap(), "previous");
    }

    #[test]
    fn test_run_reports_completion() {
        let (_dir, paths) = setup("100.0 1 2 3 4 5 6\n");
        let mut out: Vec<u8> = Vec::new();

        run(&paths, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Conversion complete. JSON file created in the public folder.\n"
        );
        assert!(paths.output.exists());
    }

    #[test]
    fn test_run_failure_prints_nothing() {
        let (_dir, paths) = setup("100.0 1 2 3 4 5\n");
        let mut out: Vec<u8> = Vec::new();

        assert!(run(&paths, &mut out).is_err());
        assert!(out.is_empty());
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_convert_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");

        let result = convert(&dir.path().join("nope.txt"), &output);
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
