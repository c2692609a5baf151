//! Generate operation - structs and HTML report from a live schema.

use dbstruct_codegen::{Generator, report::HtmlReport};
use dbstruct_core::{Emitter, Options, Result};
use dbstruct_schema::{SchemaSource, introspect};
use tracing::debug;

use crate::reports::{
    GenerateReport, GenerationResult, HtmlResult, MergedDeclaration, WrittenResult,
};

/// Execute the generate operation.
///
/// The source is only held while the schema is read. With `dry_run` the
/// files are previewed and nothing is written.
pub fn generate<S: SchemaSource>(
    source: S,
    options: &Options,
    dry_run: bool,
) -> Result<GenerateReport> {
    let tables = introspect(&source, &options.filters, &options.exclude)?;
    drop(source);

    let generator = Generator::new(options, &tables);
    let merged = generator
        .declarations()
        .iter()
        .filter(|decl| decl.tables.len() > 1)
        .map(|decl| MergedDeclaration {
            type_name: decl.type_name.clone(),
            tables: decl.tables.clone(),
        })
        .collect();

    let result = match &options.model_dir {
        _ if dry_run => GenerationResult::Preview(generator.preview()),
        Some(dir) => {
            let written = generator.generate(dir)?;
            debug!(emitter = generator.name(), files = written.total(), "code generated");
            GenerationResult::Written(WrittenResult {
                output_dir: dir.clone(),
                written: written.written,
                unchanged: written.unchanged,
            })
        }
        None => GenerationResult::Skipped,
    };

    let html = match &options.html_file {
        Some(path) => {
            let result = if dry_run {
                None
            } else {
                Some(HtmlReport::new(&tables).write(path)?)
            };
            Some(HtmlResult {
                path: path.clone(),
                result,
            })
        }
        None => None,
    };

    Ok(GenerateReport {
        database: options.database.display_name().to_string(),
        tables: tables.len(),
        declarations: generator.declarations().len(),
        merged,
        result,
        html,
    })
}

#[cfg(test)]
mod tests {
    use dbstruct_core::{Error, Filter, WriteResult};
    use dbstruct_schema::testing::{MemorySource, column};
    use tempfile::TempDir;

    use super::*;
    use crate::reports::{RecordingOutput, Report};

    fn source() -> MemorySource {
        MemorySource::new()
            .table(
                "app_user",
                "application users",
                vec![
                    column("id", "bigint(20) unsigned").key("PRI"),
                    column("user_name", "varchar(64)").key("UNI"),
                    column("created_at", "datetime").nullable(),
                ],
            )
            .table("app_log", "", vec![column("id", "int(11)").key("PRI")])
            .table("sys_user", "", vec![column("email", "varchar(128)")])
    }

    fn options(temp: &TempDir) -> Options {
        Options {
            dsn: "root:123456@(127.0.0.1:3306)/test".to_string(),
            filters: vec![Filter::new("app_", "app_%"), Filter::new("sys_", "sys_%")],
            model_dir: Some(temp.path().join("src")),
            html_file: Some(temp.path().join("docs/schema.html")),
            ..Options::default()
        }
    }

    #[test]
    fn test_generate_writes_code_and_html() {
        let temp = TempDir::new().unwrap();
        let opts = options(&temp);

        let report = generate(source(), &opts, false).unwrap();

        assert_eq!(report.database, "MySQL");
        assert_eq!(report.tables, 3);
        // app_user and sys_user both become `User` once prefixes are stripped.
        assert_eq!(report.declarations, 2);
        assert_eq!(report.merged.len(), 1);
        assert_eq!(report.merged[0].type_name, "User");
        assert_eq!(report.merged[0].tables, vec!["app_user", "sys_user"]);

        let model = temp.path().join("src/model.rs");
        match &report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.written, vec![model.clone()]);
                assert!(written.unchanged.is_empty());
            }
            other => panic!("expected written files, got {:?}", other),
        }
        let code = std::fs::read_to_string(&model).unwrap();
        assert!(code.contains("pub struct User {"));
        assert!(code.contains("pub struct Log {"));
        assert!(code.contains("pub email: String,"));

        let html = report.html.as_ref().unwrap();
        assert_eq!(html.result, Some(WriteResult::Written));
        assert!(std::fs::read_to_string(&html.path).unwrap().contains("sys_user"));
    }

    #[test]
    fn test_rerun_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let opts = options(&temp);
        generate(source(), &opts, false).unwrap();
        let report = generate(source(), &opts, false).unwrap();

        match &report.result {
            GenerationResult::Written(written) => {
                assert!(written.written.is_empty());
                assert_eq!(written.unchanged.len(), 1);
            }
            other => panic!("expected written files, got {:?}", other),
        }
        assert_eq!(
            report.html.as_ref().unwrap().result,
            Some(WriteResult::Unchanged)
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let opts = Options {
            filters: vec![Filter::new("app_", "app_%")],
            ..options(&temp)
        };

        let report = generate(source(), &opts, true).unwrap();

        match &report.result {
            GenerationResult::Preview(files) => {
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].path, "model.rs");
            }
            other => panic!("expected a preview, got {:?}", other),
        }
        assert_eq!(report.html.as_ref().unwrap().result, None);
        assert!(!temp.path().join("src").exists());
        assert!(!temp.path().join("docs").exists());

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines[0], "Read: 2 tables from MySQL");
        assert_eq!(out.lines[1], "── model.rs ──");
        assert!(out.lines.contains(&"1 files would be generated".to_string()));
    }

    #[test]
    fn test_without_dir_skips_code() {
        let temp = TempDir::new().unwrap();
        let opts = Options {
            model_dir: None,
            html_file: None,
            exclude: vec!["sys_user".to_string()],
            ..options(&temp)
        };

        let report = generate(source(), &opts, false).unwrap();

        assert!(matches!(report.result, GenerationResult::Skipped));
        assert!(report.merged.is_empty());
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "Read: 2 tables from MySQL",
                "Generated: nothing (no output directory set, use --dir)",
            ]
        );
    }

    #[test]
    fn test_unknown_type_aborts_before_writing() {
        let temp = TempDir::new().unwrap();
        let opts = Options {
            filters: Vec::new(),
            ..options(&temp)
        };
        let source = source().table("geo", "", vec![column("area", "geometry")]);

        let err = generate(source, &opts, false).unwrap_err();

        assert!(matches!(*err, Error::UnknownType { .. }));
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            database: "MySQL".to_string(),
            tables: 2,
            declarations: 1,
            merged: vec![MergedDeclaration {
                type_name: "User".to_string(),
                tables: vec!["a_user".to_string(), "b_user".to_string()],
            }],
            result: GenerationResult::Written(WrittenResult {
                output_dir: "src".into(),
                written: vec!["src/model/user.rs".into()],
                unchanged: vec!["src/model/mod.rs".into()],
            }),
            html: Some(HtmlResult {
                path: "schema.html".into(),
                result: Some(WriteResult::Unchanged),
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: User merges tables a_user, b_user",
                "Read: 2 tables from MySQL",
                "Generated: 1 structs in src",
                "  + src/model/user.rs",
                "  = src/model/mod.rs",
                "HTML report: schema.html (unchanged)",
            ]
        );
    }
}
