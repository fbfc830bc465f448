//! End-to-end translation of project trees described by a ts2delphi.toml.

use std::{fs, path::Path};

use tempfile::TempDir;
use ts2delphi_codegen::{TranslateError, project::Project, unit::UnitKind};
use ts2delphi_manifest::ProjectToml;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn open_project(temp: &TempDir, manifest: &str) -> Project {
    write(temp.path(), "ts2delphi.toml", manifest);
    let toml =
        ProjectToml::open(temp.path().join("ts2delphi.toml")).expect("Failed to open manifest");
    Project::from_manifest(&toml)
}

#[test]
fn test_reserved_keyword_aborts_only_that_file() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "src/Program.ast.json",
        r#"{
            "imports": [{ "specifier": "./lib/strings" }],
            "functions": [{ "defaultExport": true }]
        }"#,
    );
    write(
        temp.path(),
        "src/lib/strings.ast.json",
        r#"{ "functions": [{ "name": "concat", "exported": true, "returnType": "string" }] }"#,
    );
    write(
        temp.path(),
        "src/lib/Loops.ast.json",
        r#"{ "imports": [{ "specifier": "./for" }] }"#,
    );

    let project = open_project(&temp, "[project]\nmain = \"Program.ts\"\n");
    let report = project.translate_all().unwrap();

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    let (entry, err) = failures[0];
    assert_eq!(entry.name, "Loops");
    assert!(matches!(err, TranslateError::ReservedKeyword { name, .. } if name == "for"));

    let translated: Vec<_> = report.translated().collect();
    assert_eq!(translated.len(), 2);

    let (program, translation) = translated[0];
    assert_eq!(program.name, "Program");
    assert_eq!(translation.kind, UnitKind::Program);
    assert!(translation.content.contains("\tuses Strings in 'lib/strings.pas';\n"));
    assert_eq!(program.output, temp.path().join("out").join("Program.pas"));

    let (strings, translation) = translated[1];
    assert_eq!(translation.kind, UnitKind::Unit);
    assert!(translation.content.starts_with("unit strings;\n"));
    assert!(translation.content.contains("\tfunction concat: String;\n"));
    assert_eq!(
        strings.output,
        temp.path().join("out").join("lib").join("strings.pas")
    );
}

#[test]
fn test_main_without_entry_point() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "ts/App.ast.json",
        r#"{ "functions": [{ "name": "run" }] }"#,
    );

    let project = open_project(
        &temp,
        "[project]\ninput = \"ts\"\noutput = \"pas\"\nmain = \"App.ts\"\n",
    );
    let report = project.translate_all().unwrap();

    let (entry, err) = report.failures().next().expect("expected a failure");
    assert_eq!(entry.name, "App");
    assert!(matches!(err, TranslateError::MissingEntryPoint { .. }));
}

#[test]
fn test_translate_options_from_manifest() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "src/Forms.ast.json",
        r#"{
            "imports": [{ "specifier": "@vcl/forms" }, { "specifier": "./label" }],
            "classes": [{ "name": "MainForm", "extends": "TForm",
                          "properties": [{ "name": "caption", "type": "string", "visibility": "public" }] }]
        }"#,
    );
    write(
        temp.path(),
        "src/Views.ast.json",
        r#"{
            "imports": [{ "specifier": "@vcl/forms" }],
            "classes": [{ "name": "MainForm", "extends": "TForm",
                          "properties": [{ "name": "caption", "type": "string", "visibility": "public" }] }]
        }"#,
    );

    let project = open_project(
        &temp,
        "[translate]\nsystem_prefixes = [\"@vcl/\"]\nreserved_keywords = [\"label\"]\nindent = 4\n",
    );
    let report = project.translate_all().unwrap();

    let failed: Vec<&str> = report.failures().map(|(e, _)| e.name.as_str()).collect();
    assert_eq!(failed, vec!["Forms"]);

    let (_, views) = report.translated().next().unwrap();
    assert_eq!(
        views.content,
        "unit Views;\n\
         \n\
         interface\n\
         \x20   uses Forms;\n\
         \n\
         \x20   type\n\
         \x20       MainForm = class (TForm)\n\
         \x20           public\n\
         \x20               caption\n\
         \n\
         end.\n"
    );
}
