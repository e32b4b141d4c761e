//! Integration tests for the draft table generator.

use std::fs;

use drafttable::draft::unique_tokens;
use drafttable::{DraftConfig, DraftError, DraftGenerator, TableStyle};
use tempfile::TempDir;

#[test]
fn test_rendered_table_snapshot() {
    let table = DraftGenerator::new().generate("Review design, design review, build plan");

    insta::assert_snapshot!(table.to_markdown().trim_end(), @r"
    | Phase | Step | Task | Guard |
    |------|------|------|------|
    | ANA | A-1 | Review analysis | – |
    | ANA | A-2 | design analysis | – |
    | ANA | A-3 | review analysis | – |
    | ANA | A-4 | build analysis | – |
    | ANA | A-5 | plan analysis | – |
    ");
}

#[test]
fn test_distinct_token_counts() {
    let generator = DraftGenerator::new();

    for (text, expected) in [
        ("", 0),
        ("ox ox ox", 0),
        ("cat", 1),
        ("cat dog cat", 2),
        ("one two three four five", 5),
        ("one two three four five six seven", 5),
    ] {
        let table = generator.generate(text);
        assert_eq!(table.len(), expected, "input: {text:?}");

        let steps: Vec<String> = table.rows.iter().map(|r| r.step.clone()).collect();
        let expected_steps: Vec<String> = (1..=expected).map(|i| format!("A-{i}")).collect();
        assert_eq!(steps, expected_steps);
    }
}

#[test]
fn test_first_seen_order_across_lines() {
    let text = "zeta\nalpha beta\nalpha zeta gamma\n";
    assert_eq!(unique_tokens(text), vec!["zeta", "alpha", "beta", "gamma"]);
}

#[test]
fn test_run_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("meeting.txt");
    let output = temp_dir.path().join("draft_wbs.md");
    fs::write(&input, "Kickoff: scope, risks, 2 owners; scope.").unwrap();

    let summary = DraftGenerator::new().run(&input, &output).unwrap();
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.unique_tokens, 4);
    assert_eq!(summary.output, output);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[2], "| ANA | A-1 | Kickoff analysis | – |");
    assert_eq!(lines[5], "| ANA | A-4 | owners analysis | – |");
}

#[test]
fn test_repeated_runs_identical() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("notes.txt");
    let output = temp_dir.path().join("out.md");
    fs::write(&input, "one two three four five six seven eight").unwrap();

    let generator = DraftGenerator::new();
    generator.run(&input, &output).unwrap();
    let first = fs::read_to_string(&output).unwrap();
    generator.run(&input, &output).unwrap();
    let second = fs::read_to_string(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_utf8_input_is_input_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("binary.bin");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let err = DraftGenerator::new().generate_from_file(&input).unwrap_err();
    assert!(matches!(err, DraftError::InputAccess { .. }));
}

#[test]
fn test_configured_generator() {
    let config = DraftConfig {
        max_rows: 2,
        step_prefix: "R".to_string(),
        task_suffix: "review".to_string(),
        ..Default::default()
    };
    let table = DraftGenerator::from_config(&config).unwrap().generate("api cli docs tests");

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1].to_markdown(), "| ANA | R-2 | cli review | – |");
}

#[test]
fn test_with_style_override() {
    let style = TableStyle { guard: "ok".to_string(), ..TableStyle::default() };
    let table = DraftGenerator::new().with_style(style).generate("plan");
    assert_eq!(table.rows[0].guard, "ok");
}
