//! End-to-end tests for the transformer on realistic source text

use autosemi_core::*;
use std::fs;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

#[test]
fn test_go_program() {
    let source = fixture("hello.go");
    let expected = fixture("hello.go.expected");
    assert_eq!(transform(&source), expected);
}

#[test]
fn test_go_program_through_transformer() {
    let source = fixture("hello.go");
    let expected = fixture("hello.go.expected");

    for config in [TransformConfig::sequential(), TransformConfig::parallel()] {
        let transformer = Transformer::with_config(config).unwrap();
        let output = transformer.process(Input::from_text(source.clone())).unwrap();
        assert_eq!(output.text, expected);
        assert_eq!(output.stats.lines, source.lines().count());
    }
}

#[test]
fn test_spec_scenarios_line_by_line() {
    let cases = [
        ("x := 5", "x := 5;"),
        ("foo(a, b)", "foo(a, b);"),
        ("i++", "i++;"),
        ("if x > 0 {", "if x > 0 {"),
        ("return", "return;"),
        ("s := \"hello\"", "s := \"hello\";"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(terminate_line(input).to_string(), expected, "input: {input:?}");
        assert_eq!(
            transform(&format!("{input}\n")),
            format!("{expected}\n"),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_crlf_source_is_normalized() {
    let source = fixture("hello.go").replace('\n', "\r\n");
    let output = transform(&source);
    assert!(!output.contains('\r'));
    assert_eq!(output, fixture("hello.go.expected"));
}

#[test]
fn test_second_pass_leaves_terminated_lines_alone() {
    let once = transform(&fixture("hello.go"));
    let twice = transform(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_rule_statistics_for_program() {
    let output = Transformer::new()
        .process_text(&fixture("hello.go"))
        .unwrap();
    let stats = output.stats;

    assert_eq!(stats.terminated + stats.passed_through(), stats.lines);
    assert_eq!(stats.by_rule.values().sum::<usize>(), stats.terminated);
    assert_eq!(stats.by_rule.get("close-brace"), Some(&4));
    assert_eq!(stats.by_rule.get("increment"), Some(&1));
    assert_eq!(stats.by_rule.get("hex-literal"), Some(&1));
    assert_eq!(stats.by_rule.get("raw-string"), Some(&1));
}

#[test]
fn test_stats_serialize_to_json() {
    let output = Transformer::new().process_text("x\n{\n").unwrap();
    let json = serde_json::to_value(&output.stats).unwrap();
    assert_eq!(json["lines"], 2);
    assert_eq!(json["terminated"], 1);
    assert_eq!(json["by_rule"]["identifier"], 1);
}

#[test]
fn test_large_input_adaptive_goes_parallel() {
    let source = fixture("hello.go").repeat(1_000);
    let config = TransformConfig::builder()
        .parallel_threshold(1_000)
        .chunk_lines(97)
        .threads(Some(3))
        .build()
        .unwrap();
    let output = Transformer::with_config(config)
        .unwrap()
        .process_text(&source)
        .unwrap();

    #[cfg(feature = "parallel")]
    assert_eq!(output.metadata.execution_mode, ExecutionMode::Parallel);
    assert_eq!(output.text, transform(&source));
}
