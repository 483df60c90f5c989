use std::{thread, time::Duration};

use lazy_regex::{regex, Lazy, Regex};
use robot_logger::{
    invoke, writer::WritableString, Coloring, Logger, Reporter as _, Status,
};

/// [`Regex`] of a single plain (non-colored) event line.
static LINE_RE: &Lazy<Regex> = regex!(
    r"^(?P<time>\d{2}:\d{2}:\d{2}) \[(?P<level>INFO|PASS|FAIL|ERROR|WARNING)\] \| (?P<test>[^|]+) \| (?P<msg>.*)$"
);

/// Parsed event line.
#[derive(Debug, PartialEq)]
struct Line {
    time: String,
    level: String,
    test: String,
    msg: String,
}

fn logger() -> Logger<WritableString> {
    Logger::new(WritableString::default(), Coloring::Never)
}

/// Parses all the event lines of the given output, skipping banners.
fn events(out: &str) -> Vec<Line> {
    out.lines()
        .filter_map(|l| LINE_RE.captures(l))
        .map(|c| Line {
            time: c["time"].to_owned(),
            level: c["level"].to_owned(),
            test: c["test"].to_owned(),
            msg: c["msg"].to_owned(),
        })
        .collect()
}

fn summary(lines: &[Line]) -> Vec<(&str, &str, &str)> {
    lines
        .iter()
        .map(|l| (l.level.as_str(), l.test.as_str(), l.msg.as_str()))
        .collect()
}

#[test]
fn passing_test_scenario() {
    let mut logger = logger();

    logger.start_test("T1");
    logger.step("do X");
    logger.step("do Y");
    logger.pass_test("done");
    logger.end_test(Status::Pass);

    let out = logger.output().to_string();
    assert_eq!(
        summary(&events(&out)),
        [
            ("INFO", "T1", "Step 1: do X"),
            ("INFO", "T1", "Step 2: do Y"),
            ("PASS", "T1", "done"),
        ],
    );
    let closing = out.lines().rev().nth(1).unwrap();
    assert_eq!(closing, "─".repeat(40));
    assert!(out.contains("✅ T1: PASS"), "{out}");
}

#[test]
fn failing_test_scenario() {
    let mut logger = logger();

    logger.start_test("T2");
    logger.fail("mismatch: hello != goodbye");
    logger.error("Test failed: hello != goodbye");
    logger.end_test(Status::Fail);

    let out = logger.output().to_string();
    assert_eq!(
        summary(&events(&out)),
        [
            ("FAIL", "T2", "mismatch: hello != goodbye"),
            ("ERROR", "T2", "Test failed: hello != goodbye"),
        ],
    );
    assert!(out.contains("❌ T2: FAIL"), "{out}");
}

#[test]
fn orphan_step_uses_placeholder() {
    let mut logger = logger();

    logger.step("orphan");

    assert_eq!(
        summary(&events(logger.output())),
        [("INFO", "UNKNOWN", "Step 1: orphan")],
    );
    assert_eq!(logger.current_test(), None);
    assert_eq!(logger.step_count(), 1);
}

#[test]
fn counter_follows_steps() {
    let mut logger = logger();

    logger.start_test("X");
    assert_eq!(logger.step_count(), 0);

    for n in 1..=5 {
        logger.step("again");
        logger.info("not a step");
        assert_eq!(logger.step_count(), n);
    }
}

#[test]
fn restart_resets_counter() {
    let mut logger = logger();

    logger.start_test("A");
    logger.step("first");
    logger.step("second");
    logger.start_test("B");
    assert_eq!(logger.step_count(), 0);
    logger.step("third");

    let lines = events(logger.output());
    assert_eq!(
        summary(&lines[2..]),
        [("INFO", "B", "Step 1: third")],
    );
}

#[test]
fn duplicates_are_not_suppressed() {
    let mut logger = logger();

    logger.start_test("D");
    logger.pass_test("same");
    logger.pass_test("same");

    assert_eq!(events(logger.output()).len(), 2);
}

#[test]
fn timestamps_advance_with_each_call() {
    let mut logger = logger();

    logger.start_test("Clock");
    logger.step("before");
    thread::sleep(Duration::from_millis(1100));
    logger.step("after");

    let lines = events(logger.output());
    // `HH:MM:SS` compares lexicographically, unless midnight passes.
    assert!(
        lines[0].time < lines[1].time || lines[1].time.starts_with("00"),
        "{lines:?}",
    );
    assert_ne!(lines[0].time, lines[1].time, "stale timestamp: {lines:?}");
}

#[test]
fn end_banner_matches_start_banner_width() {
    let mut logger = logger().with_rule_width(12);

    logger.start_test("W");
    logger.end_test(Status::Skip);

    let out = logger.into_output();
    let rules = out.lines().filter(|l| l.starts_with('─')).collect::<Vec<_>>();
    assert_eq!(rules.len(), 4);
    assert!(rules.iter().all(|r| r.chars().count() == 12));
    assert!(out.contains("⏭️ W: SKIP"));
}

#[test]
fn unknown_status_still_renders() {
    let mut logger = logger();

    logger.start_test("Q");
    logger.end_test("Inconclusive".into());

    assert!(logger.output().contains("📋 Q: Inconclusive"));
}

#[test]
fn supplementary_levels() {
    let mut logger = logger();

    logger.start_test("S");
    logger.info("ready");
    logger.warning("slow response");
    logger.assertion("equals", "1", "2");
    logger.error_details("TimeoutError", "no response");

    assert_eq!(
        summary(&events(logger.output())),
        [
            ("INFO", "S", "ready"),
            ("WARNING", "S", "slow response"),
            (
                "INFO",
                "S",
                "🔍 Assertion: | Type: equals | Expected: 1 | Actual: 2",
            ),
            ("ERROR", "S", "❌ Error: | Type: TimeoutError | no response"),
        ],
    );
    assert_eq!(logger.step_count(), 0);
}

#[test]
fn keywords_drive_logger() {
    let mut logger = logger();

    invoke(&mut logger, "Start Test", &["K"]).unwrap();
    invoke(&mut logger, "step", &["by name"]).unwrap();
    invoke(&mut logger, "Pass_Test", &["bound"]).unwrap();
    invoke(&mut logger, "End Test", &["pass"]).unwrap();
    let err = invoke(&mut logger, "Open Browser", &["x"]).unwrap_err();

    assert!(err.is_unknown_keyword());
    assert_eq!(
        summary(&events(logger.output())),
        [("INFO", "K", "Step 1: by name"), ("PASS", "K", "bound")],
    );
    assert!(logger.output().contains("✅ K: PASS"));
}

#[test]
fn colored_lines_reset_before_newline() {
    let mut logger = Logger::new(WritableString::default(), Coloring::Always);

    logger.start_test("C");
    logger.step("paint");
    logger.pass_test("painted");
    logger.fail("smudged");
    logger.error("spilled");
    logger.end_test(Status::Fail);

    for line in logger.output().lines().filter(|l| l.contains('\x1b')) {
        assert!(
            line.rfind("\x1b[0m") > line.rfind("\x1b[3"),
            "color leaks past line end: {line:?}",
        );
    }
    let plain = console::strip_ansi_codes(logger.output()).into_owned();
    assert_eq!(events(&plain).len(), 4);
}
