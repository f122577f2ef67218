use std::fs::{self};

use borg::{Interpreter, Outcome, config::Config, get_result};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let output = get_result(&code, &Config::default());
            assert_eq!(output,
                       expected,
                       "BORG example {} in {:?} printed the wrong output:\n{}",
                       i + 1,
                       path,
                       code);
        }
    }

    assert!(count > 0, "No BORG examples found in book/src");
}

/// Pairs every ```borg block with the ```text block that follows it.
fn extract_examples(content: &str) -> Vec<(String, Vec<String>)> {
    let mut examples = Vec::new();
    let mut program: Option<String> = None;
    let mut inside = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if inside.is_none() && trimmed.starts_with("```borg") {
            inside = Some("borg");
            buf.clear();
            continue;
        }
        if inside.is_none() && trimmed.starts_with("```text") && program.is_some() {
            inside = Some("text");
            buf.clear();
            continue;
        }
        if inside.is_some() && trimmed.starts_with("```") {
            match inside.take() {
                Some("borg") => {
                    assert!(program.is_none(), "BORG example without expected output");
                    program = Some(buf.clone());
                },
                _ => {
                    let expected = buf.lines().map(str::to_string).collect();
                    examples.push((program.take().unwrap_or_default(), expected));
                },
            }
            continue;
        }
        if inside.is_some() {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    assert!(program.is_none(), "BORG example without expected output");
    examples
}

fn run(src: &str) -> Vec<String> {
    get_result(src, &Config::default())
}

fn run_with(src: &str, config: &Config) -> Vec<String> {
    get_result(src, config)
}

#[test]
fn canonical_sample() {
    let src = "VAR BORAMIR = 25
VAR LEGOLAS = 101
PRINT BORAMIR
PRINT LEGOLAS
PRINT GANDALF
BORAMIR ++
PRINT BORAMIR * 2
VAR GANDALF = BORAMIR + PEN
PRINT GANDALF";

    assert_eq!(run(src),
               ["BORAMIR IS 25",
                "LEGOLAS IS 101",
                "GANDALF IS UNDEFINED",
                "BORAMIR * 2 IS 52",
                "Error defining variable GANDALF: PEN IS UNDEFINED",
                "GANDALF IS UNDEFINED"]);
}

#[test]
fn definitions_and_assignments_print_nothing() {
    assert!(run("VAR X = 1\nX = 2\nX ++\nX --\nCOM hello\n\n   \nSTART\nFINISH").is_empty());
}

#[test]
fn assignment_forms() {
    let src = "VAR X = 1
VAR Y = 10
X = Y
PRINT X
X = ++ Y
PRINT X
PRINT Y
X = Y --
PRINT X
PRINT Y
X = Y * 3
PRINT X";

    assert_eq!(run(src),
               ["X IS 10",
                "X IS 11",
                "Y IS 11",
                "X IS 11",
                "Y IS 10",
                "X IS 30"]);
}

#[test]
fn failed_assignment_keeps_old_value() {
    let src = "VAR X = 1
X = UNKNOWN + 1
X = 5 / 0
PRINT X";

    assert_eq!(run(src),
               ["Error redefining variable X: UNKNOWN IS UNDEFINED",
                "Error redefining variable X: Division by zero",
                "X IS 1"]);
}

#[test]
fn assignment_to_unbound_name_has_no_side_effects() {
    let src = "VAR Y = 1
X = Y ++
PRINT Y";

    assert_eq!(run(src),
               ["Error redefining variable X: X IS UNDEFINED", "Y IS 1"]);
}

#[test]
fn overflowing_increment_leaves_variable_unchanged() {
    let src = "VAR X = 9223372036854775807
PRINT X ++
X ++
PRINT X";

    assert_eq!(run(src),
               ["Integer overflow while trying to compute result",
                "Integer overflow while trying to compute result",
                "X IS 9223372036854775807"]);
}

#[test]
fn negative_values_are_ordinary_values() {
    let src = "VAR X = -1
PRINT X
VAR Y = X - 1
PRINT Y
PRINT X * Y";

    assert_eq!(run(src), ["X IS -1", "Y IS -2", "X * Y IS 2"]);
}

#[test]
fn nested_scopes_tear_down_innermost_first() {
    let src = "VAR A = 1
START
VAR B = 2
START
VAR C = 3
PRINT A + C
FINISH
PRINT C
PRINT B
FINISH
PRINT B
PRINT A";

    assert_eq!(run(src),
               ["A + C IS 4",
                "C IS UNDEFINED",
                "B IS 2",
                "B IS UNDEFINED",
                "A IS 1"]);
}

#[test]
fn finish_at_global_scope_keeps_bindings() {
    assert_eq!(run("VAR X = 7\nFINISH\nFINISH\nPRINT X"), ["X IS 7"]);
}

#[test]
fn redefinition_within_a_scope_overwrites() {
    let src = "START
VAR X = 1
VAR X = 2
PRINT X
FINISH
PRINT X";

    assert_eq!(run(src), ["X IS 2", "X IS UNDEFINED"]);
}

#[test]
fn soft_scope_limit_stops_increasing_depth() {
    let config = Config { max_depth: Some(1),
                          ..Config::default() };
    let src = "START
START
VAR X = 1
FINISH
PRINT X
FINISH
PRINT X";

    assert_eq!(run_with(src, &config), ["X IS UNDEFINED", "X IS UNDEFINED"]);
}

#[test]
fn strict_scope_limit_reports_an_error() {
    let config = Config { max_depth:     Some(1),
                          strict_scopes: true,
                          ..Config::default() };

    assert_eq!(run_with("START\nSTART\nPRINT 1", &config),
               ["Cannot START: scope depth limit of 1 reached", "1 IS 1"]);
}

#[test]
fn unbounded_scopes_nest_arbitrarily() {
    let config = Config { max_depth: None,
                          ..Config::default() };
    let mut interpreter = Interpreter::new(&config);

    for _ in 0..100 {
        assert_eq!(interpreter.feed_line("START"), Outcome::Silent);
    }
    assert_eq!(interpreter.context().scope_depth(), 100);

    for _ in 0..150 {
        interpreter.feed_line("FINISH");
    }
    assert_eq!(interpreter.context().scope_depth(), 0);
}

#[test]
fn single_bucket_table_behaves_the_same() {
    let config = Config { buckets: 1,
                          ..Config::default() };
    let src = "VAR APPLE = 33
VAR PEN = 32
START
VAR PINEAPPLE = APPLE + PEN
FINISH
PRINT PINEAPPLE
PRINT APPLE - PEN";

    assert_eq!(run_with(src, &config),
               ["PINEAPPLE IS UNDEFINED", "APPLE - PEN IS 1"]);
}

#[test]
fn exit_stops_the_interpreter() {
    let mut interpreter = Interpreter::new(&Config::default());

    assert_eq!(interpreter.feed_line("VAR X = 1"), Outcome::Silent);
    assert!(!interpreter.is_finished());
    assert_eq!(interpreter.feed_line("EXIT"), Outcome::Exit);
    assert!(interpreter.is_finished());
    assert_eq!(interpreter.feed_line("PRINT X"), Outcome::Exit);
}

#[test]
fn whitespace_is_only_a_separator() {
    assert_eq!(run("\tVAR   X\t=  4  \n  PRINT    X   ^ 2   "), ["X ^ 2 IS 16"]);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(run("var X = 1"), ["Error on line 1: Unknown command 'var'."]);
}

#[test]
fn outcome_distinguishes_results_from_diagnostics() {
    let mut interpreter = Interpreter::new(&Config::default());

    assert_eq!(interpreter.feed_line("PRINT 2 ^ 10"),
               Outcome::Output("2 ^ 10 IS 1024".to_string()));
    assert_eq!(interpreter.feed_line("PRINT NOPE"),
               Outcome::Diagnostic("NOPE IS UNDEFINED".to_string()));
}

#[test]
fn unicode_whitespace_separates_words() {
    assert_eq!(run("PRINT\u{0B}5\nVAR\u{A0}X\u{A0}=\u{2003}1\nPRINT X"),
               ["5 IS 5", "X IS 1"]);
}

#[test]
fn out_of_range_integers_are_never_names() {
    let src = "VAR 99999999999999999999 = 5
PRINT 99999999999999999999
VAR X = -99999999999999999999
PRINT X
99999999999999999999 ++";

    assert_eq!(run(src),
               ["Error on line 1: '99999999999999999999' cannot be used as a variable name.",
                "Integer overflow while trying to compute result",
                "Error defining variable X: Integer overflow while trying to compute result",
                "X IS UNDEFINED",
                "Error on line 5: '99999999999999999999' cannot be used as a variable name."]);
}

#[test]
fn invalid_utf8_only_affects_its_line() {
    let mut interpreter = Interpreter::new(&Config::default());
    let mut out = Vec::new();

    interpreter.run_reader(&b"VAR X = 1\nPRINT \xff\nCOM caf\xe9\nPRINT X\n"[..], &mut out)
               .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(),
               "\u{FFFD} IS UNDEFINED\nX IS 1\n");
}

#[test]
fn reader_stops_at_exit_and_accepts_crlf() {
    let mut interpreter = Interpreter::new(&Config::default());
    let mut out = Vec::new();

    interpreter.run_reader(&b"VAR X = 3\r\nPRINT X\r\nEXIT\r\nPRINT X\r\n"[..], &mut out)
               .unwrap();

    assert_eq!(out, b"X IS 3\n");
    assert!(interpreter.is_finished());
}
