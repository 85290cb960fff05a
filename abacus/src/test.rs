use crate::{get_opts, run_abacus, AbacusResult};
use pretty_assertions::assert_eq;

fn run(args: &[&str]) -> AbacusResult {
    let argv = std::iter::once("abacus").chain(args.iter().copied());
    let opts = get_opts(|app| app.get_matches_from_safe(argv), false).expect("valid arguments");
    run_abacus(opts)
}

macro_rules! cli_tests {
    ($($name:ident: $args:expr => $stdout:expr)*) => {
        $(
            #[test]
            fn $name() {
                let result = run(&$args);
                assert_eq!(result.stderr, "");
                assert_eq!(result.code, 0);
                assert_eq!(result.stdout, $stdout);
            }
        )*
    };
}

cli_tests! {
    natural_by_default: ["2 + 3 * 4"] => "14"
    natural_comparison: ["-d", "natural", "7 > 3"] => "2"
    integer_domain: ["--domain", "integer", "-7 / 2"] => "-3"
    rational_domain: ["-d", "rational", "1/2 + 1/3"] => "5/6"
    polynomial_domain: ["-d", "polynomial", "(x + 1)(x - 1)"] => "x^2 - 1"
    empty_expression: [""] => ""
    postfix_natural: ["--postfix", "1 + 2 * 3"] => "1 2 3 * +"
}

#[test]
fn evaluation_error_is_annotated() {
    let result = run(&["-d", "natural", "3 - 5"]);
    assert_eq!(result.code, 1);
    assert_eq!(result.stdout, "");
    assert!(result.stderr.contains("error[M0005]"), "{}", result.stderr);
    assert!(result.stderr.contains("3 - 5"), "{}", result.stderr);
    assert!(result.stderr.contains("--explain M0005"), "{}", result.stderr);
    // expressions come from the command line, so there is no file to point at
    assert!(!result.stderr.contains("-->"), "{}", result.stderr);
}

#[test]
fn huge_shift_is_an_overflow() {
    let result = run(&["TM(1, 18446744073709551615)"]);
    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("error[M0007]"), "{}", result.stderr);
}

#[test]
fn malformed_expression_is_annotated() {
    let result = run(&["(1 + 2"]);
    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("error[E0005]"), "{}", result.stderr);
}

#[test]
fn postfix_reports_malformed_expressions() {
    let result = run(&["--postfix", "1 +"]);
    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("error[E0003]"), "{}", result.stderr);
}

#[test]
fn explain_known_code() {
    let result = run(&["--explain", "M0002"]);
    assert_eq!(result.code, 0);
    assert!(result.page);
    assert!(result.stdout.contains("zero"));
}

#[test]
fn explain_unknown_code() {
    let result = run(&["--explain", "Q9999"]);
    assert_eq!(result.code, 1);
    assert_eq!(result.stderr, "Q9999 is not a diagnostic code");
}

#[test]
fn rejects_unknown_domain() {
    let argv = vec!["abacus", "-d", "complex", "1"];
    assert!(get_opts(|app| app.get_matches_from_safe(argv), false).is_err());
}
