//! The abacus app: evaluates one expression with [libabacus](libabacus) and reports the result
//! or an annotated error.

#![deny(missing_docs)]

#[cfg(test)]
mod test;

mod diagnostics;
use diagnostics::{emit_abacus_diagnostic, sanitize_source_for_diagnostics};

use libabacus::diagnostics::all_codes_with_explanations;
use libabacus::{evaluate, to_postfix, Domain, EvaluationError};
use log::info;

/// Options to run abacus with.
pub struct Opts {
    /// Expression to evaluate.
    pub expression: String,
    /// Number domain the expression is evaluated in.
    pub domain: Domain,
    /// When true, abacus will stop after converting the expression to postfix order.
    pub postfix: bool,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) given a parser that acts on the clap [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("expression")
                .help("Expression to evaluate")
                .required(true)
                .default_value_if("explain", None, ""),
        )
        .arg(
            clap::Arg::with_name("domain")
                .short("-d")
                .long("--domain")
                .next_line_help(true)
                .help(
                    "Number domain of the expression. Possible values:\n\
                    \tnatural:    0, 1, 2, ... with + - * / % > and GCD, LCM, NZER, TM.\n\
                    \tinteger:    signed integers with + - * / % and ABS, POZ.\n\
                    \trational:   fractions like -2/3 with + - * / and RED, INT.\n\
                    \tpolynomial: polynomials in x with + - * / % ^ and LED, DEG, FAC, GCF, DER, NMR.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("natural")
                .takes_value(true)
                .possible_values(&["natural", "integer", "rational", "polynomial"]),
        )
        .arg(
            clap::Arg::with_name("postfix")
                .long("--postfix")
                .help("Stop after converting the expression and print it in postfix order"),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("--explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        );
    let matches = parser(app)?;

    let domain = matches
        .value_of("domain")
        .unwrap_or("natural")
        .parse::<Domain>()
        .map_err(|e| clap::Error::with_description(&e, clap::ErrorKind::InvalidValue))?;
    Ok(Opts {
        expression: matches.value_of("expression").unwrap_or_default().into(),
        domain,
        postfix: matches.is_present("postfix"),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        color,
    })
}

/// Output of an abacus execution.
#[derive(Default, Debug)]
pub struct AbacusResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds an [AbacusResult](self::AbacusResult).
struct AbacusResultBuilder {
    /// Expression source sanitized for diagnostic emission.
    sanitized_expression: String,
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
}

impl AbacusResultBuilder {
    fn new(expression: &str, color: bool) -> Self {
        Self {
            sanitized_expression: sanitize_source_for_diagnostics(expression),
            color,
            stdout: String::new(),
            stderr: String::new(),
            page: false,
        }
    }

    fn emit(&mut self, out: &str) {
        self.stdout.push_str(out);
    }

    fn err(&mut self, error: &EvaluationError) {
        self.stderr.push_str(&emit_abacus_diagnostic(
            &self.sanitized_expression,
            error,
            self.color,
        ));
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn ok(self) -> AbacusResult {
        AbacusResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn failed(self) -> AbacusResult {
        AbacusResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }
}

/// Runs abacus end-to-end.
pub fn run_abacus(opts: Opts) -> AbacusResult {
    let mut result = AbacusResultBuilder::new(&opts.expression, opts.color);

    if let Some(diag_code) = opts.explain_diagnostic {
        let codes = all_codes_with_explanations();
        return match codes.get::<str>(&diag_code) {
            Some(explanation) => {
                result.emit(explanation);
                result.page(true);
                result.ok()
            }
            None => {
                result
                    .stderr
                    .push_str(&format!("{} is not a diagnostic code", diag_code));
                result.failed()
            }
        };
    }

    info!("running abacus in the {} domain", opts.domain);
    if opts.postfix {
        return match to_postfix(opts.domain, &opts.expression) {
            Ok(postfix) => {
                result.emit(&postfix.to_string());
                result.ok()
            }
            Err(error) => {
                result.err(&error);
                result.failed()
            }
        };
    }

    match evaluate(opts.domain, &opts.expression) {
        Ok(Some(value)) => {
            result.emit(&value);
            result.ok()
        }
        Ok(None) => result.ok(),
        Err(error) => {
            result.err(&error);
            result.failed()
        }
    }
}
