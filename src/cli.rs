//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::{fs, io, path::PathBuf, process};

use clap::{Parser, Subcommand};

use crate::{
    errors::{print_error, to_source_span, ErrorReporting, SourceContext, ValidationContext},
    filter, headline,
    rules::{is_valid, EmailShapeRule, NameRule, Rule, RuleRegistry, Severity},
};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "masthead",
    version,
    about = "A small, deterministic headline-formatting and input-validation toolkit."
)]
pub struct MastheadArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Compose a headline sentence from a label.
    Headline {
        /// The label to embed in the headline template.
        #[arg(required = true)]
        label: String,
    },
    /// Check a candidate against the name rule (no decimal digits).
    CheckName {
        /// The candidate name to check.
        #[arg(required = true)]
        candidate: String,
        /// Print diagnostics as JSON instead of rendered reports.
        #[arg(long)]
        json: bool,
    },
    /// Check a candidate against the email shape rule (local@domain).
    CheckEmail {
        /// The candidate email to check.
        #[arg(required = true)]
        candidate: String,
        /// Print diagnostics as JSON instead of rendered reports.
        #[arg(long)]
        json: bool,
    },
    /// Filter input lines to those containing a search term.
    Filter {
        /// The search term (case-insensitive).
        #[arg(required = true)]
        term: String,
        /// The file to read records from; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// List all available validation rules.
    ListRules,
}

// ============================================================================
// MAIN ENTRY POINT - Direct library calls
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = MastheadArgs::parse();

    match args.command {
        ArgsCommand::Headline { label } => {
            println!("{}", headline::format(&label));
        }

        ArgsCommand::CheckName { candidate, json } => {
            check_candidate(&NameRule, &candidate, json);
        }

        ArgsCommand::CheckEmail { candidate, json } => {
            check_candidate(&EmailShapeRule, &candidate, json);
        }

        ArgsCommand::Filter { term, file } => {
            run_filter(&term, file);
        }

        ArgsCommand::ListRules => {
            print_rule_names(&RuleRegistry::canonical());
        }
    }
}

// ============================================================================
// CANDIDATE CHECKING
// ============================================================================

fn check_candidate(rule: &dyn Rule, candidate: &str, json: bool) {
    let diagnostics = rule.check(candidate);
    let valid = is_valid(&diagnostics);

    if json {
        let rendered = serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|e| {
            eprintln!("Error serializing diagnostics: {}", e);
            process::exit(1);
        });
        println!("{}", rendered);
    } else {
        let ctx = ValidationContext::new(
            SourceContext::from_input("candidate", candidate),
            rule.name(),
        );
        for diagnostic in &diagnostics {
            match diagnostic.severity {
                Severity::Error => {
                    print_error(
                        ctx.invalid_candidate(&diagnostic.message, to_source_span(diagnostic.span)),
                    );
                }
                Severity::Warning | Severity::Info => {
                    eprintln!("warning: {}", diagnostic.message);
                }
            }
        }
        if valid {
            println!("ok");
        }
    }

    if !valid {
        process::exit(1);
    }
}

// ============================================================================
// RECORD FILTERING
// ============================================================================

fn run_filter(term: &str, file: Option<PathBuf>) {
    let content = match file {
        Some(path) => read_file_or_exit(&path),
        None => read_stdin_or_exit(),
    };

    let matched = filter::filter(content.lines(), term);
    for record in &matched {
        println!("{}", record);
    }

    if matched.is_empty() {
        let ctx = ValidationContext::new(SourceContext::fallback("search input"), "filter");
        print_error(ctx.no_matches(term));
        process::exit(1);
    }
}

// ============================================================================
// HELPER FUNCTIONS - Common patterns extracted
// ============================================================================

fn read_file_or_exit(path: &PathBuf) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        let ctx = ValidationContext::new(SourceContext::fallback("file input"), "filter");
        print_error(ctx.io(&path.display().to_string(), &e.to_string()));
        process::exit(1);
    })
}

fn read_stdin_or_exit() -> String {
    io::read_to_string(io::stdin()).unwrap_or_else(|e| {
        let ctx = ValidationContext::new(SourceContext::fallback("stdin"), "filter");
        print_error(ctx.io("stdin", &e.to_string()));
        process::exit(1);
    })
}

// ============================================================================
// OUTPUT FUNCTIONS - Simple, direct output
// ============================================================================

fn print_rule_names(registry: &RuleRegistry) {
    let names = registry.names();
    if names.is_empty() {
        println!("  No rules registered.");
        return;
    }

    for name in names {
        println!("  {}", name);
    }
}
