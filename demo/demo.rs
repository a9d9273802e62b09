//! Interactive walk through every console helper.
//!
//! Usage:
//!   console_demo                      # defaults
//!   console_demo --color magenta      # change the system color
//!   console_demo --hide '#' --code 3  # mask char and exit code
//!
//! Diagnostics go to stderr, filtered by RUST_LOG:
//!   RUST_LOG=console_helpers=trace console_demo

use std::process;
use std::thread;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use console_helpers::settings::parse_color;
use console_helpers::{
    Color, ConsoleError, DEFAULT_HIDE_CHAR, Result, any_key_continue, close, enter_password,
    prevent_close, print_property, prompt_yes_no, set_system_color, system_write_line,
};

/// Exit status for Ctrl+C, matching a shell's SIGINT convention.
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug)]
struct Flags {
    help: bool,
    color: Option<Color>,
    hide: char,
    code: i32,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            help: false,
            color: None,
            hide: DEFAULT_HIDE_CHAR,
            code: 0,
        }
    }
}

#[derive(Debug)]
enum ParseError {
    UnknownColor(String),
    InvalidChar(String),
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownColor(s) => write!(f, "Unknown color: {}", s),
            ParseError::InvalidChar(s) => write!(f, "Expected a single character: {}", s),
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

fn parse(args: &[String]) -> std::result::Result<Flags, ParseError> {
    let mut flags = Flags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "--color" | "--hide" | "--code" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                match arg {
                    "--color" => {
                        flags.color = Some(
                            parse_color(value)
                                .ok_or_else(|| ParseError::UnknownColor(value.clone()))?,
                        );
                    }
                    "--hide" => {
                        let mut chars = value.chars();
                        flags.hide = match (chars.next(), chars.next()) {
                            (Some(c), None) => c,
                            _ => return Err(ParseError::InvalidChar(value.clone())),
                        };
                    }
                    _ => {
                        flags.code = value
                            .parse()
                            .map_err(|_| ParseError::InvalidNumber(value.clone()))?;
                    }
                }
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn print_help() {
    println!("console_demo [--color NAME] [--hide CHAR] [--code N]");
    println!();
    println!("  --color NAME   system color (dark_cyan, red, magenta, ...)");
    println!("  --hide CHAR    password mask character (default *)");
    println!("  --code N       exit code handed to the close latch (default 0)");
}

#[derive(Serialize)]
struct Session {
    user: String,
    password_len: usize,
    remember: bool,
    tags: Vec<&'static str>,
}

fn walkthrough(flags: &Flags) -> Result<()> {
    system_write_line("console-helpers demo")?;
    any_key_continue()?;

    print_property("Mask", Some(&flags.hide), false)?;
    print_property("Exit code", Some(&flags.code), false)?;
    print_property::<str>("Nothing", None, false)?;

    system_write_line("Password:")?;
    let password = enter_password(flags.hide)?;
    println!();

    let remember = prompt_yes_no("Remember this session?")?;
    let session = Session {
        user: std::env::var("USER").unwrap_or_else(|_| "unknown".to_string()),
        password_len: password.chars().count(),
        remember,
        tags: vec!["demo", "interactive"],
    };
    print_property("Session", Some(&session), false)?;
    print_property("Session (raw)", Some(&session), true)?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}");
            print_help();
            process::exit(2);
        }
    };

    if flags.help {
        print_help();
        return;
    }
    if let Some(color) = flags.color {
        set_system_color(color);
    }

    // The prompts run on a worker; main only parks until it says we are done.
    let code = flags.code;
    thread::spawn(move || match walkthrough(&flags) {
        Ok(()) => close(code),
        Err(ConsoleError::Interrupted) => {
            println!();
            close(EXIT_INTERRUPTED);
        }
        Err(err) => {
            eprintln!("demo failed: {err}");
            close(1);
        }
    });

    let code = prevent_close();
    tracing::debug!(code, "exiting");
    process::exit(code);
}
