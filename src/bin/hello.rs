//! `hello`: print a greeting for the given input.

use clap::Parser;

/// Greets whatever you pass it.
///
/// Every argument is taken literally (no `--help`); only the first is used.
#[derive(Parser, Debug)]
#[command(name = "hello", disable_help_flag = true)]
struct HelloArgs {
    /// Text to greet, followed by anything else (ignored).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    words: Vec<String>,
}

impl HelloArgs {
    fn input(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

fn greeting(input: Option<&str>) -> String {
    match input {
        Some(input) => format!("hello {}", input),
        None => "Please provide a string as input".to_string(),
    }
}

fn main() {
    let args = HelloArgs::parse();
    println!("{}", greeting(args.input()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_input() {
        assert_eq!(greeting(Some("world")), "hello world");
    }

    #[test]
    fn asks_for_input_when_missing() {
        assert_eq!(greeting(None), "Please provide a string as input");
    }

    #[test]
    fn empty_string_is_still_greeted() {
        let args = HelloArgs::try_parse_from(["hello", ""]).unwrap();
        assert_eq!(greeting(args.input()), "hello ");
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let args = HelloArgs::try_parse_from(["hello", "a", "b"]).unwrap();
        assert_eq!(greeting(args.input()), "hello a");
    }

    #[test]
    fn dash_prefixed_input_is_greeted() {
        for input in ["-x", "--name", "--help"] {
            let args = HelloArgs::try_parse_from(["hello", input]).unwrap();
            assert_eq!(greeting(args.input()), format!("hello {}", input));
        }
    }

    #[test]
    fn no_arguments_parse_to_none() {
        let args = HelloArgs::try_parse_from(["hello"]).unwrap();
        assert_eq!(args.input(), None);
    }
}
