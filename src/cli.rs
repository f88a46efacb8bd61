use hanfreq::Error;
use std::collections::HashMap;

pub struct ArgParser {
    args: Option<(ArgType, ArgCount)>,
    flags: Vec<Flag>,

    // `--limit=20`, `--limit 20`
    arg_flags: HashMap<String, ArgType>,
}

impl ArgParser {
    pub fn new() -> Self {
        ArgParser {
            args: None,
            flags: vec![],
            arg_flags: HashMap::new(),
        }
    }

    pub fn args(&mut self, arg_type: ArgType, arg_count: ArgCount) -> &mut Self {
        self.args = Some((arg_type, arg_count));
        self
    }

    // flags in the same group cannot be used together
    pub fn optional_flag(&mut self, flags: &[&str]) -> &mut Self {
        self.flags.push(Flag {
            values: flags.iter().map(|flag| flag.to_string()).collect(),
        });
        self
    }

    // arg flags are always optional
    pub fn arg_flag(&mut self, flag: &str, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(flag.to_string(), arg_type);
        self
    }

    pub fn parse(&self, raw_args: &[String]) -> Result<ParsedArgs, Error> {
        self.parse_worker(raw_args).map_err(
            |(message, span)| Error::CliError {
                message,
                span: Some(span.render(raw_args)),
            }
        )
    }

    fn parse_worker(&self, raw_args: &[String]) -> Result<ParsedArgs, (String, Span)> {
        let mut args = vec![];
        let mut flags = vec![None; self.flags.len()];
        let mut arg_flags = HashMap::new();
        let mut expecting_flag_arg: Option<(String, ArgType)> = None;

        if raw_args.get(0).map(|arg| arg.as_str()) == Some("--help") {
            return Ok(ParsedArgs {
                args,
                flags,
                arg_flags,
                show_help: true,
            });
        }

        'raw_arg_loop: for (arg_index, raw_arg) in raw_args.iter().enumerate() {
            if let Some((flag, arg_type)) = expecting_flag_arg.take() {
                let value = arg_type.parse(raw_arg).map_err(|e| (e, Span::Exact(arg_index)))?;
                insert_arg_flag(&mut arg_flags, &flag, value, arg_index)?;
                continue;
            }

            if raw_arg.starts_with("--") {
                for (flag_index, flag) in self.flags.iter().enumerate() {
                    if flag.values.contains(raw_arg) {
                        if let Some(prev) = &flags[flag_index] {
                            return Err((
                                if prev == raw_arg {
                                    format!("Flag `{raw_arg}` cannot be used multiple times.")
                                } else {
                                    format!("Flag `{prev}` and `{raw_arg}` cannot be used together.")
                                },
                                Span::Exact(arg_index),
                            ));
                        }

                        flags[flag_index] = Some(raw_arg.to_string());
                        continue 'raw_arg_loop;
                    }
                }

                if let Some(arg_type) = self.arg_flags.get(raw_arg) {
                    expecting_flag_arg = Some((raw_arg.to_string(), *arg_type));
                    continue;
                }

                if let Some((flag, value)) = raw_arg.split_once('=') {
                    if let Some(arg_type) = self.arg_flags.get(flag) {
                        let value = arg_type.parse(value).map_err(|e| (e, Span::Exact(arg_index)))?;
                        insert_arg_flag(&mut arg_flags, flag, value, arg_index)?;
                        continue;
                    }

                    return Err((format!("Unknown flag: `{flag}`."), Span::Exact(arg_index)));
                }

                return Err((format!("Unknown flag: `{raw_arg}`."), Span::Exact(arg_index)));
            }

            match self.args {
                Some((arg_type, _)) => {
                    args.push(arg_type.parse(raw_arg).map_err(|e| (e, Span::Exact(arg_index)))?);
                },
                None => {
                    return Err((String::from("Expected no arguments."), Span::Exact(arg_index)));
                },
            }
        }

        if let Some((flag, arg_type)) = expecting_flag_arg {
            return Err((
                format!("{arg_type:?} value is required for flag `{flag}`, but is missing."),
                Span::End,
            ));
        }

        if let Some((_, arg_count)) = self.args {
            let (ok, span) = match arg_count {
                ArgCount::Leq(n) => (args.len() <= n, Span::NthArg(n)),
                ArgCount::Exact(n) => (args.len() == n, if args.len() < n { Span::End } else { Span::NthArg(n) }),
            };

            if !ok {
                return Err((
                    format!(
                        "Expected {} arguments, got {} arguments.",
                        match arg_count {
                            ArgCount::Leq(n) => format!("at most {n}"),
                            ArgCount::Exact(n) => format!("exactly {n}"),
                        },
                        args.len(),
                    ),
                    span,
                ));
            }
        }

        Ok(ParsedArgs {
            args,
            flags,
            arg_flags,
            show_help: false,
        })
    }
}

fn insert_arg_flag(
    arg_flags: &mut HashMap<String, String>,
    flag: &str,
    value: String,
    arg_index: usize,
) -> Result<(), (String, Span)> {
    if arg_flags.insert(flag.to_string(), value).is_some() {
        return Err((
            format!("Flag `{flag}` cannot be used multiple times."),
            Span::Exact(arg_index),
        ));
    }

    Ok(())
}

#[derive(Clone, Copy, Debug)]
pub enum ArgCount {
    Leq(usize),
    Exact(usize),
}

#[derive(Clone, Copy, Debug)]
pub enum ArgType {
    String,
    Path,
    Integer,  // non-negative
}

impl ArgType {
    pub fn parse(&self, arg: &str) -> Result<String, String> {
        match self {
            ArgType::Integer => match arg.parse::<usize>() {
                Ok(_) => Ok(arg.to_string()),
                Err(_) => Err(format!("Cannot parse `{arg}` as a non-negative integer.")),
            },
            ArgType::String
            | ArgType::Path => Ok(arg.to_string()),
        }
    }
}

struct Flag {
    values: Vec<String>,
}

pub struct ParsedArgs {
    args: Vec<String>,
    flags: Vec<Option<String>>,
    arg_flags: HashMap<String, String>,
    show_help: bool,
}

impl ParsedArgs {
    pub fn get_args(&self) -> Vec<String> {
        self.args.clone()
    }

    // if there's an index error, it panics instead of returning None
    // if it returns None, that means Nth flag is not given
    pub fn get_flag(&self, index: usize) -> Option<String> {
        self.flags[index].clone()
    }

    pub fn get_arg_flag(&self, flag: &str) -> Option<String> {
        self.arg_flags.get(flag).cloned()
    }

    // `ArgType::Integer` is validated while parsing
    pub fn get_integer_flag(&self, flag: &str) -> Option<usize> {
        self.arg_flags.get(flag).and_then(|value| value.parse::<usize>().ok())
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }
}

#[derive(Clone, Debug)]
enum Span {
    Exact(usize),  // including flags and args
    End,
    NthArg(usize),  // including args, not including flags
}

impl Span {
    // (rendered args, start, end)
    fn render(&self, args: &[String]) -> (String, usize, usize) {
        let mut rendered_args = Vec::with_capacity(args.len());
        let mut arg_indices = vec![];

        for (index, arg) in args.iter().enumerate() {
            if !arg.starts_with("--") {
                arg_indices.push(index);
            }

            if arg.contains(" ") || arg.contains("\"") || arg.contains("'") || arg.contains("\n") {
                rendered_args.push(format!("{arg:?}"));
            }

            else {
                rendered_args.push(arg.to_string());
            }
        }

        let joined_args = rendered_args.join(" ");

        if joined_args.is_empty() {
            return (String::from(" "), 0, 1);
        }

        let selected_index = match self {
            Span::Exact(n) => *n,
            Span::NthArg(n) => arg_indices.get(*n).copied().unwrap_or(0),
            Span::End => {
                return (joined_args.clone(), joined_args.len() - 1, joined_args.len());
            },
        };
        let selected_index = selected_index.min(rendered_args.len() - 1);
        let start = rendered_args[..selected_index].iter().map(|arg| arg.len()).sum::<usize>() + selected_index;
        let end = start + rendered_args[selected_index].len();

        (joined_args, start, end)
    }
}

pub fn underline_span(prefix: &str, args: &str, start: usize, end: usize) -> String {
    format!(
        "{prefix}{args}\n{}{}{}",
        " ".repeat(prefix.len()),
        " ".repeat(start),
        "^".repeat(end - start),
    )
}
