use hanfreq::{
    Config,
    Error,
    Mode,
    VERSION,
    analyze_bytes,
    get_build_options,
    read_bytes,
    render_records,
    set_log_file_path,
    write_log,
};
use std::env;
use std::io::Read;

mod cli;
use cli::{
    ArgCount,
    ArgParser,
    ArgType,
    underline_span,
};

fn main() {
    let args = env::args().collect::<Vec<_>>();

    match run(args) {
        Ok(()) => {},
        Err(e) => {
            match e {
                Error::CliError { message, span } => {
                    eprintln!("cli error: {message}");

                    if let Some((args, start, end)) = span {
                        eprintln!("\n{}", underline_span("hanfreq ", &args, start, end));
                    }
                },
                Error::InvalidMode(mode) => {
                    eprintln!("{mode:?} is not a valid mode. Valid modes are `hangul-only` and `permissive`.");
                },
                Error::FileError(e) => {
                    eprintln!("{}", e.render_error());
                },
                e => {
                    eprintln!("{e:?}");
                },
            }

            std::process::exit(1);
        },
    }
}

fn run(args: Vec<String>) -> Result<(), Error> {
    match args.get(1).map(|arg| arg.as_str()) {
        Some("analyze") => {
            let parsed_args = ArgParser::new()
                .optional_flag(&["--hangul-only", "--permissive"])
                .optional_flag(&["--json"])
                .arg_flag("--limit", ArgType::Integer)
                .arg_flag("--config", ArgType::Path)
                .arg_flag("--log", ArgType::Path)
                .arg_flag("--mode", ArgType::String)
                .args(ArgType::Path, ArgCount::Leq(1))
                .parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/analyze.txt"));
                return Ok(());
            }

            let mut config = match parsed_args.get_arg_flag("--config") {
                Some(path) => Config::load_from_file(&path)?,
                None => Config::default(),
            };

            if let Some(mode) = parsed_args.get_arg_flag("--mode") {
                config.mode = mode.parse::<Mode>()?;
            }

            if let Some(mode) = parsed_args.get_flag(0).and_then(|flag| Mode::parse_flag(&flag)) {
                config.mode = mode;
            }

            if parsed_args.get_flag(1).is_some() {
                config.json = true;
            }

            if let Some(limit) = parsed_args.get_integer_flag("--limit") {
                config.limit = Some(limit);
            }

            if let Some(path) = parsed_args.get_arg_flag("--log") {
                config.log_file = Some(path);
            }

            set_log_file_path(config.log_file.clone());

            let input = match parsed_args.get_args().get(0) {
                Some(path) => {
                    write_log("run", &format!("hanfreq analyze {path:?}, mode: {}", config.mode));
                    read_bytes(path)?
                },
                None => {
                    write_log("run", &format!("hanfreq analyze <stdin>, mode: {}", config.mode));
                    let mut bytes = vec![];
                    std::io::stdin().read_to_end(&mut bytes)?;
                    bytes
                },
            };

            let mut records = analyze_bytes(&input, config.mode);

            if let Some(limit) = config.limit {
                records.truncate(limit);
            }

            if config.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            }

            else if !records.is_empty() {
                println!("{}", render_records(&records));
            }
        },
        Some("version") => {
            let parsed_args = ArgParser::new().optional_flag(&["--build-options"]).args(ArgType::String, ArgCount::Exact(0)).parse(&args[2..])?;

            if parsed_args.show_help() {
                println!("{}", include_str!("../docs/commands/version.txt"));
                return Ok(());
            }

            if parsed_args.get_flag(0).is_some() {
                println!("{}", serde_json::to_string_pretty(&get_build_options())?);
            }

            else {
                println!("hanfreq {VERSION}");
            }
        },
        Some("help") | Some("--help") | None => {
            println!("{}", include_str!("../docs/commands/general.txt"));
        },
        Some(command) => {
            return Err(Error::CliError {
                message: format!("`{command}` is not a valid command. Run `hanfreq help` to see the commands."),
                span: None,
            });
        },
    }

    Ok(())
}
