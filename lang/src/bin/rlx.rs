use std::io::Read;
use std::path::{Path, PathBuf};

use runelex::toolchain::diagnostics::{
    console_diagnostic_consumer, Cause, DiagnosticConsumer, Error, ErrorCode,
};
use runelex::toolchain::json;
use runelex::toolchain::scanner::{ScanConfig, TokenizedBuffer};
use runelex::toolchain::source::SourceBuffer;

const HELP: &str = "\
    rlx - scan a JSON document into tokens

    USAGE:
        rlx [--halt] [--max-errors N] [--output FILE] [--quiet] FILENAME

    OPTIONS:
        --halt              Stop at the first scanning error instead of skipping past it.
        --max-errors N      Stop after N scanning errors.
        --output FILE       Write the token listing to FILE instead of stdout.
        --quiet             If present, all non-error output is suppressed.

    ARGS:
        FILENAME            The path to the file to scan, or supply '-' to take input
                            from stdin.
";

#[derive(Debug, Eq, PartialEq)]
struct RlxArgs {
    halt: bool,
    max_errors: Option<usize>,
    output: Option<PathBuf>,
    quiet: bool,
    source_file: PathBuf,
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let mut diags = console_diagnostic_consumer();
    let source = match load_source(&args.source_file) {
        Ok(source) => source,
        Err(error) => {
            diags.handle_error(&error);
            diags.flush();
            std::process::exit(1);
        }
    };

    let config = if args.halt {
        ScanConfig { max_errors: args.max_errors, ..ScanConfig::halting() }
    } else {
        ScanConfig::recovering(args.max_errors)
    };
    let tb = TokenizedBuffer::tokenize(&source, json::scan, &config, &mut diags);

    if let Some(path) = &args.output {
        let written = std::fs::File::create(path)
            .and_then(|mut file| tb.write_tokens(&mut file))
            .map_err(|source| {
                Error::input(ErrorCode::CouldNotCreateFile, Cause::Io { path: path.clone(), source })
            });
        if let Err(error) = written {
            diags.handle_error(&error);
            diags.flush();
            std::process::exit(1);
        }
    } else if !args.quiet {
        println!("TokenizedBuffer [");
        tb.print_tokens();
        println!("]");
    }

    if tb.has_errors() {
        std::process::exit(1);
    }
}

fn load_source(path: &Path) -> Result<SourceBuffer<'static>, Error> {
    if path.as_os_str() != "-" {
        return SourceBuffer::new_from_file(path);
    }
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes).map_err(|source| {
        Error::input(ErrorCode::FileNotFound, Cause::Io { path: path.to_path_buf(), source })
    })?;
    Ok(SourceBuffer::new_from_bytes(&bytes, "<stdin>"))
}

fn parse_args() -> Result<RlxArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = RlxArgs {
        halt: pargs.contains("--halt"),
        max_errors: pargs.opt_value_from_str("--max-errors")?,
        output: pargs.opt_value_from_str("--output")?,
        quiet: pargs.contains("--quiet"),
        source_file: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(args)
}
