//! Keccak-256 command-line hasher.
//!
//! Usage:
//!   keccak256 "hello world"
//!   echo -n "hello world" | keccak256
//!   keccak256 --raw --file message.bin > digest.bin

use std::{
  env,
  ffi::OsString,
  fmt, fs,
  io::{self, Read, Write},
  path::PathBuf,
  process::ExitCode,
};

use keccak256::{
  ArgumentError,
  binding::{HashOutput, Value, keccak_hash},
};

/// Exit code for malformed invocations.
const EXIT_USAGE: u8 = 2;

/// Where the message comes from.
#[derive(Debug)]
enum Input {
  /// Read standard input to the end.
  Stdin,
  /// Hash the bytes of a command-line argument, UTF-8 or not.
  Arg(OsString),
  /// Hash the contents of a file.
  File(PathBuf),
}

/// CLI arguments.
#[derive(Debug, Default)]
struct Args {
  /// Write the 32 raw digest bytes instead of hex.
  raw: bool,

  /// Report input size and mode on stderr.
  verbose: bool,

  /// Message source; stdin when absent.
  input: Option<Input>,

  /// Show help.
  help: bool,
}

/// Parse arguments, program name excluded.
fn parse_args(argv: impl IntoIterator<Item = OsString>) -> Result<Args, String> {
  let mut args = Args::default();
  let mut iter = argv.into_iter();
  let mut positional_only = false;

  while let Some(arg) = iter.next() {
    if positional_only {
      set_input(&mut args, Input::Arg(arg))?;
      continue;
    }
    match arg.to_str() {
      Some("--") => positional_only = true,
      Some("--raw" | "-r") => args.raw = true,
      Some("--verbose" | "-v") => args.verbose = true,
      Some("--help" | "-h") => args.help = true,
      Some("--file" | "-f") => {
        let Some(value) = iter.next() else {
          return Err("--file requires a path".to_string());
        };
        set_input(&mut args, Input::File(PathBuf::from(value)))?;
      }
      Some("-") => set_input(&mut args, Input::Stdin)?,
      _ if arg.as_encoded_bytes().starts_with(b"-") => {
        return Err(format!("Unknown argument: {}", arg.display()));
      }
      _ => set_input(&mut args, Input::Arg(arg))?,
    }
  }

  Ok(args)
}

fn set_input(args: &mut Args, input: Input) -> Result<(), String> {
  if args.input.is_some() {
    return Err("Only one input may be given".to_string());
  }
  args.input = Some(input);
  Ok(())
}

fn print_help() {
  eprintln!(
    "\
keccak256: Keccak-256 digest (original Keccak padding, as used by Ethereum)

USAGE:
    keccak256 [OPTIONS] [--] [DATA]

    With no DATA, or when DATA is -, the message is read from stdin.

OPTIONS:
    -r, --raw             Write the 32 raw digest bytes instead of 64 hex characters
    -f, --file PATH       Hash the contents of PATH
    -v, --verbose         Report input size and output mode on stderr
    -h, --help            Show this help message

EXAMPLES:
    keccak256 abc
    printf 'abc' | keccak256
    keccak256 --raw --file message.bin > digest.bin
"
  );
}

fn read_input(input: &Input) -> io::Result<Vec<u8>> {
  match input {
    Input::Stdin => {
      let mut buf = Vec::new();
      io::stdin().lock().read_to_end(&mut buf)?;
      Ok(buf)
    }
    Input::Arg(arg) => Ok(arg.as_encoded_bytes().to_vec()),
    Input::File(path) => fs::read(path),
  }
}

/// Failure while hashing.
#[derive(Debug)]
enum Error {
  Io(io::Error),
  Argument(ArgumentError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(err) => write!(f, "{err}"),
      Self::Argument(err) => write!(f, "keccak_hash() {err}"),
    }
  }
}

impl From<io::Error> for Error {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<ArgumentError> for Error {
  fn from(err: ArgumentError) -> Self {
    Self::Argument(err)
  }
}

fn run(args: &Args) -> Result<(), Error> {
  let stdin = Input::Stdin;
  let input = args.input.as_ref().unwrap_or(&stdin);
  let data = read_input(input)?;
  if args.verbose {
    eprintln!("Input: {input:?} ({} bytes)", data.len());
    eprintln!("Output: {}", if args.raw { "raw" } else { "hex" });
  }

  let output = keccak_hash(&[Value::Bytes(data), Value::Bool(args.raw)])?;

  let mut stdout = io::stdout().lock();
  match output {
    HashOutput::Raw(raw) => stdout.write_all(&raw)?,
    HashOutput::Hex(hex) => writeln!(stdout, "{hex}")?,
  }
  stdout.flush()?;
  Ok(())
}

fn main() -> ExitCode {
  let args = match parse_args(env::args_os().skip(1)) {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("Error: {msg}");
      eprintln!();
      print_help();
      return ExitCode::from(EXIT_USAGE);
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }

  match run(&args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err @ Error::Argument(_)) => {
      eprintln!("Error: {err}");
      eprintln!();
      print_help();
      ExitCode::from(EXIT_USAGE)
    }
    Err(err) => {
      eprintln!("Error: {err}");
      ExitCode::FAILURE
    }
  }
}
