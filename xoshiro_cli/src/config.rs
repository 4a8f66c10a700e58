// Sampling configuration for the `rngen` binary.
//
// `GenerateConfig` can be loaded from a JSON file (`--config path`). Every
// field has a default, so a config file only needs the keys it changes.
// Command-line flags are applied on top of the file, regardless of the order
// they appear in. Parsing uses plain `std::env::args()` matching, with no
// clap dependency.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// What kind of value to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    U64,
    U32,
    I32,
    I64,
    F64,
    F32,
    Bool,
    Bytes,
}

impl ValueKind {
    /// Integer kinds accept `bound` / `min` + `max`.
    pub fn is_bounded_integer(self) -> bool {
        matches!(self, ValueKind::I32 | ValueKind::I64)
    }
}

impl FromStr for ValueKind {
    type Err = CliError;

    fn from_str(s: &str) -> CliResult<Self> {
        match s {
            "u64" => Ok(ValueKind::U64),
            "u32" => Ok(ValueKind::U32),
            "i32" => Ok(ValueKind::I32),
            "i64" => Ok(ValueKind::I64),
            "f64" => Ok(ValueKind::F64),
            "f32" => Ok(ValueKind::F32),
            "bool" => Ok(ValueKind::Bool),
            "bytes" => Ok(ValueKind::Bytes),
            other => Err(CliError::Args(format!("unknown kind '{other}'"))),
        }
    }
}

/// All knobs for one `rngen` run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub kind: ValueKind,
    /// Number of values (or byte buffers) to draw.
    pub count: usize,
    /// Exclusive upper bound for `i32` / `i64`, lower bound 0.
    pub bound: Option<i64>,
    /// Inclusive lower bound; requires `max`.
    pub min: Option<i64>,
    /// Exclusive upper bound; requires `min`.
    pub max: Option<i64>,
    /// Buffer length for `bytes`.
    pub len: usize,
    /// Reproducible seed. `None` uses the entropy-seeded default engine.
    pub seed: Option<u64>,
    /// Emit a JSON report instead of one value per line.
    pub json: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            kind: ValueKind::U64,
            count: 10,
            bound: None,
            min: None,
            max: None,
            len: 16,
            seed: None,
            json: false,
        }
    }
}

impl GenerateConfig {
    pub fn from_json(json: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_json(&text)
    }

    /// Reject flag combinations that cannot be honored.
    ///
    /// Range preconditions themselves (negative bound, `min > max`) are left
    /// to the engine so they surface as `RngError`s.
    pub fn validate(&self) -> CliResult<()> {
        let has_range = self.min.is_some() || self.max.is_some();
        if !self.kind.is_bounded_integer() && (self.bound.is_some() || has_range) {
            return Err(CliError::Args(format!(
                "--bound/--min/--max only apply to i32 and i64, not {:?}",
                self.kind
            )));
        }
        if self.bound.is_some() && has_range {
            return Err(CliError::Args(
                "--bound cannot be combined with --min/--max".into(),
            ));
        }
        if self.min.is_some() != self.max.is_some() {
            return Err(CliError::Args("--min and --max must be given together".into()));
        }
        if self.kind == ValueKind::I32 {
            for v in [self.bound, self.min, self.max].into_iter().flatten() {
                if i32::try_from(v).is_err() {
                    return Err(CliError::Args(format!("{v} does not fit in i32")));
                }
            }
        }
        Ok(())
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(GenerateConfig),
    Help,
}

/// Flags seen on the command line, applied on top of the config file.
#[derive(Default)]
struct Overrides {
    config: Option<String>,
    kind: Option<ValueKind>,
    count: Option<usize>,
    bound: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
    len: Option<usize>,
    seed: Option<u64>,
    json: bool,
}

impl Overrides {
    fn apply(self, config: &mut GenerateConfig) {
        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if self.bound.is_some() {
            config.bound = self.bound;
        }
        if self.min.is_some() {
            config.min = self.min;
        }
        if self.max.is_some() {
            config.max = self.max;
        }
        if let Some(len) = self.len {
            config.len = len;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.json |= self.json;
    }
}

/// Parse `args` (without the program name) into a `Command`.
pub fn parse_args(args: &[String]) -> CliResult<Command> {
    let mut flags = Overrides::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if flags.config.is_some() {
                    return Err(CliError::Args("--config given more than once".into()));
                }
                flags.config = Some(required(args, i, "--config")?.to_string());
            }
            "--kind" => {
                i += 1;
                flags.kind = Some(required(args, i, "--kind")?.parse()?);
            }
            "--count" => {
                i += 1;
                flags.count = Some(parse_number(args, i, "--count")?);
            }
            "--bound" => {
                i += 1;
                flags.bound = Some(parse_number(args, i, "--bound")?);
            }
            "--min" => {
                i += 1;
                flags.min = Some(parse_number(args, i, "--min")?);
            }
            "--max" => {
                i += 1;
                flags.max = Some(parse_number(args, i, "--max")?);
            }
            "--len" => {
                i += 1;
                flags.len = Some(parse_number(args, i, "--len")?);
            }
            "--seed" => {
                i += 1;
                flags.seed = Some(parse_number(args, i, "--seed")?);
            }
            "--json" => flags.json = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(CliError::Args(format!("unknown argument: {other}"))),
        }
        i += 1;
    }

    // The config file is the base layer; flags win regardless of order.
    let mut config = match flags.config.take() {
        Some(path) => GenerateConfig::load(Path::new(&path))?,
        None => GenerateConfig::default(),
    };
    flags.apply(&mut config);

    config.validate()?;
    Ok(Command::Run(config))
}

fn required<'a>(args: &'a [String], i: usize, flag: &str) -> CliResult<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| CliError::Args(format!("{flag} requires a value")))
}

fn parse_number<T: FromStr>(args: &[String], i: usize, flag: &str) -> CliResult<T> {
    required(args, i, flag)?
        .parse()
        .map_err(|_| CliError::Args(format!("{flag} requires a valid number")))
}

pub fn usage() -> &'static str {
    "Usage: rngen [OPTIONS]

Options:
  --kind <KIND>       u64 | u32 | i32 | i64 | f64 | f32 | bool | bytes (default: u64)
  --count <N>         Number of values to draw (default: 10)
  --bound <N>         Draw i32/i64 values in [0, N)
  --min <N> --max <M> Draw i32/i64 values in [N, M)
  --len <L>           Byte buffer length for --kind bytes (default: 16)
  --seed <N>          Reproducible seeded engine (default: entropy-seeded xoshiro256**)
  --json              Emit a JSON report
  --config <FILE>     Load defaults from a JSON config file
  --help, -h          Show this help

Logging goes to stderr; set RUST_LOG (e.g. RUST_LOG=debug) for more detail."
}
