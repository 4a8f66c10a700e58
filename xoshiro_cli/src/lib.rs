// xoshiro_cli — command-line sampler for `xoshiro_rng`.
//
// Module overview:
// - `config.rs`: GenerateConfig (JSON file + flag overrides) and the
//                hand-rolled argument parser.
// - `sample.rs`: Engine construction, value drawing, text/JSON rendering.
// - `error.rs`:  CliError.
//
// With no `--seed` the run uses the entropy-seeded xoshiro256** engine, so
// output differs every time; `--seed N` switches to the reproducible engine.

pub mod config;
pub mod error;
pub mod sample;

pub use config::{Command, GenerateConfig, ValueKind, parse_args};
pub use error::{CliError, CliResult};
pub use sample::{Report, Sample, build_rng, generate};

/// Parse arguments, draw, and render. Returns the text to print.
pub fn run(args: &[String]) -> CliResult<String> {
    let config = match parse_args(args)? {
        Command::Run(config) => config,
        Command::Help => return Ok(format!("{}\n", config::usage())),
    };
    let mut rng = build_rng(&config)?;
    let report = generate(&config, &mut rng)?;
    report.render(config.json)
}
