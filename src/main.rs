use anyhow::{bail, Context};
use std::path::PathBuf;
use tracing::info;
use wallkit::{
    init_logging, DesignerConfig, DesignerState, Lineweight, SettingsPersistence, BUILD_DATE,
    VERSION,
};

const USAGE: &str = "Usage: wallkit <walls.json> [--config <file>] [--lineweight <name>]";

struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    lineweight: Option<Lineweight>,
}

enum Command {
    Run(Args),
    Help,
    Version,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let mut input = None;
    let mut config = None;
    let mut lineweight = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--config" => {
                let value = args.next().context("--config needs a file path")?;
                config = Some(PathBuf::from(value));
            }
            "--lineweight" => {
                let value = args.next().context("--lineweight needs a name")?;
                let parsed = value.parse::<Lineweight>().map_err(anyhow::Error::msg)?;
                lineweight = Some(parsed);
            }
            flag if flag.starts_with("--") => bail!("Unknown option {}\n{}", flag, USAGE),
            path => {
                if input.replace(PathBuf::from(path)).is_some() {
                    bail!("Only one input file is supported\n{}", USAGE);
                }
            }
        }
    }

    let input = input.with_context(|| format!("Missing input file\n{}", USAGE))?;
    Ok(Command::Run(Args {
        input,
        config,
        lineweight,
    }))
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => DesignerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => {
            let settings = SettingsPersistence::open_default()?;
            info!("Using settings from {}", settings.path().display());
            settings.into_config()
        }
    };

    let mut state = DesignerState::with_config(config);
    if let Some(lineweight) = args.lineweight {
        state.set_current_lineweight(lineweight);
    }

    let count = state
        .load_walls_file(&args.input)
        .with_context(|| format!("Failed to import {}", args.input.display()))?;
    info!("Loaded {} walls from {}", count, args.input.display());

    let document = state.export_document();
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    match parse_args(std::env::args().skip(1))? {
        Command::Help => println!("{}", USAGE),
        Command::Version => println!("wallkit {} (built {})", VERSION, BUILD_DATE),
        Command::Run(args) => run(args)?,
    }
    Ok(())
}
