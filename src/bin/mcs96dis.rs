use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mcs96_disasm::config::{parse_address, DisasmConfig};
use mcs96_disasm::format::OutputFormat;
use mcs96_disasm::strategy::Strategy;
use mcs96_disasm::{disassemble, Address};

#[derive(Parser, Debug)]
#[command(name = "mcs96dis")]
#[command(about = "Disassembler for Intel MCS-96 (8096/80C196) ROM images", long_about = None)]
struct Args {
    /// Raw ROM image to disassemble
    image: PathBuf,

    /// Address of the first image byte (hex with 0x, or decimal)
    #[arg(long, value_parser = parse_address)]
    base: Option<Address>,

    /// Start address for recursive descent
    #[arg(long, value_parser = parse_address)]
    entry: Option<Address>,

    /// Disassembly strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Annotate special-function registers
    #[arg(long, action = ArgAction::SetTrue)]
    names: bool,

    /// JSON configuration file; flags given on the command line win
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> Result<DisasmConfig> {
        let mut config = match &self.config {
            Some(path) => DisasmConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => DisasmConfig::default(),
        };
        if let Some(base) = self.base {
            config.base_address = base;
        }
        if self.entry.is_some() {
            config.entry_point = self.entry;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.register_names |= self.names;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config()?;

    let image = std::fs::read(&args.image)
        .with_context(|| format!("reading image {}", args.image.display()))?;
    let disassembly = disassemble(&image, &config).context("disassembly failed")?;

    let output = config
        .format
        .get_formatter()
        .format(&disassembly, config.base_address)
        .context("formatting output")?;
    print!("{}", output);
    Ok(())
}
