//! cp-cheatsheet CLI - writes the C++ CP/DSA cheat sheet PDF

use std::path::PathBuf;

use clap::Parser;

use cp_cheatsheet::types::{ BuildConfig, DocumentBuilder, Result };

#[derive(Parser)]
#[command(name = "cp-cheatsheet")]
#[command(version)]
#[command(about = "Render the C++ CP/DSA built-ins cheat sheet to PDF", long_about = None)]
struct Cli {
    /// JSON config file (output, font_dir, compress)
    #[arg(short, long, value_name = "FILE", env = "CP_CHEATSHEET_CONFIG")]
    config: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory searched for Segoe UI and Consolas
    #[arg(long, value_name = "DIR", env = "CP_CHEATSHEET_FONT_DIR")]
    font_dir: Option<PathBuf>,

    /// Write uncompressed streams
    #[arg(long)]
    no_compress: bool,

    /// Print the document elements as JSON instead of writing a PDF
    #[arg(long)]
    dump_elements: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// defaults, then the config file, then flags
    fn config(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => BuildConfig::from_file(path)?,
            None => BuildConfig::default(),
        };

        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        if let Some(font_dir) = &self.font_dir {
            config = config.with_font_dir(font_dir);
        }
        if self.no_compress {
            config = config.with_compression(false);
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let builder = DocumentBuilder::new(cli.config()?);

    if cli.dump_elements {
        println!("{}", builder.elements_json()?);
        return Ok(());
    }

    let output = builder.build()?;
    println!("Generated {}", output.display());

    Ok(())
}
