use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sasta_normalizer::Normalizer;
use sasta_styles::{build_style_sheet, PreviewTheme};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Snippet file to normalize
    pub input: PathBuf,

    /// Optional custom style sheet to include
    #[arg(short, long)]
    pub styles: Option<PathBuf>,

    /// Preview theme (light, dark, custom)
    #[arg(short, long, default_value = "light")]
    pub theme: String,

    /// Also print the injected style sheet
    #[arg(long)]
    pub css: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct NormalizeReport {
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    css: Option<String>,
}

pub fn normalize(args: NormalizeArgs) -> Result<()> {
    if !args.input.is_file() {
        return Err(anyhow!("Input file does not exist: {}", args.input.display()));
    }
    let source = fs::read_to_string(&args.input)?;
    let custom_styles = match &args.styles {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    let module = Normalizer::new().normalize(&source);
    let theme = PreviewTheme::from_name(&args.theme);
    let css = args
        .css
        .then(|| build_style_sheet(theme, &custom_styles));

    if args.json {
        let report = NormalizeReport {
            code: module.code,
            diagnostic: module.diagnostic,
            css,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", module.code);
    if let Some(css) = css {
        println!();
        println!("{}", "/* injected styles */".dimmed());
        println!("{}", css);
    }
    if let Some(diagnostic) = &module.diagnostic {
        eprintln!();
        eprintln!("{} {}", "⚠".yellow(), diagnostic.yellow());
    }

    Ok(())
}
