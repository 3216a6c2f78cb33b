use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sasta_normalizer::Normalizer;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Snippet files to check
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let normalizer = Normalizer::new();
    let mut problem_count = 0;

    for input in &args.inputs {
        if !input.is_file() {
            return Err(anyhow!("Input file does not exist: {}", input.display()));
        }
        let source = fs::read_to_string(input)?;
        let module = normalizer.normalize(&source);

        match &module.diagnostic {
            Some(diagnostic) => {
                problem_count += 1;
                println!("  {} {} - {}", "✗".red(), input.display(), diagnostic.red());
            }
            None => {
                println!("  {} {}", "✓".green(), input.display());
            }
        }
    }

    println!();
    if problem_count == 0 {
        println!(
            "{} {} snippets normalize cleanly",
            "✅".green(),
            args.inputs.len()
        );
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} snippets need attention",
            problem_count,
            args.inputs.len()
        ))
    }
}
