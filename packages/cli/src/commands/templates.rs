use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sasta_playground::{builtin_templates, template_named};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Print the source of one template instead of listing all names
    #[arg(short, long)]
    pub show: Option<String>,
}

pub fn templates(args: TemplatesArgs) -> Result<()> {
    if let Some(name) = &args.show {
        let template = template_named(name)
            .ok_or_else(|| anyhow!("No template named {:?}", name))?;
        println!("{}", template.source);
        return Ok(());
    }

    println!("{}", "Built-in templates:".bold());
    for template in builtin_templates() {
        println!("  {} {}", "•".blue(), template.name);
    }
    Ok(())
}
