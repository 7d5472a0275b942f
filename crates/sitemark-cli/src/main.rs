use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sitemark::MarkdownService;
use sitemark_cli::{build_site, SiteConfig};

#[derive(Parser)]
#[command(name = "sitemark")]
#[command(about = "Generate a static HTML site from Markdown", version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site from a content directory
    Build {
        /// Config file
        #[arg(short, long, default_value = "sitemark.toml")]
        config: PathBuf,

        /// Directory of Markdown pages
        #[arg(long)]
        content: Option<PathBuf>,

        /// Directory of static assets
        #[arg(long = "static")]
        static_dir: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// HTML template
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// Render one Markdown file to stdout
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// HTML template; without one only the content fragment is printed
        #[arg(short, long)]
        template: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let service = MarkdownService::new();

    match cli.command {
        Command::Build {
            config,
            content,
            static_dir,
            output,
            template,
        } => {
            let mut site = SiteConfig::load(&config)?;
            if let Some(content) = content {
                site.content_dir = content;
            }
            if let Some(static_dir) = static_dir {
                site.static_dir = static_dir;
            }
            if let Some(output) = output {
                site.output_dir = output;
            }
            if let Some(template) = template {
                site.template = template;
            }

            let report = build_site(&site, &service)?;
            println!(
                "Created {} pages in {}",
                report.pages.len(),
                site.output_dir.display()
            );
        }

        Command::Render { input, template } => {
            let markdown = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;

            let html = match template {
                Some(template) => {
                    let template = fs::read_to_string(&template)
                        .with_context(|| format!("reading {}", template.display()))?;
                    service.render_page(&markdown, &template)?
                }
                None => service.render_content(&markdown)?,
            };
            println!("{html}");
        }
    }

    Ok(())
}
