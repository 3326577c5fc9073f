use clap::{Parser, Subcommand, ValueEnum};
use site_estimator::{config, estimate, output, render, request};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "site-estimator")]
#[command(about = "Price and scope small-business website builds")]
#[command(long_about = "\
Price and scope small-business website builds

A quote request is a TOML file describing the build: project type, goal,
requested pages, design level, timeline, content readiness, and features.
The estimator normalizes the page count, picks a tier, applies add-ons and
modifiers, and prints a build sheet with price and week ranges.

  request.toml
  ├── [build]     required: what to build
  └── [details]   optional: client contact, framework, maintenance plan

Run 'site-estimator gen-request' for a documented sample request and
'site-estimator gen-config' for the studio config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing the studio config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Summary plus the plain-text build sheet
    Text,
    /// Serialized estimate
    Json,
    /// Standalone HTML quote page
    Html,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a quote for a request file
    Quote {
        /// Quote request TOML file
        request: PathBuf,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a request file and show how it normalizes
    Check {
        /// Quote request TOML file
        request: PathBuf,
    },
    /// List pricing tiers
    Tiers,
    /// List add-on features
    Addons,
    /// List maintenance plans
    Plans,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a documented sample request file
    GenRequest,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Quote {
            request: request_path,
            format,
            out,
        } => {
            let req = request::load_request(&request_path)?;
            let est = estimate::estimate(&req.build, req.details.as_ref());
            let rendered = match format {
                Format::Text => None,
                Format::Json => {
                    let doc = serde_json::json!({
                        "reference": req.reference(),
                        "estimate": est,
                    });
                    Some(serde_json::to_string_pretty(&doc)?)
                }
                Format::Html => {
                    let studio = config::load_config(&cli.config_dir)?;
                    Some(render::render_quote_page(&req, &est, &studio).into_string())
                }
            };
            match (out, rendered) {
                (Some(path), Some(body)) => {
                    std::fs::write(&path, body)?;
                    println!("Wrote {}", path.display());
                }
                (Some(path), None) => {
                    let mut body = output::format_quote_summary(&req, &est).join("\n");
                    body.push_str("\n\n");
                    body.push_str(&est.build_sheet_text);
                    std::fs::write(&path, body)?;
                    println!("Wrote {}", path.display());
                }
                (None, Some(body)) => println!("{}", body),
                (None, None) => output::print_quote(&req, &est),
            }
        }
        Command::Check {
            request: request_path,
        } => {
            println!("==> Checking {}", request_path.display());
            let req = request::load_request(&request_path)?;
            let est = estimate::estimate(&req.build, req.details.as_ref());
            output::print_check_output(&req, &est);
            println!("==> Request is valid");
        }
        Command::Tiers => output::print_lines(output::format_tiers()),
        Command::Addons => output::print_lines(output::format_addons()),
        Command::Plans => output::print_lines(output::format_plans()),
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenRequest => {
            print!("{}", request::sample_request_toml());
        }
    }

    Ok(())
}
