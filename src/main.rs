//! Tessera CLI - resolve assets and render placeholders

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context as _;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use tessera::cli::{Args, SubCommand};
use tessera::{
    format_output, AssetFactory, Config, Container, OutputFormat, PlaceholderContainer, Registry,
    Report, ServiceManager,
};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let output_format = if args.json { OutputFormat::Json } else { OutputFormat::Human };

    let report = match args.command {
        SubCommand::Asset { name } => {
            let services = load_services(&args.config)?;
            let helper = AssetFactory::new().create(&services)?;
            let path = helper.resolve(&name)?;
            Report::Asset { name, path }
        }

        SubCommand::Assets => {
            let services = load_services(&args.config)?;
            let helper = AssetFactory::new().create(&services)?;
            Report::ResourceMap {
                resource_map: helper.resource_map().cloned(),
            }
        }

        SubCommand::Placeholder {
            key,
            values,
            separator,
            prefix,
            postfix,
            indent,
        } => {
            let fragments = values.into_iter().map(Value::String).collect();
            let mut placeholder = PlaceholderContainer::from_data(fragments);
            placeholder
                .set_separator(separator)
                .set_prefix(prefix)
                .set_postfix(postfix)
                .set_indent(indent);

            let mut registry = Registry::new();
            registry.set_container(&key, Rc::new(RefCell::new(placeholder)));

            let container = registry.get_container(&key, Vec::new());
            let container = container.borrow();
            Report::Placeholder {
                items: container.data().to_vec(),
                rendered: container.render(),
                key,
            }
        }
    };

    println!("{}", format_output(&report, &output_format));
    Ok(())
}

fn load_services(path: &Option<PathBuf>) -> anyhow::Result<ServiceManager> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::empty(),
    };
    Ok(ServiceManager::with_config(config))
}
