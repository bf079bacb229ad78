use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use ksctl::clap_parser::Args;
use ksctl::configuration::{ConfigurationManager, SandboxUserConfig, config_file_flag};
use log::{debug, info};
use prettytable::{Table, row};
use std::process;

const PRODUCT_NAME: &str = "ksctl";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(args).await {
        eprintln!("{}", format!("{err:#}").red());
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    if let Some(config) = &args.config {
        config_file_flag::set(config.as_str());
    }

    print_separator();
    print_header();
    print_separator();

    let mut configuration_manager = ConfigurationManager::from_config_file_flag()?;
    info!(
        "using config file: {}",
        configuration_manager.config_file_name().display()
    );
    configuration_manager.load_config_from_file().await?;
    println!(
        "{}",
        format!(
            "Loading config file: {} ... DONE",
            configuration_manager.config_file_name().display()
        )
        .green()
    );
    print_separator();

    print_clusters(configuration_manager.get_sandbox_user_config()?);

    if let Some(cluster_name) = &args.cluster_name {
        let cluster_config = configuration_manager.get_cluster_config(cluster_name)?;
        debug!("resolved {}", cluster_config);
        print_separator();
        println!("{}", cluster_config.get_server_param());
    }

    Ok(())
}

fn print_header() {
    let version = format!("{} version {}", PRODUCT_NAME, VERSION).red().bold();
    println!("{}", version);
}

fn print_separator() {
    let template = "*";
    let n = 80;
    let repeated_string = template.repeat(n);
    println!("{}", repeated_string);
}

fn print_clusters(sandbox_user_config: &SandboxUserConfig) {
    println!("User: {}", sandbox_user_config.name.bold());

    let mut table = Table::new();
    table.set_titles(row!["NAME", "TYPE", "SERVER API", "SERVER NAME", "TOKEN"]);
    for (cluster_name, definition) in &sandbox_user_config.cluster_access_definitions {
        let token = if definition.token.is_empty() {
            "<missing>"
        } else {
            "********"
        };
        table.add_row(row![
            cluster_name,
            definition.cluster_type,
            definition.server_api,
            definition.server_name,
            token
        ]);
    }
    table.printstd();
}
