use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "ksctl cluster access tool")]
pub struct Args {
    /// Config file to use, defaults to ~/.ksctl.yaml
    #[arg(long, short)]
    pub config: Option<String>,
    /// Cluster to resolve from the config file
    #[arg(long, short = 'n')]
    pub cluster_name: Option<String>,
    #[arg(long, short)]
    pub verbose: bool,
}
