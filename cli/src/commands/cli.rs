use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
}

#[derive(Parser, Debug)]
#[command(
    name = "statefacts",
    version,
    about = "REST API for U.S. state reference data and fun facts"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default when no subcommand is given).
    Serve(ServeArgs),
    /// Print the bundled state reference data as JSON.
    States(StatesArgs),
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen address. Overrides `http_server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port. Overrides `http_server.port` and `PORT`.
    #[arg(long)]
    pub port: Option<u16>,

    /// Fact store provider. Overrides `store.provider`.
    #[arg(long, value_enum)]
    pub store: Option<StoreKind>,

    /// Collection file for the file store. Overrides `store.path`.
    #[arg(long)]
    pub store_path: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct StatesArgs {
    /// "true" for the contiguous 48, "false" for AK and HI only.
    #[arg(long)]
    pub contig: Option<String>,

    #[arg(long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["statefacts"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_serve_flags() {
        let args = Args::try_parse_from([
            "statefacts",
            "serve",
            "--port",
            "4000",
            "--store",
            "memory",
        ])
        .unwrap();
        match args.command {
            Some(Commands::Serve(serve)) => {
                assert_eq!(serve.port, Some(4000));
                assert_eq!(serve.store, Some(StoreKind::Memory));
                assert!(serve.host.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_states_flags() {
        let args =
            Args::try_parse_from(["statefacts", "states", "--contig", "false", "--pretty"]).unwrap();
        match args.command {
            Some(Commands::States(states)) => {
                assert_eq!(states.contig.as_deref(), Some("false"));
                assert!(states.pretty);
            }
            other => panic!("expected states, got {other:?}"),
        }
    }
}
