use clap::Parser;
use notesapp::config::NotesConfig;
use notesapp::error::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notes", bin_name = "notes", version)]
#[command(about = "Serve the notes REST API", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./notes.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file holding the notes
    #[arg(long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loaded configuration with command-line overrides applied last.
    pub fn resolve_config(&self) -> Result<NotesConfig> {
        let mut config = NotesConfig::load(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut NotesConfig) {
        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
