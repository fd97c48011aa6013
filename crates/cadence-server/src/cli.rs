use clap::{Parser, Subcommand};

/// Cadence: a personal task scheduler with recurring due dates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),
    /// Print the next due date for a recurrence rule
    NextDate(NextDateCommand),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct ServeCommand {
    /// Port to listen on (overrides TODO_PORT and the config file)
    #[clap(short, long)]
    pub port: Option<u16>,
    /// Path of the SQLite database file (overrides TODO_DBFILE)
    #[clap(long)]
    pub db: Option<String>,
    /// Directory with the static web front end
    #[clap(long)]
    pub web_dir: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct NextDateCommand {
    /// The previously scheduled date (YYYYMMDD)
    #[clap(short, long)]
    pub date: String,
    /// The recurrence rule, e.g. "d 7", "y", "w 1,3", "m 1,-1 2,8"
    #[clap(short, long, allow_hyphen_values = true)]
    pub repeat: String,
    /// Reference date (YYYYMMDD); defaults to today
    #[clap(short, long)]
    pub now: Option<String>,
}
