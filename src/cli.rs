use crate::domain::constants::{APP_ADD, PROJECT_UPGRADE, SPO_CONNECT, SPO_DISCONNECT, SPO_STATUS};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

const APP_ADD_EXAMPLES: &str = "\
Examples:
  Add the spfx.sppkg package to the tenant app catalog
    o365 spo app add --file-path /Users/pnp/spfx/sharepoint/solution/spfx.sppkg

  Add the package and print the full catalog entry
    o365 spo app add --file-path ./sharepoint/solution/spfx.sppkg --output json";

const CONNECT_EXAMPLES: &str = "\
Examples:
  Connect to the tenant root site using a previously issued token
    o365 spo connect https://contoso.sharepoint.com --access-token eyJ0eX...

  Connect and read the token from O365_ACCESS_TOKEN at request time
    o365 spo connect https://contoso.sharepoint.com";

const UPGRADE_EXAMPLES: &str = "\
Examples:
  List the changes required to bring the project in the current folder up to date
    o365 spfx project upgrade

  Check a project elsewhere and print the findings as JSON
    o365 spfx project upgrade --project-dir ../my-webpart --output json";

#[derive(Parser, Debug)]
#[command(
    name = "o365",
    version,
    about = "Manage SharePoint Online and SharePoint Framework projects"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputMode::Text,
        help = "Output format"
    )]
    pub output: OutputMode,
    #[arg(long, global = true, help = "Print informational progress to stderr")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Print requests and responses to stderr")]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// SharePoint Online commands
    Spo {
        #[command(subcommand)]
        command: SpoCommands,
    },
    /// SharePoint Framework commands
    Spfx {
        #[command(subcommand)]
        command: SpfxCommands,
    },
}

impl Commands {
    /// Registry name of the leaf command, e.g. `spo app add`.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Spo { command } => match command {
                SpoCommands::Connect { .. } => SPO_CONNECT,
                SpoCommands::Disconnect => SPO_DISCONNECT,
                SpoCommands::Status => SPO_STATUS,
                SpoCommands::App {
                    command: AppCommands::Add { .. },
                } => APP_ADD,
            },
            Commands::Spfx {
                command:
                    SpfxCommands::Project {
                        command: ProjectCommands::Upgrade { .. },
                    },
            } => PROJECT_UPGRADE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SpoCommands {
    /// Connects to a SharePoint Online site
    #[command(after_help = CONNECT_EXAMPLES)]
    Connect {
        url: String,
        #[arg(long, help = "Bearer token to use for requests to the site")]
        access_token: Option<String>,
    },
    /// Disconnects from the previously connected SharePoint Online site
    Disconnect,
    /// Shows the SharePoint Online site the CLI is connected to
    Status,
    /// Manages apps in the tenant app catalog
    App {
        #[command(subcommand)]
        command: AppCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// Adds an app to the tenant app catalog
    #[command(after_help = APP_ADD_EXAMPLES)]
    Add {
        #[arg(long, help = "Absolute or relative path to the solution package to add")]
        file_path: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SpfxCommands {
    /// Manages SharePoint Framework projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Lists the changes required to upgrade a SharePoint Framework project
    #[command(after_help = UPGRADE_EXAMPLES)]
    Upgrade {
        #[arg(long, default_value = ".")]
        project_dir: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        self == OutputMode::Json
    }
}
