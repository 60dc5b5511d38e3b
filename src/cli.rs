use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "Browse a remote user directory sorted by last name", version)]
#[command(after_help = "EXAMPLES:
    userdir users                     List all users
    userdir users --search smith      Filter users by name
    userdir user view 3               Show the address of user 3
    userdir user view \"Xu, Cal\"       Show the address of a user by name")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress the loading indicator
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// User catalog URL (overrides USERDIR_ENDPOINT and the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse users
    #[command(
        alias = "u",
        after_help = "EXAMPLES:
    userdir user list
    userdir user list --search zed
    userdir user view 3"
    )]
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// List users (alias for 'user list')
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    userdir users
    userdir users --search \"(dr.)\"
    userdir users --format json"
    )]
    Users(UserListArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userdir completions bash > ~/.bash_completion.d/userdir
    userdir completions zsh > ~/.zfunc/_userdir
    userdir completions fish > ~/.config/fish/completions/userdir.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List users sorted by last name
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    userdir user list
    userdir user list --search smith"
    )]
    List(UserListArgs),
    /// View a user's address
    #[command(
        alias = "v",
        after_help = "EXAMPLES:
    userdir user view 3
    userdir user view graham"
    )]
    View(UserViewArgs),
}

#[derive(Args, Clone)]
pub struct UserListArgs {
    /// Only show users whose formatted name contains this text (case-insensitive)
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Args, Clone)]
pub struct UserViewArgs {
    /// User ID, or text that matches exactly one formatted name
    pub selector: String,
}
