//! CLI commands and argument parsing

use crate::models::UserQuery;
use crate::output::OutputFormat;
use crate::service::EventFilter;
use clap::{Args, Parser, Subcommand};

/// OneLogin CLI tool
#[derive(Parser, Debug)]
#[command(name = "onecli")]
#[command(author, version, about, long_about = "A CLI tool for interacting with the OneLogin API")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// App management commands
    App {
        #[command(subcommand)]
        command: AppCommands,
    },

    /// Event commands
    #[command(visible_alias = "ev")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },

    /// Print the version number of onecli
    Version,
}

/// `user` subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users
    #[command(visible_aliases = ["ls", "l"])]
    List {
        #[command(flatten)]
        filter: UserFilterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Change the email address of exactly one user
    ModifyEmail {
        /// New email address
        new_email: String,

        #[command(flatten)]
        filter: UserFilterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create and activate a user
    Create {
        /// First name
        firstname: String,

        /// Last name
        lastname: String,

        /// Email address
        email: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// `app` subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// List apps
    #[command(visible_aliases = ["ls", "l"])]
    List {
        /// Filter apps by name
        #[arg(long)]
        name: Option<String>,

        /// Include the users of each app
        #[arg(long)]
        detail: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the users of an app
    #[command(visible_aliases = ["users", "lu"])]
    ListUsers {
        /// App id
        app_id: i64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// `event` subcommands
#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// List events
    #[command(visible_aliases = ["ls", "l"])]
    List {
        #[command(flatten)]
        filter: EventFilterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List event types
    #[command(visible_aliases = ["t", "type"])]
    Types {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output format selection
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,
}

/// User search filters
#[derive(Args, Debug, Clone, Default)]
pub struct UserFilterArgs {
    /// Filter by email
    #[arg(long)]
    pub email: Option<String>,

    /// Filter by username
    #[arg(long)]
    pub username: Option<String>,

    /// Filter by first name
    #[arg(long)]
    pub firstname: Option<String>,

    /// Filter by last name
    #[arg(long)]
    pub lastname: Option<String>,

    /// Filter by user id (comma-separated for several)
    #[arg(long)]
    pub id: Option<String>,
}

impl From<UserFilterArgs> for UserQuery {
    fn from(args: UserFilterArgs) -> Self {
        Self {
            email: args.email,
            username: args.username,
            firstname: args.firstname,
            lastname: args.lastname,
            id: args.id,
        }
    }
}

/// Event search filters
#[derive(Args, Debug, Clone, Default)]
pub struct EventFilterArgs {
    /// Filter by client id
    #[arg(long)]
    pub client_id: Option<String>,

    /// Filter by creation time
    #[arg(long)]
    pub created_at: Option<String>,

    /// Filter by directory id
    #[arg(long)]
    pub directory_id: Option<String>,

    /// Filter by event type names (comma-separated)
    #[arg(long = "type")]
    pub event_type: Option<String>,

    /// Filter by event type ids (comma-separated)
    #[arg(long = "type-id")]
    pub event_type_id: Option<String>,

    /// Filter by resolution
    #[arg(long)]
    pub resolution: Option<String>,

    /// Filter by event id
    #[arg(long)]
    pub id: Option<String>,

    /// Events created at or after this time
    #[arg(long)]
    pub since: Option<String>,

    /// Events created before this time
    #[arg(long)]
    pub until: Option<String>,

    /// Filter by user id
    #[arg(long)]
    pub user_id: Option<String>,
}

impl From<EventFilterArgs> for EventFilter {
    fn from(args: EventFilterArgs) -> Self {
        Self {
            client_id: args.client_id,
            created_at: args.created_at,
            directory_id: args.directory_id,
            event_type: args.event_type,
            event_type_id: args.event_type_id,
            resolution: args.resolution,
            id: args.id,
            since: args.since,
            until: args.until,
            user_id: args.user_id,
        }
    }
}
