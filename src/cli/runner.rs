//! CLI runner - executes commands

use crate::api::{IdentityApi, OneLoginClient};
use crate::cli::commands::{AppCommands, Cli, Commands, EventCommands, OutputArgs, UserCommands};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{AppQuery, NewUser, UserQuery};
use crate::output::{write_records, Record};
use crate::service::{EventFilter, OneLogin};
use std::io::{self, Write};
use std::slice;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the configured account, printing to stdout
    pub async fn run(&self) -> Result<()> {
        if matches!(self.cli.command, Commands::Version) {
            return self.version(io::stdout());
        }

        let config = ClientConfig::from_env()?;
        debug!(base_url = %config.base_url, "Loaded configuration");
        let service = OneLogin::new(OneLoginClient::new(&config)?);

        self.execute(&service, io::stdout()).await
    }

    /// Execute the command with an explicit service and output sink
    pub async fn execute<A, W>(&self, service: &OneLogin<A>, out: W) -> Result<()>
    where
        A: IdentityApi,
        W: Write,
    {
        match &self.cli.command {
            Commands::User { command } => self.user(service, command, out).await,
            Commands::App { command } => self.app(service, command, out).await,
            Commands::Event { command } => self.event(service, command, out).await,
            Commands::Version => self.version(out),
        }
    }

    fn version<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "v{}", crate::VERSION)?;
        Ok(())
    }

    async fn user<A: IdentityApi, W: Write>(
        &self,
        service: &OneLogin<A>,
        command: &UserCommands,
        out: W,
    ) -> Result<()> {
        match command {
            UserCommands::List { filter, output } => {
                let users = service.get_users(&UserQuery::from(filter.clone())).await?;
                render(&users, *output, out)
            }
            UserCommands::ModifyEmail {
                new_email,
                filter,
                output,
            } => {
                let query = UserQuery::from(filter.clone());
                let user = service.update_user_email(&query, new_email).await?;
                render(slice::from_ref(&user), *output, out)
            }
            UserCommands::Create {
                firstname,
                lastname,
                email,
                output,
            } => {
                let user = service
                    .create_user(&NewUser::new(firstname, lastname, email))
                    .await?;
                render(slice::from_ref(&user), *output, out)
            }
        }
    }

    async fn app<A: IdentityApi, W: Write>(
        &self,
        service: &OneLogin<A>,
        command: &AppCommands,
        out: W,
    ) -> Result<()> {
        match command {
            AppCommands::List {
                name,
                detail,
                output,
            } => {
                let query = AppQuery { name: name.clone() };
                if *detail {
                    let apps = service.get_apps_details(&query).await?;
                    render(&apps, *output, out)
                } else {
                    let apps = service.get_apps(&query).await?;
                    render(&apps, *output, out)
                }
            }
            AppCommands::ListUsers { app_id, output } => {
                let users = service.get_app_users(*app_id).await?;
                render(&users, *output, out)
            }
        }
    }

    async fn event<A: IdentityApi, W: Write>(
        &self,
        service: &OneLogin<A>,
        command: &EventCommands,
        out: W,
    ) -> Result<()> {
        match command {
            EventCommands::List { filter, output } => {
                let query = service
                    .build_events_query(EventFilter::from(filter.clone()))
                    .await?;
                let events = service.list_events(&query).await?;
                render(&events, *output, out)
            }
            EventCommands::Types { output } => {
                let types = service.get_event_types().await?;
                render(types, *output, out)
            }
        }
    }
}

fn render<T: Record, W: Write>(records: &[T], output: OutputArgs, out: W) -> Result<()> {
    debug!(count = records.len(), format = %output.output, "Writing output");
    write_records(records, output.output, out)
}
