use anyhow::{anyhow, bail, Context, Result};
use azrm::client::{ArmClient, ListCompleteResult};
use azrm::config::Config;
use azrm::datamigration::{
    DeleteOperationOptions, ListOperationOptions, ProjectId, ProjectTaskClient, ServiceId, ServiceResourceClient,
    TaskId,
};
use azrm::elasticsan::{ElasticSanId, ElasticSansClient};
use azrm::network::webapplicationfirewallpolicies::{
    ApplicationGatewayWebApplicationFirewallPolicyId, WebApplicationFirewallPoliciesClient,
};
use azrm::resourceids::{ResourceGroupId, ResourceId, SubscriptionId};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Azure Resource Manager client for Data Migration, Elastic SAN and WAF policies
#[derive(Parser, Debug)]
#[command(name = "azrm", version, about, long_about = None)]
struct Args {
    /// Subscription to operate in
    #[arg(short, long, global = true)]
    subscription: Option<String>,

    /// Resource group to operate in
    #[arg(short = 'g', long, global = true)]
    resource_group: Option<String>,

    /// Resource Manager endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Database Migration Service
    #[command(subcommand)]
    Dms(DmsCommand),
    /// Elastic SAN
    #[command(subcommand)]
    San(SanCommand),
    /// Application gateway WAF policies
    #[command(subcommand)]
    Waf(WafCommand),
    /// Resource ID utilities
    #[command(subcommand)]
    Id(IdCommand),
    /// Persistent defaults
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum DmsCommand {
    /// List services in the resource group, or the whole subscription
    List,
    /// Start a service and wait until it is running
    Start { service: String },
    /// Stop a service and wait until it is stopped
    Stop { service: String },
    /// Delete a service
    Delete {
        service: String,
        /// Delete even when tasks are still running
        #[arg(long)]
        delete_running_tasks: bool,
    },
    /// SKUs a service can be moved to
    Skus { service: String },
    /// Tasks in a project
    Tasks {
        service: String,
        project: String,
        #[arg(long)]
        task_type: Option<String>,
    },
    /// Cancel a running task
    CancelTask {
        service: String,
        project: String,
        task: String,
    },
}

#[derive(Subcommand, Debug)]
enum SanCommand {
    List,
    Show { name: String },
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum WafCommand {
    List,
    Show { name: String },
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum IdCommand {
    /// Identify a resource ID and print its components
    Parse { id: String },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    Show,
    Set {
        #[arg(long)]
        subscription: Option<String>,
        #[arg(long)]
        resource_group: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return None;
        },
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("azrm={}", tracing_level)))
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("azrm started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("azrm").join("azrm.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".azrm").join("azrm.log");
    }
    PathBuf::from("azrm.log")
}

/// Resolved flags and config, shared by every command
struct Session {
    args: Args,
    config: Config,
    ctx: CancellationToken,
}

impl Session {
    fn client(&self) -> Result<ArmClient> {
        let options = self.config.client_options(self.args.endpoint.as_deref());
        ArmClient::new(options).context("Failed to build client")
    }

    fn subscription(&self) -> Result<String> {
        self.config
            .effective_subscription(self.args.subscription.as_deref())
            .ok_or_else(|| anyhow!("No subscription configured. Set AZURE_SUBSCRIPTION_ID or use --subscription"))
    }

    fn resource_group(&self) -> Option<String> {
        self.config
            .effective_resource_group(self.args.resource_group.as_deref())
    }

    fn require_resource_group(&self) -> Result<String> {
        self.resource_group()
            .ok_or_else(|| anyhow!("No resource group configured. Use --resource-group"))
    }

    fn service_id(&self, service: &str) -> Result<ServiceId> {
        Ok(ServiceId::new(self.subscription()?, self.require_resource_group()?, service))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let ctx = CancellationToken::new();
    let on_interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    let session = Session {
        args,
        config: Config::load(),
        ctx,
    };

    match &session.args.command {
        Command::Dms(command) => run_dms(&session, command).await,
        Command::San(command) => run_san(&session, command).await,
        Command::Waf(command) => run_waf(&session, command).await,
        Command::Id(IdCommand::Parse { id }) => {
            println!("{}", describe_id(id)?);
            Ok(())
        },
        Command::Config(command) => run_config(session.config.clone(), command),
    }
}

async fn run_dms(session: &Session, command: &DmsCommand) -> Result<()> {
    let client = session.client()?;
    let services = ServiceResourceClient::from_client(&client);
    let ctx = &session.ctx;

    match command {
        DmsCommand::List => {
            let result = match session.resource_group() {
                Some(resource_group) => {
                    let id = ResourceGroupId::new(session.subscription()?, resource_group);
                    services.services_list_by_resource_group_complete(ctx, &id).await
                },
                None => {
                    let id = SubscriptionId::new(session.subscription()?);
                    services.services_list_complete(ctx, &id).await
                },
            };
            print_items(result.context("Failed to list services")?)
        },
        DmsCommand::Start { service } => {
            let id = session.service_id(service)?;
            services
                .services_start_then_poll(ctx, &id)
                .await
                .with_context(|| format!("Failed to start {}", id))?;
            tracing::info!("Started {}", id);
            Ok(())
        },
        DmsCommand::Stop { service } => {
            let id = session.service_id(service)?;
            services
                .services_stop_then_poll(ctx, &id)
                .await
                .with_context(|| format!("Failed to stop {}", id))?;
            Ok(())
        },
        DmsCommand::Delete {
            service,
            delete_running_tasks,
        } => {
            let id = session.service_id(service)?;
            let options = DeleteOperationOptions {
                delete_running_tasks: delete_running_tasks.then_some(true),
            };
            services
                .services_delete_then_poll(ctx, &id, options)
                .await
                .with_context(|| format!("Failed to delete {}", id))?;
            Ok(())
        },
        DmsCommand::Skus { service } => {
            let id = session.service_id(service)?;
            let result = services
                .services_list_skus_complete(ctx, &id)
                .await
                .context("Failed to list SKUs")?;
            print_items(result)
        },
        DmsCommand::Tasks {
            service,
            project,
            task_type,
        } => {
            let service = session.service_id(service)?;
            let id = ProjectId::new(
                service.subscription_id,
                service.resource_group_name,
                service.service_name,
                project.as_str(),
            );
            let options = ListOperationOptions {
                task_type: task_type.clone(),
            };
            let result = ProjectTaskClient::from_client(&client)
                .tasks_list_complete(ctx, &id, options)
                .await
                .context("Failed to list tasks")?;
            print_items(result)
        },
        DmsCommand::CancelTask {
            service,
            project,
            task,
        } => {
            let service = session.service_id(service)?;
            let id = TaskId::new(
                service.subscription_id,
                service.resource_group_name,
                service.service_name,
                project.as_str(),
                task.as_str(),
            );
            let response = ProjectTaskClient::from_client(&client)
                .tasks_cancel(ctx, &id)
                .await
                .with_context(|| format!("Failed to cancel {}", id))?;
            print_json(&response.model)
        },
    }
}

async fn run_san(session: &Session, command: &SanCommand) -> Result<()> {
    let sans = ElasticSansClient::from_client(&session.client()?);
    let ctx = &session.ctx;

    match command {
        SanCommand::List => {
            let result = match session.resource_group() {
                Some(resource_group) => {
                    let id = ResourceGroupId::new(session.subscription()?, resource_group);
                    sans.list_by_resource_group_complete(ctx, &id).await
                },
                None => {
                    let id = SubscriptionId::new(session.subscription()?);
                    sans.list_by_subscription_complete(ctx, &id).await
                },
            };
            print_items(result.context("Failed to list Elastic SANs")?)
        },
        SanCommand::Show { name } => {
            let id = ElasticSanId::new(session.subscription()?, session.require_resource_group()?, name.as_str());
            let response = sans.get(ctx, &id).await.with_context(|| format!("Failed to get {}", id))?;
            print_json(&response.model)
        },
        SanCommand::Delete { name } => {
            let id = ElasticSanId::new(session.subscription()?, session.require_resource_group()?, name.as_str());
            sans.delete_then_poll(ctx, &id)
                .await
                .with_context(|| format!("Failed to delete {}", id))
        },
    }
}

async fn run_waf(session: &Session, command: &WafCommand) -> Result<()> {
    let policies = WebApplicationFirewallPoliciesClient::from_client(&session.client()?);
    let ctx = &session.ctx;

    match command {
        WafCommand::List => {
            let result = match session.resource_group() {
                Some(resource_group) => {
                    let id = ResourceGroupId::new(session.subscription()?, resource_group);
                    policies.list_complete(ctx, &id).await
                },
                None => {
                    let id = SubscriptionId::new(session.subscription()?);
                    policies.list_all_complete(ctx, &id).await
                },
            };
            print_items(result.context("Failed to list WAF policies")?)
        },
        WafCommand::Show { name } => {
            let id = ApplicationGatewayWebApplicationFirewallPolicyId::new(
                session.subscription()?,
                session.require_resource_group()?,
                name.as_str(),
            );
            let response = policies
                .get(ctx, &id)
                .await
                .with_context(|| format!("Failed to get {}", id))?;
            print_json(&response.model)
        },
        WafCommand::Delete { name } => {
            let id = ApplicationGatewayWebApplicationFirewallPolicyId::new(
                session.subscription()?,
                session.require_resource_group()?,
                name.as_str(),
            );
            policies
                .delete_then_poll(ctx, &id)
                .await
                .with_context(|| format!("Failed to delete {}", id))
        },
    }
}

fn run_config(mut config: Config, command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => print_json(&config),
        ConfigCommand::Set {
            subscription,
            resource_group,
        } => {
            if let Some(subscription) = subscription {
                config.set_subscription(subscription)?;
            }
            if let Some(resource_group) = resource_group {
                config.set_resource_group(resource_group)?;
            }
            Ok(())
        },
    }
}

/// Segment counts differ per type, so at most one parser accepts an ID
fn describe_id(input: &str) -> Result<String> {
    if let Ok(id) = TaskId::parse_insensitively(input) {
        return Ok(id.describe());
    }
    if let Ok(id) = ProjectId::parse_insensitively(input) {
        return Ok(id.describe());
    }
    if let Ok(id) = ServiceId::parse_insensitively(input) {
        return Ok(id.describe());
    }
    if let Ok(id) = ElasticSanId::parse_insensitively(input) {
        return Ok(id.describe());
    }
    if let Ok(id) = ApplicationGatewayWebApplicationFirewallPolicyId::parse_insensitively(input) {
        return Ok(id.describe());
    }
    if let Ok(id) = ResourceGroupId::parse_insensitively(input) {
        return Ok(id.describe());
    }
    match SubscriptionId::parse_insensitively(input) {
        Ok(id) => Ok(id.describe()),
        Err(e) => bail!("Unrecognised resource ID {:?}: {}", input, e),
    }
}

fn print_items<T: Serialize>(result: ListCompleteResult<T>) -> Result<()> {
    print_json(&result.items)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
