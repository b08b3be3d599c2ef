use crate::aggregator::{DeviceQuery, load_directory};
use crate::app_config::AppConfig;
use crate::display::{render_record, render_search, render_summary};
use crate::jss::device_update::update_device;
use crate::jss::devices::{fetch_device, fetch_device_by_udid};
use crate::jss::domain::{ComputerPut, GeneralPut, LocationPut};
use crate::jss::privileges::missing_privileges;
use crate::jss::reference_lists::{ReferenceList, fetch_choices, fetch_extension_attribute_choices};
use crate::jss::search::{SearchFormat, search};
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use tracing::{error, info, warn};

mod aggregator;
mod app_config;
mod display;
mod domain;
mod extensions;
mod jss;
mod name_sort;
mod scope_resolver;

#[derive(Parser)]
#[command(name = "cargo-ship")]
#[command(about = "View and edit computer inventory records in a JSS")]
#[command(version)]
struct Cli {
    /// More logging, repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the summary of a single device
    Summary {
        /// JSS id of the device
        #[arg(required_unless_present = "udid")]
        id: Option<i64>,

        /// Look the device up by hardware UUID instead
        #[arg(long, conflicts_with = "id")]
        udid: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current general and location fields of a device
    Record {
        /// JSS id of the device
        #[arg(required_unless_present = "udid")]
        id: Option<i64>,

        /// Look the device up by hardware UUID instead
        #[arg(long, conflicts_with = "id")]
        udid: Option<String>,
    },
    /// Search devices by name, serial number, user etc.
    Search {
        query: String,

        /// Use the XML flavour of the search endpoint
        #[arg(long)]
        xml: bool,
    },
    /// Edit the general and location fields of a device
    Update(UpdateArgs),
    /// Check that the configured account holds the required privileges
    Privileges,
    /// List the buildings known to the JSS
    Buildings,
    /// List the departments known to the JSS
    Departments,
    /// List the pop-up choices of a computer extension attribute
    EaChoices { id: i64 },
}

#[derive(Args)]
struct UpdateArgs {
    id: i64,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    asset_tag: Option<String>,
    #[arg(long)]
    barcode: Option<String>,
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    real_name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    building: Option<String>,
    #[arg(long)]
    room: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    department: Option<String>,
}

impl From<UpdateArgs> for ComputerPut {
    fn from(args: UpdateArgs) -> Self {
        ComputerPut {
            general: GeneralPut {
                name: args.name,
                asset_tag: args.asset_tag,
                barcode_1: args.barcode,
            },
            location: LocationPut {
                username: args.username,
                email_address: args.email,
                real_name: args.real_name,
                phone: args.phone,
                building: args.building,
                room: args.room,
                position: args.position,
                department: args.department,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    if let Err(e) = run(cli.command, &config).await {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let client = jss::new_client(config)?;

    match command {
        Commands::Summary { id, udid, json } => {
            let query = match (id, udid) {
                (_, Some(udid)) => DeviceQuery::Udid(udid),
                (Some(id), None) => DeviceQuery::Id(id),
                (None, None) => return Err("a device id or --udid is required".into()),
            };

            let directory = load_directory(&client, config).await?;
            for failure in &directory.policy_failures {
                warn!(policy_id = failure.policy_id, "⚠️ Policy left out of the summary: {}", failure.error);
            }

            let summary = directory.summarize_device(&client, &query).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_summary(&summary));
            }
        }
        Commands::Record { id, udid } => {
            let record = match (id, udid) {
                (_, Some(udid)) => fetch_device_by_udid(&client, &udid).await?,
                (Some(id), None) => fetch_device(&client, id).await?,
                (None, None) => return Err("a device id or --udid is required".into()),
            };
            print!("{}", render_record(&record));
        }
        Commands::Search { query, xml } => {
            let format = if xml { SearchFormat::Xml } else { SearchFormat::Json };
            let matches = search(&client, &query, format).await?;
            print!("{}", render_search(&matches));
        }
        Commands::Update(args) => {
            let id = args.id;
            update_device(&client, id, &ComputerPut::from(args)).await?;
            println!("Device {} updated.", id);
        }
        Commands::Privileges => {
            let missing = missing_privileges(&client, config.privileges().required()).await?;
            if missing.is_empty() {
                println!("{} holds every required privilege.", client.username());
            } else {
                println!("User lacks appropriate privileges.");
                print_lines(&missing);
            }
        }
        Commands::Buildings => print_lines(&fetch_choices(&client, ReferenceList::Buildings).await?),
        Commands::Departments => print_lines(&fetch_choices(&client, ReferenceList::Departments).await?),
        Commands::EaChoices { id } => print_lines(&fetch_extension_attribute_choices(&client, id).await?),
    }

    Ok(())
}

fn print_lines(lines: &[String]) {
    lines.iter().for_each(|line| println!("{}", line));
}
