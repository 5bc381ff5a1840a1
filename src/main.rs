use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use usercluster::{
    ClusterError, ClusterResponse, ClusterResult, ClusterType, ServerConfig, UserRecord,
    clusterer::{DEFAULT_MAX_DISTANCE_KM, DEFAULT_N_CLUSTERS, DEFAULT_TOP_N},
    cluster_by_interest, cluster_by_location, find_similar_users, format_response,
    payload::load_users,
    server::{DEFAULT_HOST, DEFAULT_PORT},
    validate,
};

#[derive(Parser)]
#[command(name = "usercluster", version, about = "Group users by location or shared interests")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP clustering service
    Serve {
        #[arg(long, env = "CLUSTER_HOST", default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, env = "CLUSTER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Cluster a payload by geographic proximity
    Location {
        /// JSON file with users, or `-` for stdin
        payload: PathBuf,
        /// Neighbor radius in kilometers
        #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE_KM)]
        max_distance: f64,
    },
    /// Cluster a payload by shared interests
    Interest {
        /// JSON file with users, or `-` for stdin
        payload: PathBuf,
        /// Number of k-means groups
        #[arg(long, default_value_t = DEFAULT_N_CLUSTERS)]
        clusters: usize,
    },
    /// Rank a payload's users by similarity to a set of interests
    Similar {
        /// JSON file with users, or `-` for stdin
        payload: PathBuf,
        /// Comma separated interest tags
        #[arg(long, value_delimiter = ',', required = true)]
        interests: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            usercluster::serve(&ServerConfig { host, port }).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Location {
            payload,
            max_distance,
        } => run_once(&payload, ClusterType::Location, |users| {
            cluster_by_location(users, max_distance)
        }),
        Commands::Interest { payload, clusters } => {
            run_once(&payload, ClusterType::Interest, |users| {
                cluster_by_interest(users, clusters)
            })
        }
        Commands::Similar {
            payload,
            interests,
            top_n,
        } => {
            let users = load_users(&payload)?;
            let similar = find_similar_users(&interests, &users, top_n);
            print_json(&serde_json::json!({ "success": true, "user_ids": similar }))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Validate, cluster and print one payload; failure envelopes exit non-zero
fn run_once(
    payload: &Path,
    cluster_type: ClusterType,
    cluster: impl FnOnce(&[UserRecord]) -> Result<Vec<ClusterResult>, ClusterError>,
) -> Result<ExitCode> {
    let users = load_users(payload)?;
    let start = Instant::now();

    let response = match validate(&users, cluster_type) {
        Ok(()) => {
            let clusters = cluster(&users)
                .with_context(|| format!("{cluster_type} clustering failed"))?;
            format_response(clusters, cluster_type)
        }
        Err(e) => ClusterResponse::failure(e.to_string()),
    };

    info!(
        %cluster_type,
        users = users.len(),
        clusters = response.clusters.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "clustering complete"
    );

    print_json(&response)?;
    Ok(if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{out}");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "usercluster=debug,tower_http=debug,info"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
