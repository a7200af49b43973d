//! memdb Workload Driver
//!
//! Loads random edge rows into a MemTable and checks ordering or measures
//! insert throughput.

use std::collections::HashSet;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use memdb::{ColumnType, Config, MemDbError, MemTable, Result, Schema};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{fmt, EnvFilter};

/// memdb workload driver
#[derive(Parser, Debug)]
#[command(name = "memdb-bench")]
#[command(about = "Workloads for the memdb in-memory sorted table")]
#[command(version)]
struct Args {
    /// Number of rows to generate
    #[arg(short, long, default_value = "100000")]
    rows: usize,

    /// Random ids are drawn from 0..key_space
    #[arg(short, long, default_value = "10000")]
    key_space: i32,

    /// Length of generated names
    #[arg(short, long, default_value = "20")]
    name_len: usize,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert unique random rows and verify they come back sorted
    Sorted,

    /// Time random upserts
    InsertSpeed,

    /// Insert a few fixed rows and print the table
    Dump,
}

/// One generated edge row
#[derive(Debug, Clone)]
struct Edge {
    from_id: i32,
    from_name: String,
    to_id: i32,
    to_name: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,memdb=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("memdb-bench v{}", memdb::VERSION);

    let mut builder = Config::builder()
        .row_count(args.rows)
        .key_space(args.key_space)
        .name_len(args.name_len);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid arguments: {}", e);
            process::exit(1);
        }
    };

    let result = match args.command {
        Commands::Sorted => run_sorted(&config),
        Commands::InsertSpeed => run_insert_speed(&config),
        Commands::Dump => run_dump(),
    };

    if let Err(e) = result {
        tracing::error!("Workload failed: {}", e);
        process::exit(1);
    }
}

/// (from_id, from_name, to_id, to_name), indexed by from_id, primary to_id
fn edge_schema() -> Result<Arc<Schema>> {
    let schema = Schema::from_columns(
        &[
            ("from_id", ColumnType::Int32),
            ("from_name", ColumnType::String),
            ("to_id", ColumnType::Int32),
            ("to_name", ColumnType::String),
        ],
        "to_id",
    )?;
    Ok(Arc::new(schema))
}

fn make_rng(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn random_name(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn insert_edge(table: &mut MemTable, edge: &Edge) -> Result<()> {
    let row = table
        .new_row()
        .push(edge.from_id)
        .push(edge.from_name.as_str())
        .push(edge.to_id)
        .push(edge.to_name.as_str());
    table.insert(row)
}

fn run_sorted(config: &Config) -> Result<()> {
    let key_space = config.key_space as u64;
    if config.row_count as u64 > key_space * key_space {
        return Err(MemDbError::Config(format!(
            "cannot draw {} unique keys from a {}x{} key space",
            config.row_count, key_space, key_space
        )));
    }

    let mut rng = make_rng(config);
    let mut seen = HashSet::with_capacity(config.row_count);
    let mut edges = Vec::with_capacity(config.row_count);
    while edges.len() < config.row_count {
        let from_id = rng.gen_range(0..config.key_space);
        let to_id = rng.gen_range(0..config.key_space);
        if seen.insert((from_id, to_id)) {
            edges.push(Edge {
                from_id,
                from_name: random_name(&mut rng, config.name_len),
                to_id,
                to_name: random_name(&mut rng, config.name_len),
            });
        }
    }

    let mut table = MemTable::with_config(edge_schema()?, config);
    for edge in &edges {
        insert_edge(&mut table, edge)?;
    }

    edges.sort_by_key(|e| (e.from_id, e.to_id));

    let mut it = table.iter();
    for (i, expected) in edges.iter().enumerate() {
        if !it.valid() {
            tracing::error!("Table ended after {} rows, expected {}", i, edges.len());
            process::exit(1);
        }
        let row = it.row_at();
        let matches = row.get_int_by_name("from_id") == expected.from_id
            && row.get_int_by_name("to_id") == expected.to_id
            && row.get_string_by_name("from_name") == expected.from_name
            && row.get_string_by_name("to_name") == expected.to_name;
        if !matches {
            tracing::error!(
                "Row {} out of order: got ({}), expected ({}, {})",
                i,
                row,
                expected.from_id,
                expected.to_id
            );
            process::exit(1);
        }
        it.next();
    }

    tracing::info!("MemTable sorted {} rows correctly", edges.len());
    Ok(())
}

fn run_insert_speed(config: &Config) -> Result<()> {
    let mut rng = make_rng(config);
    let mut table = MemTable::with_config(edge_schema()?, config);
    let from_name = "random dude1";
    let to_name = "random dude2";

    let start = Instant::now();
    for _ in 0..config.row_count {
        let edge = Edge {
            from_id: rng.gen_range(0..config.key_space),
            from_name: from_name.to_string(),
            to_id: rng.gen_range(0..config.key_space),
            to_name: to_name.to_string(),
        };
        insert_edge(&mut table, &edge)?;
    }
    let elapsed = start.elapsed();

    let per_sec = config.row_count as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    tracing::info!(
        rows = config.row_count,
        stored = table.len(),
        usec = elapsed.as_micros() as u64,
        "Inserted {} rows ({:.0} rows/sec)",
        config.row_count,
        per_sec
    );
    Ok(())
}

fn run_dump() -> Result<()> {
    let mut table = MemTable::new(edge_schema()?);
    let edges = [
        (1, 2, "crap", "junk"),
        (1, 3, "crap", "junk"),
        (3, 1, "crap", "junk"),
        (2, 3, "crap", "junk"),
    ];

    for &(from_id, to_id, from_name, to_name) in edges.iter().rev() {
        let edge = Edge {
            from_id,
            from_name: from_name.to_string(),
            to_id,
            to_name: to_name.to_string(),
        };
        insert_edge(&mut table, &edge)?;
    }

    table.print_all()
}
