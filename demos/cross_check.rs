//! Cross-checks `AvlTreeMap` against `BTreeMap` with random data.
//!
//! Usage:
//!   cargo run --example cross_check -- --count 100000 --seed 1

use std::collections::BTreeMap;

use anyhow::{bail, Context};
use avl_map::AvlTreeMap;
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "cross_check")]
#[command(about = "Cross-checks the AVL map against a reference map")]
struct Args {
    /// Number of random entries to insert
    #[arg(long, short = 'n', default_value_t = 100_000)]
    count: usize,

    /// Smallest generated key
    #[arg(long, default_value_t = -1_000_000, allow_hyphen_values = true)]
    min: i32,

    /// Greatest generated key
    #[arg(long, default_value_t = 1_000_000, allow_hyphen_values = true)]
    max: i32,

    /// Seed for the random generator, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Validate the tree invariants after this many mutations
    #[arg(long, default_value_t = 10_000)]
    batch: usize,
}

#[derive(Default)]
struct Report {
    insertion_errors: usize,
    delete_errors: usize,
    invariant_errors: usize,
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASSED"
    } else {
        "FAILED"
    }
}

fn validate_batch(
    map: &AvlTreeMap<i32, usize>,
    mutations: usize,
    batch: usize,
    report: &mut Report,
) {
    if mutations % batch != 0 {
        return;
    }
    if let Err(violation) = map.validate() {
        error!(mutations, %violation, "tree invariant broken");
        report.invariant_errors += 1;
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    if args.min > args.max {
        bail!("invalid key range {}..={}", args.min, args.max);
    }
    let batch = args.batch.max(1);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(count = args.count, min = args.min, max = args.max, seed, "starting cross check");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = AvlTreeMap::new();
    let mut reference = BTreeMap::new();
    let mut report = Report::default();

    // Insert random entries into both maps
    for i in 0..args.count {
        let key = rng.gen_range(args.min..=args.max);
        map.insert(key, i);
        reference.insert(key, i);
        validate_batch(&map, i + 1, batch, &mut report);
    }
    info!(len = map.len(), height = map.height(), "inserted entries");

    for (key, value) in &reference {
        if map.get(key) != Some(value) {
            warn!(key, "lookup mismatch");
            report.insertion_errors += 1;
        }
    }

    // Remove the lower half of the keys
    let keys: Vec<i32> = reference.keys().copied().collect();
    let removed = &keys[..keys.len() / 2];
    for (i, key) in removed.iter().enumerate() {
        map.try_remove(key)
            .with_context(|| format!("key {key} vanished before removal"))?;
        validate_batch(&map, i + 1, batch, &mut report);
    }
    for key in removed {
        if map.contains_key(key) {
            warn!(key, "removed key still present");
            report.delete_errors += 1;
        }
    }
    info!(len = map.len(), height = map.height(), "removed lower half");

    let balanced = map.is_balanced();
    let ordered = map.is_valid_bst();
    println!("===TEST===");
    println!("Balance: {}", verdict(balanced && report.invariant_errors == 0));
    println!("BST Validity: {}", verdict(ordered));
    println!("Insertion: {}", verdict(report.insertion_errors == 0));
    println!("Delete: {}", verdict(report.delete_errors == 0));

    let remaining: Vec<i32> = map.keys().into_iter().copied().collect();
    for key in &remaining {
        map.remove(key);
    }
    println!("Clear: {}", verdict(map.is_empty()));

    let failed = !balanced
        || !ordered
        || !map.is_empty()
        || report.insertion_errors + report.delete_errors + report.invariant_errors > 0;
    if failed {
        bail!("cross check failed (seed {seed})");
    }
    Ok(())
}
