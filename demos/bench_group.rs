//! Group lookups against full-path lookups.
//!
//! Usage:
//! ```
//! cargo run --release --example bench_group -- locales/zh-CN.yaml 1000000
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::hint::black_box;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{
    Duration,
    Instant,
};

use tree_i18n::{
    I18nSettings,
    InstanceCache,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map_or_else(|| PathBuf::from("locales/zh-CN.yaml"), PathBuf::from);
    let iterations: u32 = args.get(2).and_then(|n| n.parse().ok()).unwrap_or(1_000_000);

    let locale = match InstanceCache::new(I18nSettings::default())
        .and_then(|cache| cache.get_or_create("zh-CN", Some(path.as_path())))
    {
        Ok(locale) => locale,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let group = match locale.group("user.password.error") {
        Ok(group) => group,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== Group Lookup Benchmark ===");
    println!("Source: {}, iterations: {iterations}", path.display());
    println!();

    report("group.get (plain)", iterations, || group.get("too-simple", &[]));
    report("locale.text (plain)", iterations, || {
        locale.text("user.password.error.too-simple", &[])
    });
    report("group.get (formatted)", iterations, || group.get("too-short", &[42.into()]));
    report("locale.text (formatted)", iterations, || {
        locale.text("user.password.error.too-short", &[42.into()])
    });

    ExitCode::SUCCESS
}

/// Runs `lookup` `iterations` times and prints the time per call.
fn report(name: &str, iterations: u32, mut lookup: impl FnMut() -> String) {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(lookup());
    }
    let elapsed = start.elapsed();
    let per_call = elapsed.checked_div(iterations).unwrap_or(Duration::ZERO);
    println!("  {name:<24} {}ms total, {}ns/op", elapsed.as_millis(), per_call.as_nanos());
}
