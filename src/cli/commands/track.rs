//! `fleet track` command - Live Tracking
//!
//! Runs the position simulation on a tokio timer for a fixed number of ticks
//! and prints the fleet after each one. The timer is cancelled before the
//! command returns.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::time::Duration;

use crate::cli::commands::Context;
use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::state::AppState;
use crate::core::ticker::PeriodicTask;
use crate::views::tracking::{filter_hubs, filter_vehicles, nearest_hub, TrackedAsset, TrackingSim};

#[derive(clap::Args, Debug)]
pub struct TrackArgs {
    /// Number of simulation ticks to run (0 shows starting positions)
    #[arg(long, short = 'n', default_value_t = 3)]
    pub ticks: u64,

    /// Only vehicles (and hubs) matching this text
    #[arg(long)]
    pub search: Option<String>,

    /// Show the detail panel for one vehicle id
    #[arg(long)]
    pub select: Option<String>,

    /// Milliseconds between ticks (overrides configuration)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// List the logistics hubs instead of tracking
    #[arg(long)]
    pub hubs: bool,
}

/// One vehicle's telemetry as printed and serialized
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetReport<'a> {
    #[serde(flatten)]
    asset: &'a TrackedAsset,
    registration: Option<&'a str>,
    nearest_hub: &'static str,
}

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    tick: u64,
    assets: Vec<AssetReport<'a>>,
}

pub fn run(args: TrackArgs, app: &mut AppState, ctx: &Context) -> Result<()> {
    let query = args.search.as_deref().unwrap_or("");
    if args.hubs {
        return list_hubs(query, ctx);
    }

    let visible: Vec<String> = filter_vehicles(app.store.vehicles.items(), query)
        .into_iter()
        .map(|v| v.id.clone())
        .collect();
    let mut sim = TrackingSim::new(app.store.vehicles.items(), ctx.config.tracking_seed());

    if let Some(id) = &args.select {
        if sim.find(id).is_none() {
            return Err(miette::miette!(
                code = "fleet::track::unknown_vehicle",
                help = "run `fleet vehicle list` to see vehicle ids",
                "no tracked vehicle with id {}",
                id
            ));
        }
    }

    let period = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| ctx.config.tick_interval());
    let serialized = matches!(ctx.format(), OutputFormat::Json | OutputFormat::Yaml);
    let live = !serialized && !ctx.quiet();

    if args.ticks > 0 {
        if live {
            println!(
                "{} {} tick(s), every {} ms",
                app.theme.accent().apply_to("Live Tracking"),
                args.ticks,
                period.as_millis()
            );
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .into_diagnostic()?;
        runtime.block_on(async {
            let (task, mut rx) = PeriodicTask::start(period);
            while let Some(n) = rx.recv().await {
                sim.tick();
                if live && n < args.ticks {
                    print_snapshot(&snapshot(&sim, app, &visible));
                }
                if n >= args.ticks {
                    task.cancel();
                    break;
                }
            }
        });
    }

    let last = snapshot(&sim, app, &visible);
    if let Some(text) = output::serialized(&last, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }
    print_snapshot(&last);

    if let Some(asset) = args.select.as_deref().and_then(|id| sim.find(id)) {
        println!();
        print_detail(asset, app);
    }
    Ok(())
}

fn snapshot<'a>(sim: &'a TrackingSim, app: &'a AppState, visible: &[String]) -> Snapshot<'a> {
    Snapshot {
        tick: sim.ticks(),
        assets: sim
            .assets()
            .iter()
            .filter(|a| visible.contains(&a.vehicle_id))
            .map(|asset| AssetReport {
                asset,
                registration: app.store.vehicle_registration(&asset.vehicle_id),
                nearest_hub: nearest_hub(asset).name,
            })
            .collect(),
    }
}

fn print_snapshot(snap: &Snapshot) {
    println!("{}", style(format!("tick {}", snap.tick)).dim());
    if snap.assets.is_empty() {
        println!("  No vehicles match.");
    }
    for r in &snap.assets {
        let pos = r.asset.position();
        println!(
            "  {:<6} {:<14} {:>9.4} {:>8.4}  map {:>5.1}%,{:>5.1}%  {:>5.1} km/h  near {}",
            style(&r.asset.vehicle_id).cyan(),
            r.registration.unwrap_or("-"),
            r.asset.lat,
            r.asset.lng,
            pos.x,
            pos.y,
            r.asset.speed,
            r.nearest_hub
        );
    }
}

fn print_detail(asset: &TrackedAsset, app: &AppState) {
    let hub = nearest_hub(asset);
    println!("{}", app.theme.accent().apply_to(format!("Vehicle {}", asset.vehicle_id)));
    if let Some(reg) = app.store.vehicle_registration(&asset.vehicle_id) {
        println!("  Registration  {}", reg);
    }
    println!("  Position      {:.5}, {:.5}", asset.lat, asset.lng);
    println!("  Heading       {:.1}°", asset.heading);
    println!("  Speed         {:.1} km/h", asset.speed);
    println!(
        "  Nearest hub   {} ({}, {:.3}° away)",
        hub.name,
        hub.kind.as_str(),
        asset.distance_to(hub)
    );
    println!("  Trail         {} point(s)", asset.trail.len());
}

fn list_hubs(query: &str, ctx: &Context) -> Result<()> {
    let hubs = filter_hubs(query);
    if let Some(text) = output::serialized(&hubs, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }
    for hub in &hubs {
        println!(
            "{:<4} {:<24} {:<10} {:>9.4} {:>8.4}",
            style(hub.id).cyan(),
            hub.name,
            hub.kind.as_str(),
            hub.lat,
            hub.lng
        );
    }
    if !ctx.quiet() {
        println!("\n{} hub(s) found.", style(hubs.len()).cyan());
    }
    Ok(())
}
