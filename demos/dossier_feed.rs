//! Dossier Feed
//!
//! This example runs a monitor against a console display.
//!
//! Key concepts:
//! - Building a configuration with the fluent builder
//! - Plugging a custom DisplaySurface into the monitor
//! - start/stop lifecycle on a real tokio runtime
//! - Updating the admin drink tally
//!
//! Run with: RUST_LOG=dossier=debug cargo run --example dossier_feed

use chrono::Utc;
use dossier::config::DossierConfig;
use dossier::core::{project, MissionStatus, VitalSample, VitalsHistory};
use dossier::monitor::{DisplaySurface, DossierMonitor};
use dossier::tally::{DrinkTally, DEFAULT_BODY_WEIGHT_KG};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

struct ConsoleSurface;

impl DisplaySurface for ConsoleSurface {
    fn render_vitals(&self, sample: &VitalSample, history: &VitalsHistory) {
        let waveform = project(history);
        println!(
            "HEART RATE {:>7} | BP {:>7} | TEMP {:>7} | O2 {:>4} | waveform segments: {}",
            sample.heart_rate_label(),
            sample.blood_pressure(),
            sample.temperature_label(),
            sample.oxygen_label(),
            waveform.segments.len()
        );
    }

    fn render_mission(&self, status: &MissionStatus) {
        println!(
            "PHASE {} | COVER {} | LOCATION {}",
            status.phase, status.cover, status.location
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Agent Dossier Feed ===\n");

    let config = DossierConfig::builder()
        .vitals_interval(Duration::from_millis(500))
        .mission_interval(Duration::from_secs(2))
        .build()?;

    let monitor = DossierMonitor::new(config)?.with_surface(Arc::new(ConsoleSurface));
    monitor.start().await?;

    tokio::time::sleep(Duration::from_secs(3)).await;
    monitor.stop().await;

    let snapshot = monitor.snapshot().await;
    println!("\nRetained heart rates: {:?}", snapshot.history.current());
    println!("Vitals ticks: {}", snapshot.vitals_ticks);

    println!("\n=== Admin Control Panel ===\n");
    let mut tally = DrinkTally::new(Utc::now());
    for _ in 0..4 {
        tally.add_drink(Utc::now());
    }
    tally.remove_drink(Utc::now())?;
    println!(
        "Drinks: {} | Status: {} | Est. BAC: {:.3}%",
        tally.count(),
        tally.level(),
        tally.estimated_bac(DEFAULT_BODY_WEIGHT_KG)
    );

    println!("\n=== Feed Complete ===");
    Ok(())
}
