//! `check-config` command.

use std::path::PathBuf;
use warden::{WardenConfig, WardenResult};

/// Load the configuration and print a summary with any warnings.
pub fn check_config(path: Option<PathBuf>) -> WardenResult<()> {
    let config = WardenConfig::load(path)?;
    let fsub = config.force_subscribe();

    println!("Owner:               {}", config.owner_id());
    println!("Force-subscribe:     {}", if *fsub.enabled() { "on" } else { "off" });
    println!("  channels:          {:?}", fsub.channels());
    println!("  request channels:  {:?}", fsub.request_channels());
    match fsub.invite_lifetime() {
        Some(_) => println!("  invite expiry:     {} min", fsub.invite_expire_minutes()),
        None => println!("  invite expiry:     never"),
    }
    println!(
        "User cache:          {} (max {} entries)",
        if *config.cache().enabled() { "on" } else { "off" },
        config.cache().max_entries()
    );

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("\nConfiguration OK");
    } else {
        println!("\n{} warning(s):", warnings.len());
        for warning in warnings {
            println!("  - {}", warning);
        }
    }
    Ok(())
}
