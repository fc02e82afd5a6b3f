/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use mcity_v2x::{get_http_client, BsmProfile, OctaneConfig, OctaneReceiverRegistry, PsmProfile, ReceiverRegistry};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "list the road side units known to an OCTANE server")]
pub struct Args {
    /// RON config file with OCTANE server and API key
    #[arg(short,long, default_value = "octane.ron")]
    pub config: PathBuf,

    /// print raw JSON
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // use RUST_LOG to set max level
        .with_writer( std::io::stderr)
        .init();

    let args = Args::parse();

    let config = OctaneConfig::load( &args.config)?;
    let registry = OctaneReceiverRegistry::new( get_http_client( &config)?, &config)?;
    let receivers = registry.receivers().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty( &receivers)?);
    } else {
        let bsm = BsmProfile::default();
        let psm = PsmProfile::new();
        for r in &receivers {
            let tx: Vec<&str> = [("bsm", r.supports( &bsm)), ("psm", r.supports( &psm))].iter()
                .filter_map( |(name,ok)| if *ok { Some(*name) } else { None })
                .collect();
            println!("{r}  -> tx: {}", if tx.is_empty() { "-".to_string() } else { tx.join(",") });
        }
        println!("{} receivers", receivers.len());
    }

    Ok(())
}
