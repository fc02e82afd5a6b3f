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
use uom::si::{f64::Velocity, velocity::meter_per_second};
use tracing_subscriber::EnvFilter;
use mcity_v2x::{
    get_http_client, LogSink, OctaneConfig, OctaneReceiverRegistry, OctaneRestSink, Path, PathPacer,
    ProfileKind, BsmConfig, ReceiverRegistry
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "follow a GeoJSON path and broadcast V2X messages through OCTANE in real time")]
pub struct Args {
    /// object velocity in m/s
    #[arg(short,long, default_value_t = 4.5)]
    pub velocity: f64,

    #[arg(short,long, value_enum, default_value_t = ProfileKind::Bsm)]
    pub profile: ProfileKind,

    /// RSU id to send to. If not set we use the first compatible RSU of the server
    #[arg(short,long)]
    pub receiver: Option<String>,

    /// RON config file with OCTANE server, API key and vehicle parameters
    #[arg(short,long, default_value = "octane.ron")]
    pub config: PathBuf,

    /// only log messages, don't send them
    #[arg(long)]
    pub dry_run: bool,

    /// GeoJSON file with path to follow
    pub geojson: PathBuf
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // use RUST_LOG to set max level
        .with_writer( std::io::stderr)
        .init();

    let args = Args::parse();

    let path = Path::from_geojson_file( &args.geojson)?;
    let velocity = Velocity::new::<meter_per_second>( args.velocity);

    let stats = if args.dry_run {
        let profile = args.profile.create( &BsmConfig::default());
        let mut pacer = PathPacer::new( path, velocity, profile)?;
        let mut sink = LogSink::new();
        let receiver = args.receiver.as_deref().unwrap_or("0");
        pacer.follow( &mut sink, Some(receiver), None).await?

    } else {
        let config = OctaneConfig::load( &args.config)?;
        let client = get_http_client( &config)?;

        let profile = args.profile.create( &config.bsm);
        let mut pacer = PathPacer::new( path, velocity, profile)?;
        let mut sink = OctaneRestSink::new( client.clone(), &config)?;
        let registry = OctaneReceiverRegistry::new( client, &config)?;
        pacer.follow( &mut sink, args.receiver.as_deref(), Some(&registry as &dyn ReceiverRegistry)).await?
    };

    println!("{stats}");
    Ok(())
}
