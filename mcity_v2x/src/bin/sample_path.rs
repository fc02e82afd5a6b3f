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
use mcity_v2x::{to_feature_collection, BsmConfig, MovingPoint, Path, PathPacer, ProfileKind};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "print the points of a GeoJSON path as they would be broadcast, as GeoJSON FeatureCollection")]
pub struct Args {
    /// object velocity in m/s
    #[arg(short,long, default_value_t = 4.5)]
    pub velocity: f64,

    #[arg(short,long, value_enum, default_value_t = ProfileKind::Bsm)]
    pub profile: ProfileKind,

    /// GeoJSON file with path to sample
    pub geojson: PathBuf
}

fn main()->Result<()> {
    let args = Args::parse();

    let path = Path::from_geojson_file( &args.geojson)?;
    let velocity = Velocity::new::<meter_per_second>( args.velocity);
    let pacer = PathPacer::new( path, velocity, args.profile.create( &BsmConfig::default()))?;

    let points: Vec<MovingPoint> = pacer.samples().collect();
    let fc = to_feature_collection( &points);
    println!("{}", serde_json::to_string_pretty( &fc)?);

    Ok(())
}
