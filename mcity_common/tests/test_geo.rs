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

use uom::si::length::meter;
use mcity_common::angle::*;
use mcity_common::geo::*;

// run with "cargo test -p mcity_common --test test_geo -- --nocapture"

#[test]
fn test_geodesic_distance() {
    let p0 = GeoPoint3::from_lon_lat_degrees( 0.0, 0.0);
    let p1 = GeoPoint3::from_lon_lat_degrees( 0.0, 0.001);

    let d = p0.geodesic_distance( &p1).get::<meter>();
    println!("distance {p0} -> {p1}: {d}m");
    assert!( (d - 110.574).abs() < 0.01); // meridional arc at the equator

    assert_eq!( p0.geodesic_distance( &p0).get::<meter>(), 0.0);
    assert!( p0.same_position( &GeoPoint3::from_lon_lat_degrees_alt_meters( 0.0, 0.0, 42.0)));
}

#[test]
fn test_geodesic_bearing() {
    let p0 = GeoPoint3::from_lon_lat_degrees( 0.0, 0.0);

    let north = p0.geodesic_bearing( &GeoPoint3::from_lon_lat_degrees( 0.0, 0.001));
    let east = p0.geodesic_bearing( &GeoPoint3::from_lon_lat_degrees( 0.001, 0.0));
    let south = p0.geodesic_bearing( &GeoPoint3::from_lon_lat_degrees( 0.0, -0.001));
    let west = p0.geodesic_bearing( &GeoPoint3::from_lon_lat_degrees( -0.001, 0.0));
    println!("bearings: north={north:?}, east={east:?}, south={south:?}, west={west:?}");

    assert!( north.abs_diff( &Angle360::from_degrees(0.0)) < 1e-6);
    assert!( (east.degrees() - 90.0).abs() < 1e-6);
    assert!( (south.degrees() - 180.0).abs() < 1e-6);
    assert!( (west.degrees() - 270.0).abs() < 1e-6);

    for b in [north,east,south,west] {
        assert!( b.degrees() >= 0.0 && b.degrees() < 360.0);
    }
}

#[test]
fn test_geodesic_interpolate() {
    let a = GeoPoint3::from_lon_lat_degrees_alt_meters( -83.698, 42.300, 250.0);
    let b = GeoPoint3::from_lon_lat_degrees_alt_meters( -83.697, 42.301, 260.0);
    let d = a.geodesic_distance( &b).get::<meter>();

    let pts: Vec<GeoPoint3> = (1..=4).map( |i| a.geodesic_interpolate( &b, i as f64 / 5.0)).collect();
    for p in &pts { println!("  {p}") }
    assert_eq!( pts.len(), 4);

    // evenly spaced
    let d0 = a.geodesic_distance( &pts[0]).get::<meter>();
    assert!( (d0 - d/5.0).abs() < 1e-3);
    for w in pts.windows(2) {
        let di = w[0].geodesic_distance( &w[1]).get::<meter>();
        assert!( (di - d/5.0).abs() < 1e-3);
    }
    let dn = pts[3].geodesic_distance( &b).get::<meter>();
    assert!( (dn - d/5.0).abs() < 1e-3);

    // linear altitude
    assert!( (pts[0].altitude_meters() - 252.0).abs() < 1e-9);
    assert!( (pts[3].altitude_meters() - 258.0).abs() < 1e-9);

    let p0 = a.geodesic_interpolate( &b, 0.0);
    assert!( a.geodesic_distance( &p0).get::<meter>() < 1e-6);
    assert_eq!( p0.altitude_meters(), 250.0);
}

#[test]
fn test_serde() {
    let p: GeoPoint3 = serde_json::from_str( r#"{ "longitude": -83.698, "latitude": 42.3 }"#).unwrap();
    println!("deserialized GeoPoint3: {p:?}");
    assert_eq!( p.longitude_degrees(), -83.698);
    assert_eq!( p.altitude_meters(), 0.0);

    let p: GeoPoint3 = serde_json::from_str( r#"{ "x": -83.698, "y": 42.3, "z": 12.5 }"#).unwrap();
    assert_eq!( p.altitude_meters(), 12.5);

    let s = serde_json::to_string( &p).unwrap();
    println!("serialized GeoPoint3: '{s}'");
    assert_eq!( s, r#"{"lon":-83.698,"lat":42.3,"alt":12.5}"#);
}
