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

use std::{fs, path::Path as FsPath};
use geojson::{GeoJson, Geometry, Value};
use uom::si::{f64::Length, length::meter};
use mcity_common::geo::GeoPoint3;

use crate::errors::{path_source, Result};
use crate::invalid_argument;

/// the immutable list of waypoints we follow. A path always has at least one point
#[derive(Debug,Clone)]
pub struct Path {
    waypoints: Vec<GeoPoint3>
}

impl Path {
    pub fn new (waypoints: Vec<GeoPoint3>)->Result<Self> {
        if waypoints.is_empty() { return Err( invalid_argument!("path without waypoints")) }
        Ok( Path { waypoints } )
    }

    pub fn from_lon_lat_degrees (coords: &[(f64,f64)])->Result<Self> {
        Path::new( coords.iter().map( |(lon,lat)| GeoPoint3::from_lon_lat_degrees( *lon, *lat)).collect())
    }

    /// collect all coordinates of a GeoJSON document in order of appearance. This accepts bare geometries,
    /// features and feature collections. A third position ordinate is taken as the elevation in meters
    pub fn from_geojson (geojson: &GeoJson)->Result<Self> {
        let mut waypoints: Vec<GeoPoint3> = Vec::new();

        match geojson {
            GeoJson::Geometry(geometry) => collect_geometry( geometry, &mut waypoints)?,
            GeoJson::Feature(feature) => {
                if let Some(geometry) = &feature.geometry { collect_geometry( geometry, &mut waypoints)? }
            }
            GeoJson::FeatureCollection(fc) => {
                for feature in &fc.features {
                    if let Some(geometry) = &feature.geometry { collect_geometry( geometry, &mut waypoints)? }
                }
            }
        }

        Path::new( waypoints)
    }

    pub fn from_geojson_str (s: &str)->Result<Self> {
        let geojson: GeoJson = s.parse()?;
        Path::from_geojson( &geojson)
    }

    pub fn from_geojson_file (path: impl AsRef<FsPath>)->Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string( path).map_err( |e| path_source( format!("failed to read {path:?}: {e}")))?;
        Path::from_geojson_str( &s)
    }

    pub fn waypoints (&self)->&[GeoPoint3] { self.waypoints.as_slice() }

    pub fn len (&self)->usize { self.waypoints.len() }

    pub fn first (&self)->&GeoPoint3 { &self.waypoints[0] } // we always have at least one waypoint

    /// the sum of the geodesic segment lengths
    pub fn length (&self)->Length {
        let d: f64 = self.waypoints.windows(2).map( |w| w[0].geodesic_distance( &w[1]).get::<meter>()).sum();
        Length::new::<meter>(d)
    }
}

fn collect_geometry (geometry: &Geometry, waypoints: &mut Vec<GeoPoint3>)->Result<()> {
    collect_value( &geometry.value, waypoints)
}

fn collect_value (value: &Value, waypoints: &mut Vec<GeoPoint3>)->Result<()> {
    match value {
        Value::Point(pos) => push_position( &pos[..], waypoints)?,
        Value::MultiPoint(ps) | Value::LineString(ps) => {
            for pos in ps { push_position( &pos[..], waypoints)? }
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            for ps in lines {
                for pos in ps { push_position( &pos[..], waypoints)? }
            }
        }
        Value::MultiPolygon(polygons) => {
            for lines in polygons {
                for ps in lines {
                    for pos in ps { push_position( &pos[..], waypoints)? }
                }
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries { collect_geometry( geometry, waypoints)? }
        }
    }
    Ok(())
}

fn push_position (pos: &[f64], waypoints: &mut Vec<GeoPoint3>)->Result<()> {
    match pos {
        [lon, lat] => waypoints.push( GeoPoint3::from_lon_lat_degrees( *lon, *lat)),
        [lon, lat, elev, ..] => waypoints.push( GeoPoint3::from_lon_lat_degrees_alt_meters( *lon, *lat, *elev)),
        _ => return Err( path_source( format!("position needs at least 2 ordinates: {pos:?}")))
    }
    Ok(())
}
