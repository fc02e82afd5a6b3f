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

//! this module provides point operations on the WGS84 ellipsoid surface.
//! We use the [geo](https://docs.rs/geo/latest/geo/index.html) crate for the geodesic algorithms (Karney) and
//! wrap its `Point` in a new type that adds altitude, units of measure ([uom](https://docs.rs/uom/latest/uom/))
//! and normalized bearings.

use std::fmt;
use serde::{Serialize,Deserialize};

use geo::{Bearing, Distance, Geodesic, InterpolatePoint, Point};

use uom::si::f64::Length;
use uom::si::length::meter;

use crate::angle::{normalize_180, normalize_90, Angle360};

/* #region GeoPoint3 ***********************************************************************************************/

/// 3 dimensional point given by longitude, latitude (both in degrees) and altitude above ellipsoid surface.
/// Geodesic computations only use longitude and latitude, altitude is carried along
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="LonLatAlt", into="LonLatAlt")]
pub struct GeoPoint3 {
    point: Point,
    alt: f64
}

impl GeoPoint3 {
    pub fn from_lon_lat_degrees_alt_meters (lon: f64, lat: f64, alt: f64) -> Self {
        GeoPoint3 {
            point: Point::new( normalize_180(lon), normalize_90(lat)),
            alt
        }
    }

    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint3::from_lon_lat_degrees_alt_meters( lon, lat, 0.0)
    }

    #[inline] pub fn longitude_degrees(&self) -> f64 { self.point.x() }
    #[inline] pub fn latitude_degrees(&self) -> f64 { self.point.y() }
    #[inline] pub fn altitude_meters(&self) -> f64 { self.alt }

    /// do we have the same surface position (ignoring altitude)
    pub fn same_position (&self, other: &GeoPoint3) -> bool { self.point == other.point }

    /// ellipsoidal (WGS84) surface distance
    pub fn geodesic_distance (&self, other: &GeoPoint3) -> Length {
        Length::new::<meter>( Geodesic.distance( self.point, other.point))
    }

    /// initial bearing of the geodesic from self to other, normalized to [0,360)
    pub fn geodesic_bearing (&self, other: &GeoPoint3) -> Angle360 {
        Angle360::from_degrees( Geodesic.bearing( self.point, other.point))
    }

    /// the point at `ratio` [0..1] of the geodesic from self to other. Altitude is interpolated linearly
    pub fn geodesic_interpolate (&self, other: &GeoPoint3, ratio: f64) -> GeoPoint3 {
        let point = Geodesic.point_at_ratio_between( self.point, other.point, ratio);
        let alt = self.alt + (other.alt - self.alt) * ratio;
        GeoPoint3 { point, alt }
    }
}

impl fmt::Display for GeoPoint3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.longitude_degrees(),self.latitude_degrees(), self.altitude_meters())
    }
}

/// serde representation of GeoPoint3. Note we support alternative input field names so that we can
/// directly read data that was serialized by `geo` types ("x", "y") or other sources
#[derive(Serialize,Deserialize)]
struct LonLatAlt {
    #[serde(alias="longitude", alias="x")]
    lon: f64,

    #[serde(alias="latitude", alias="y")]
    lat: f64,

    #[serde(default, alias="altitude", alias="elevation", alias="z")]
    alt: f64
}

impl From<LonLatAlt> for GeoPoint3 {
    fn from (p: LonLatAlt) -> Self { GeoPoint3::from_lon_lat_degrees_alt_meters( p.lon, p.lat, p.alt) }
}

impl From<GeoPoint3> for LonLatAlt {
    fn from (p: GeoPoint3) -> Self { LonLatAlt { lon: p.longitude_degrees(), lat: p.latitude_degrees(), alt: p.alt } }
}

/* #endregion GeoPoint3 */
