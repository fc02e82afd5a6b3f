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

//! angle normalization and a compass angle type for headings and bearings

use std::{fmt, ops};
use serde::{Serialize, Deserialize, Serializer, Deserializer, de};

/// fold latitude degrees into [-90,90]
#[inline]
pub fn normalize_90 (d: f64)->f64 {
    let x = normalize_180( d);
    if x > 90.0 { 180.0 - x } else if x < -90.0 { -180.0 - x } else { x }
}

/// wrap longitude degrees into [-180,180]
#[inline]
pub fn normalize_180 (d: f64)->f64 {
    let x = d % 360.0;
    if x > 180.0 { x - 360.0 } else if x < -180.0 { x + 360.0 } else { x }
}

/// wrap degrees into [0,360). Note that `360.0 + x` can round up to 360.0 for tiny negative x
#[inline]
pub fn normalize_360 (d: f64)->f64 {
    let x = d % 360.0;
    if x < 0.0 {
        let y = 360.0 + x;
        if y >= 360.0 { 0.0 } else { y }
    } else {
        x + 0.0 // turns -0.0 into 0.0
    }
}

/// a compass angle in degrees, always within [0,360)
#[derive(Clone,Copy,PartialEq,PartialOrd,Default)]
pub struct Angle360(f64);

impl Angle360 {
    pub fn from_degrees (deg: f64)->Self { Angle360( normalize_360( deg)) }

    #[inline] pub fn degrees (&self)->f64 { self.0 }

    /// the smaller of the two angles between self and other, in [0,180]
    pub fn abs_diff (&self, other: &Angle360)->f64 {
        let d = (self.0 - other.0).abs();
        if d > 180.0 { 360.0 - d } else { d }
    }
}

impl From<Angle360> for f64 {
    fn from (a: Angle360)->f64 { a.0 }
}

impl ops::Add for Angle360 {
    type Output = Angle360;
    fn add (self, rhs: Angle360)->Angle360 { Angle360::from_degrees( self.0 + rhs.0) }
}

impl ops::Sub for Angle360 {
    type Output = Angle360;
    fn sub (self, rhs: Angle360)->Angle360 { Angle360::from_degrees( self.0 - rhs.0) }
}

impl fmt::Display for Angle360 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}°", self.0) }
}

impl fmt::Debug for Angle360 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "Angle360({})", self.0) }
}

impl Serialize for Angle360 {
    fn serialize<S>(&self, serializer: S)->Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64( self.0)
    }
}

/// we accept [0..360] degrees. 360 is mapped to 0
impl<'de> Deserialize<'de> for Angle360 {
    fn deserialize<D>(deserializer: D)->Result<Angle360, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize( deserializer)?;
        if (0.0..=360.0).contains( &deg) {
            Ok( Angle360::from_degrees( deg))
        } else {
            Err( de::Error::custom( format!("compass angle out of range [0..360]: {deg}")))
        }
    }
}
