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

//! domain agnostic support for the mcity crates: normalized angles, WGS84 geodesic points,
//! RON config loading and some small utilities

pub mod macros;
pub mod angle;
pub mod geo;
pub mod datetime;
pub mod config;

/// running statistics of observed values, e.g. send latencies
#[derive(Debug,Clone,Default)]
pub struct MinMaxAvg {
    pub n: usize,
    pub min: f64,
    pub max: f64,
    sum: f64,
}

impl MinMaxAvg {
    pub fn new ()->Self { MinMaxAvg::default() }

    pub fn add (&mut self, x: f64) {
        if self.n == 0 {
            self.min = x;
            self.max = x;
        } else {
            self.min = self.min.min( x);
            self.max = self.max.max( x);
        }
        self.sum += x;
        self.n += 1;
    }

    pub fn is_empty (&self)->bool { self.n == 0 }

    /// mean of all observations, NaN if there are none
    pub fn avg (&self)->f64 {
        if self.n > 0 { self.sum / self.n as f64 } else { f64::NAN }
    }
}

impl std::fmt::Display for MinMaxAvg {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>)->std::fmt::Result {
        if self.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{:.3}..{:.3} (avg {:.3}, n={})", self.min, self.max, self.avg(), self.n)
        }
    }
}
