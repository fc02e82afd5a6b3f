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

use std::iter::FusedIterator;
use uom::si::f64::{Frequency, Length, Velocity};
use uom::si::{frequency::hertz, length::meter, velocity::meter_per_second};
use mcity_common::{ensure, geo::GeoPoint3};

use crate::MovingPoint;
use crate::errors::Result;
use crate::invalid_argument;

/// upper bound for the number of points we interpolate between two waypoints
pub const MAX_SEGMENT_SAMPLES: usize = u32::MAX as usize;

/// number of points we have to broadcast for a segment of given length so that an object moving with
/// `velocity` is reported with `frequency`. We always round up, i.e. we never sample sparser than required
/// (at the cost of slightly under-reporting the distance between samples on short segments)
pub fn sample_count (distance: Length, velocity: Velocity, frequency: Frequency)->Result<usize> {
    let v = velocity.get::<meter_per_second>();
    ensure!( v.is_finite() && v > 0.0, invalid_argument!("velocity has to be a positive number: {v}"));

    let f = frequency.get::<hertz>();
    ensure!( f.is_finite() && f > 0.0, invalid_argument!("frequency has to be a positive number: {f}"));

    let d = distance.get::<meter>();
    if d > 0.0 {
        let n = ((d / v) * f).ceil();
        ensure!( n.is_finite() && n <= MAX_SEGMENT_SAMPLES as f64,
                 invalid_argument!("{d}m at {v}m/s and {f}Hz exceeds {MAX_SEGMENT_SAMPLES} samples"));
        Ok( n as usize)
    } else {
        Ok(0)
    }
}

/// the currently interpolated waypoint pair
struct Segment {
    start: GeoPoint3,
    end: GeoPoint3,
    n_samples: usize,
    next_sample: usize // 1-based
}

/// lazy iterator over the [`MovingPoint`]s of a waypoint sequence.
///
/// For each waypoint pair we compute `sample_count` evenly spaced points on the connecting geodesic
/// (excluding the waypoints themselves). Each point is reported with the bearing from its predecessor as
/// heading, which means the very first interpolated point of the path is not reported - it only serves
/// as the reference for the second one. Segment counts are computed on construction, the points themselves
/// on demand, hence callers that stop iterating don't pay for the rest of the path.
pub struct PathSampler<'a> {
    waypoints: &'a [GeoPoint3],
    speed: f64, // m/s
    counts: Vec<usize>, // counts[i] is for waypoints[i]->waypoints[i+1]

    next_waypoint: usize, // end index of the next segment
    segment: Option<Segment>,
    prev_point: Option<GeoPoint3>,
}

impl<'a> PathSampler<'a> {
    pub fn new (waypoints: &'a [GeoPoint3], velocity: Velocity, frequency: Frequency)->Result<Self> {
        // check velocity and frequency even if there is no segment
        sample_count( Length::new::<meter>(0.0), velocity, frequency)?;

        let counts = waypoints.windows(2).map( |w| {
            if w[0].same_position( &w[1]) {
                Ok(0) // consecutive duplicates
            } else {
                sample_count( w[0].geodesic_distance( &w[1]), velocity, frequency)
            }
        }).collect::<Result<Vec<usize>>>()?;

        Ok( PathSampler::with_counts( waypoints, velocity.get::<meter_per_second>(), counts))
    }

    /// a sampler for already validated segment counts
    pub(crate) fn with_counts (waypoints: &'a [GeoPoint3], speed: f64, counts: Vec<usize>)->Self {
        PathSampler { waypoints, speed, counts, next_waypoint: 1, segment: None, prev_point: None }
    }

    pub(crate) fn segment_counts (&self)->&[usize] { &self.counts }

    /// total number of points this sampler reports
    pub fn n_points (&self)->usize {
        self.counts.iter().sum::<usize>().saturating_sub(1)
    }

    fn next_segment (&mut self)->Option<Segment> {
        if self.next_waypoint < self.waypoints.len() {
            let start = self.waypoints[self.next_waypoint - 1];
            let end = self.waypoints[self.next_waypoint];
            let n_samples = self.counts[self.next_waypoint - 1];
            self.next_waypoint += 1;

            Some( Segment { start, end, n_samples, next_sample: 1 })

        } else {
            None
        }
    }
}

impl<'a> Iterator for PathSampler<'a> {
    type Item = MovingPoint;

    fn next (&mut self)->Option<MovingPoint> {
        loop {
            if let Some(seg) = &mut self.segment {
                if seg.next_sample <= seg.n_samples {
                    let ratio = seg.next_sample as f64 / (seg.n_samples as f64 + 1.0);
                    seg.next_sample += 1;

                    let point = seg.start.geodesic_interpolate( &seg.end, ratio);
                    if let Some(prev) = self.prev_point.replace( point) {
                        let heading = prev.geodesic_bearing( &point);
                        return Some( MovingPoint::new( point, self.speed, heading))
                    }
                    continue; // first point of path only seeds prev_point
                }
            }

            self.segment = Some( self.next_segment()?);
        }
    }
}

impl<'a> FusedIterator for PathSampler<'a> {}
