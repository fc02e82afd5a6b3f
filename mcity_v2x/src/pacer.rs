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

use std::{fmt, time::Duration};
use tokio::time::{sleep, Instant};
use uom::si::{f64::Velocity, frequency::hertz, velocity::meter_per_second};
use tracing::{info, debug, warn};
use mcity_common::{MinMaxAvg, ensure, datetime::as_millis_f64};

use crate::{Path, PathSampler};
use crate::profile::MessageProfile;
use crate::sink::V2xSink;
use crate::registry::{ReceiverRegistry, resolve_endpoint};
use crate::errors::{Result, V2xError, sink_failure};
use crate::invalid_argument;

/// where a [`PathPacer`] is in its life cycle. `Completed` and `Failed` are terminal
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PacerState {
    NotStarted,
    ResolvingEndpoint,
    Streaming,
    Completed,
    Failed
}

/// what we report after successfully following a path
#[derive(Debug,Clone)]
pub struct FollowStats {
    pub endpoint: String,
    pub n_emitted: usize,
    pub elapsed: Duration,
    pub send_latency: MinMaxAvg, // in milliseconds
    pub n_overruns: usize, // intervals in which sending took longer than the message period
}

impl fmt::Display for FollowStats {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "sent {} messages to {} in {:.3}s, send latency [ms]: {}, overruns: {}",
               self.n_emitted, self.endpoint, self.elapsed.as_secs_f64(), self.send_latency, self.n_overruns)
    }
}

/// follows a [`Path`] with a given velocity and broadcasts position messages in real time.
///
/// The message profile determines the broadcast frequency, hence how many points we interpolate between
/// waypoints. Points are computed lazily while we stream, and we sleep for the remainder of each message
/// period after the send returned. If sending takes longer than the period we continue immediately, without
/// trying to catch up later.
///
/// A pacer is single-shot: [`PathPacer::follow`] can only be called once. Use independent pacers to
/// follow several paths concurrently.
pub struct PathPacer {
    path: Path,
    velocity: Velocity,
    profile: Box<dyn MessageProfile>,
    segment_counts: Vec<usize>,
    state: PacerState,
}

impl PathPacer {
    pub fn new (path: Path, velocity: Velocity, profile: Box<dyn MessageProfile>)->Result<Self> {
        let v = velocity.get::<meter_per_second>();
        ensure!( v.is_finite() && v > 0.0, invalid_argument!("velocity has to be a positive number: {v}"));

        let f = profile.frequency().get::<hertz>();
        ensure!( f.is_finite() && f > 0.0, invalid_argument!("{} frequency has to be a positive number: {f}", profile.name()));

        // this also rejects velocities that are too small to sample the path
        let segment_counts = PathSampler::new( path.waypoints(), velocity, profile.frequency())?.segment_counts().to_vec();

        Ok( PathPacer { path, velocity, profile, segment_counts, state: PacerState::NotStarted })
    }

    pub fn state (&self)->PacerState { self.state }

    pub fn path (&self)->&Path { &self.path }

    pub fn velocity (&self)->Velocity { self.velocity }

    pub fn profile (&self)->&dyn MessageProfile { self.profile.as_ref() }

    pub fn time_per_msg (&self)->Duration { self.profile.time_per_msg() }

    /// a new iterator over the points we broadcast. This does not change the pacer state
    pub fn samples (&self)->PathSampler<'_> {
        PathSampler::with_counts( self.path.waypoints(), self.velocity.get::<meter_per_second>(), self.segment_counts.clone())
    }

    /// resolve the endpoint and stream all path points to `sink`. This returns when the last point
    /// was sent, or on the first error
    pub async fn follow (&mut self, sink: &mut dyn V2xSink, receiver_id: Option<&str>, registry: Option<&dyn ReceiverRegistry>)->Result<FollowStats> {
        if self.state != PacerState::NotStarted {
            return Err( invalid_argument!("pacer already used ({:?})", self.state))
        }

        self.state = PacerState::ResolvingEndpoint;
        let endpoint = match resolve_endpoint( self.profile.as_ref(), receiver_id, registry).await {
            Ok(endpoint) => endpoint,
            Err(e) => {
                self.state = PacerState::Failed;
                return Err(e)
            }
        };

        self.state = PacerState::Streaming;
        match self.stream( sink, endpoint).await {
            Ok(stats) => {
                self.state = PacerState::Completed;
                info!("{stats}");
                Ok(stats)
            }
            Err(e) => {
                self.state = PacerState::Failed;
                warn!("following path aborted: {e}");
                Err(e)
            }
        }
    }

    async fn stream (&mut self, sink: &mut dyn V2xSink, endpoint: String)->Result<FollowStats> {
        let period = self.profile.time_per_msg();
        let samples = PathSampler::with_counts( self.path.waypoints(), self.velocity.get::<meter_per_second>(), self.segment_counts.clone());
        info!("streaming {} {} messages to {} every {:?}", samples.n_points(), self.profile.name(), endpoint, period);

        let mut send_latency = MinMaxAvg::new();
        let mut n_emitted = 0;
        let mut n_overruns = 0;

        let t_start = Instant::now();
        let mut t_interval = t_start; // point generation is part of the interval

        for point in samples {
            let msg = self.profile.to_message( &point)?;

            let t_send = Instant::now();
            sink.send( &endpoint, &msg).await.map_err( |e| match e {
                V2xError::SinkFailure(_) => e,
                other => sink_failure( other)
            })?;
            send_latency.add( as_millis_f64( t_send.elapsed()));
            n_emitted += 1;

            let elapsed = t_interval.elapsed();
            if elapsed < period {
                sleep( period - elapsed).await;
            } else {
                n_overruns += 1;
                debug!("message {n_emitted} overrun: {elapsed:?}");
            }
            t_interval = Instant::now();
        }

        Ok( FollowStats { endpoint, n_emitted, elapsed: t_start.elapsed(), send_latency, n_overruns })
    }
}
