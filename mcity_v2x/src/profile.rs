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

use std::time::Duration;
use serde::{Serialize,Deserialize};
use serde_json::Value as JsonValue;
use uom::si::{f64::Frequency, frequency::hertz};
use strum::{EnumString, IntoStaticStr};
use clap::ValueEnum;

use crate::MovingPoint;
use crate::errors::{Result, V2xError};

pub const J2735: &str = "J2735";

/// the policy for one kind of V2X message (SAE J2735). A profile determines how often we broadcast,
/// where we send messages to and what the payload looks like
pub trait MessageProfile: Send + Sync {
    fn name (&self)->&'static str;

    /// protocol and message type are used to find compatible receivers
    fn protocol (&self)->&str { J2735 }
    fn msg_type (&self)->&str;

    fn frequency (&self)->Frequency;

    fn time_per_msg (&self)->Duration {
        Duration::from_secs_f64( 1.0 / self.frequency().get::<hertz>())
    }

    /// the REST endpoint (relative to the API root) for a given receiver (RSU) id
    fn endpoint (&self, receiver_id: &str)->String;

    /// create the message payload for a position sample. This can have side effects such as incrementing
    /// message counters
    fn to_message (&mut self, point: &MovingPoint)->Result<JsonValue>;
}

/* #region BSM  **********************************************************************************************/

/// the static vehicle parameters of the BSMs we send
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase", default)]
pub struct BsmConfig {
    pub id: String,
    pub id_fixed: String,
    pub message_set: String,
    pub vehicle_length: f64, // m
    pub vehicle_width: f64,  // m
}

impl Default for BsmConfig {
    fn default()->Self {
        BsmConfig {
            id: "PathFollower 0.1".to_string(),
            id_fixed: "1212".to_string(),
            message_set: "J2735_200612".to_string(),
            vehicle_length: 4.5,
            vehicle_width: 1.83,
        }
    }
}

#[derive(Serialize,Debug)]
#[serde(rename_all="camelCase")]
struct BsmMessage<'a> {
    id_temporary: u64,
    longitude: f64,
    latitude: f64,
    elevation: f64,
    speed: f64,
    heading: f64,

    #[serde(flatten)]
    vehicle: &'a BsmConfig
}

/// Basic Safety Message, sent at 10Hz
#[derive(Debug)]
pub struct BsmProfile {
    config: BsmConfig,
    temp_id: u64, // last idTemporary we used
}

impl BsmProfile {
    pub const FREQUENCY_HZ: f64 = 10.0;

    pub fn new (config: BsmConfig)->Self {
        BsmProfile { config, temp_id: 0 }
    }

    pub fn config (&self)->&BsmConfig { &self.config }
}

impl Default for BsmProfile {
    fn default()->Self { BsmProfile::new( BsmConfig::default()) }
}

impl MessageProfile for BsmProfile {
    fn name (&self)->&'static str { "BSM" }

    fn msg_type (&self)->&str { "BSM" }

    fn frequency (&self)->Frequency { Frequency::new::<hertz>( Self::FREQUENCY_HZ) }

    fn endpoint (&self, receiver_id: &str)->String {
        format!("/v2x/rsu/{receiver_id}/bsm")
    }

    fn to_message (&mut self, point: &MovingPoint)->Result<JsonValue> {
        self.temp_id += 1;

        let msg = BsmMessage {
            id_temporary: self.temp_id,
            longitude: point.longitude(),
            latitude: point.latitude(),
            elevation: point.elevation(),
            speed: point.speed,
            heading: point.heading.degrees(),
            vehicle: &self.config
        };
        Ok( serde_json::to_value( &msg)? )
    }
}

/* #endregion BSM */

/* #region PSM  **********************************************************************************************/

/// Pedestrian Safety Message, sent at 5Hz. We don't have a payload shape for PSMs yet
#[derive(Debug,Default)]
pub struct PsmProfile {}

impl PsmProfile {
    pub const FREQUENCY_HZ: f64 = 5.0;

    pub fn new ()->Self { PsmProfile {} }
}

impl MessageProfile for PsmProfile {
    fn name (&self)->&'static str { "PSM" }

    fn msg_type (&self)->&str { "PSM" }

    fn frequency (&self)->Frequency { Frequency::new::<hertz>( Self::FREQUENCY_HZ) }

    fn endpoint (&self, receiver_id: &str)->String {
        format!("/v2x/rsu/{receiver_id}/psm")
    }

    fn to_message (&mut self, _point: &MovingPoint)->Result<JsonValue> {
        Err( V2xError::UnsupportedMessageProfile( "no PSM payload format".to_string()))
    }
}

/* #endregion PSM */

/// the profiles we can select by name
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,EnumString,IntoStaticStr,ValueEnum)]
#[strum(serialize_all="lowercase", ascii_case_insensitive)]
#[serde(rename_all="lowercase")]
pub enum ProfileKind {
    Bsm,
    Psm
}

impl ProfileKind {
    pub fn create (&self, bsm_config: &BsmConfig)->Box<dyn MessageProfile> {
        match self {
            ProfileKind::Bsm => Box::new( BsmProfile::new( bsm_config.clone())),
            ProfileKind::Psm => Box::new( PsmProfile::new())
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>)->std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{s}")
    }
}
