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

//! crate to broadcast V2X messages for an object that follows a GeoJSON path through the Mcity OCTANE platform.
//!
//! The general flow is
//!   - load a [`Path`] from GeoJSON (any geometry, we follow all coordinates in order)
//!   - pick a [`MessageProfile`] (BSM, PSM), which determines frequency and message shape
//!   - interpolate geodesic points between waypoints so that the object moves with the requested velocity
//!     while we broadcast at the profile frequency ([`PathSampler`])
//!   - send the respective messages in real time to a [`V2xSink`] ([`PathPacer`])

use std::{path::Path as FsPath, time::Duration};
use serde::{Serialize,Deserialize};
use serde::ser::{Serializer, SerializeStruct};
use serde_json::json;
use reqwest::{Client, header::{HeaderMap, HeaderValue, ACCEPT}};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use tracing::debug;

use mcity_common::{angle::Angle360, geo::GeoPoint3, config::{load_config_path, env_value}};

pub mod errors;
use errors::{Result, V2xError};

pub mod path;
pub use path::Path;

pub mod sampler;
pub use sampler::{PathSampler, sample_count, MAX_SEGMENT_SAMPLES};

pub mod profile;
pub use profile::{MessageProfile, BsmConfig, BsmProfile, PsmProfile, ProfileKind};

pub mod sink;
pub use sink::{V2xSink, V2xFrame, OctaneRestSink, ChannelSink, LogSink};

pub mod registry;
pub use registry::{Receiver, Capability, ReceiverRegistry, OctaneReceiverRegistry, StaticReceiverRegistry, resolve_endpoint};

pub mod pacer;
pub use pacer::{PathPacer, PacerState, FollowStats};

/* #region MovingPoint  ************************************************************************************/

/// a position sample of an object that follows a path. Speed is in m/s, heading in degrees
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct MovingPoint {
    pub position: GeoPoint3,
    pub speed: f64,
    pub heading: Angle360,
}

impl MovingPoint {
    pub fn new (position: GeoPoint3, speed: f64, heading: Angle360)->Self {
        MovingPoint { position, speed, heading }
    }

    #[inline] pub fn longitude (&self)->f64 { self.position.longitude_degrees() }
    #[inline] pub fn latitude (&self)->f64 { self.position.latitude_degrees() }
    #[inline] pub fn elevation (&self)->f64 { self.position.altitude_meters() }

    /// a GeoJSON point feature with speed and heading properties
    pub fn to_geojson_feature (&self)->Feature {
        let geometry = Geometry::new( Value::Point( vec![self.longitude(), self.latitude(), self.elevation()]));

        let mut properties = JsonObject::new();
        properties.insert( "speed".to_string(), json!(self.speed));
        properties.insert( "heading".to_string(), json!(self.heading.degrees()));

        Feature { bbox: None, geometry: Some(geometry), id: None, properties: Some(properties), foreign_members: None }
    }
}

impl Serialize for MovingPoint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("MovingPoint", 5)?;
        state.serialize_field("longitude", &self.longitude())?;
        state.serialize_field("latitude", &self.latitude())?;
        state.serialize_field("elevation", &self.elevation())?;
        state.serialize_field("speed", &self.speed)?;
        state.serialize_field("heading", &self.heading)?;
        state.end()
    }
}

pub fn to_feature_collection<'a> (points: impl IntoIterator<Item=&'a MovingPoint>)->FeatureCollection {
    let features: Vec<Feature> = points.into_iter().map( |p| p.to_geojson_feature()).collect();
    FeatureCollection { bbox: None, features, foreign_members: None }
}

/* #endregion MovingPoint */

/* #region config  ******************************************************************************************/

/// environment variables that override config file values
pub const OCTANE_SERVER_ENV: &str = "MCITY_OCTANE_SERVER";
pub const OCTANE_KEY_ENV: &str = "MCITY_OCTANE_KEY";

pub const API_KEY_HEADER: &str = "x-api-key";

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// how to reach the OCTANE REST API. `base_uri` includes the API root path (e.g. "https://octane.mvillage.um.city/api")
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct OctaneConfig {
    pub base_uri: String,
    pub(crate) api_key: String,

    #[serde(default="default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub bsm: BsmConfig,
}

fn default_timeout_secs()->u64 { DEFAULT_TIMEOUT_SECS }

impl OctaneConfig {
    pub fn new (base_uri: impl ToString, api_key: impl ToString)->Self {
        OctaneConfig {
            base_uri: base_uri.to_string().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bsm: BsmConfig::default()
        }
    }

    /// create config solely from environment variables. The server variable only holds the host URL, we add the API root
    pub fn from_env ()->Result<Self> {
        let server = env_value( OCTANE_SERVER_ENV).ok_or_else( || V2xError::Config( format!("{OCTANE_SERVER_ENV} not set")))?;
        let api_key = env_value( OCTANE_KEY_ENV).unwrap_or_default();
        OctaneConfig::new( api_uri( &server), api_key).checked()
    }

    /// load config from a RON file if it exists, otherwise from the environment. Environment variables
    /// override file values in both cases
    pub fn load (path: impl AsRef<FsPath>)->Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            let mut config: OctaneConfig = load_config_path( path)?;
            config.base_uri = config.base_uri.trim_end_matches('/').to_string();
            if let Some(server) = env_value( OCTANE_SERVER_ENV) { config.base_uri = api_uri( &server) }
            if let Some(api_key) = env_value( OCTANE_KEY_ENV) { config.api_key = api_key }
            config.checked()

        } else {
            debug!("no config file {path:?}, using environment");
            OctaneConfig::from_env()
        }
    }

    fn checked (self)->Result<Self> {
        if self.api_key.trim().is_empty() {
            Err( V2xError::Config( "no API key specified".to_string()))
        } else {
            Ok(self)
        }
    }

    pub fn api_key (&self)->&str { self.api_key.as_str() }

    pub fn timeout (&self)->Duration { Duration::from_secs( self.timeout_secs) }
}

fn api_uri (server: &str)->String {
    let server = server.trim_end_matches('/');
    if server.ends_with("/api") { server.to_string() } else { format!("{server}/api") }
}

/// a client for OCTANE requests. The API key header is added per request since clients might be shared
pub fn get_http_client (config: &OctaneConfig)->Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert( ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .default_headers( headers)
        .timeout( config.timeout())
        .build()?;
    Ok(client)
}

/// the API key header value, marked as sensitive so that it does not show up in debug output
pub(crate) fn api_key_header (config: &OctaneConfig)->Result<HeaderValue> {
    let mut value = HeaderValue::from_str( config.api_key())?;
    value.set_sensitive(true);
    Ok(value)
}

/* #endregion config */
