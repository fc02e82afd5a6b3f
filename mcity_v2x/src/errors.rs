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

use thiserror::Error;
use mcity_common::{map_to_opaque_error, config::ConfigError};

pub type Result<T> = std::result::Result<T, V2xError>;

/// mcity_v2x specific error type. Note that we want those to be Clone (e.g. to report the same
/// failure to several parties), hence we map foreign errors into opaque variants that only keep the message
#[derive(Error,Debug,Clone,PartialEq)]
pub enum V2xError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no compatible receiver: {0}")]
    NoCompatibleReceiver(String),

    #[error("sink failure: {0}")]
    SinkFailure(String),

    #[error("unsupported message profile: {0}")]
    UnsupportedMessageProfile(String),

    #[error("path source error: {0}")]
    PathSource(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("IO error: {0}")]
    IO(String),
}

map_to_opaque_error!{ std::io::Error => V2xError::IO }
map_to_opaque_error!{ serde_json::Error => V2xError::Json }
map_to_opaque_error!{ reqwest::Error => V2xError::Http }
map_to_opaque_error!{ http::header::InvalidHeaderValue => V2xError::Http }
map_to_opaque_error!{ geojson::Error => V2xError::PathSource }
map_to_opaque_error!{ ConfigError => V2xError::Config }

pub fn invalid_argument (msg: impl ToString)->V2xError {
    V2xError::InvalidArgument(msg.to_string())
}

pub fn no_compatible_receiver (msg: impl ToString)->V2xError {
    V2xError::NoCompatibleReceiver(msg.to_string())
}

pub fn sink_failure (msg: impl ToString)->V2xError {
    V2xError::SinkFailure(msg.to_string())
}

pub fn path_source (msg: impl ToString)->V2xError {
    V2xError::PathSource(msg.to_string())
}

#[macro_export]
macro_rules! invalid_argument {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::invalid_argument( format!( $fmt $(, $arg)* ))
    };
}
