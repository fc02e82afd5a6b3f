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

//! loading of RON config files. Unlike the full ODIN lookup mechanism we only support explicit paths,
//! applications can layer environment overrides on top of what we load here

use std::{fs, path::Path};
use serde::Deserialize;
use crate::define_error;

define_error!{ pub ConfigError =
    IOError(#[from] std::io::Error) : "config IO error: {0}",
    ParseError(String) : "config parse error: {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ron::error::SpannedError> for ConfigError {
    fn from (e: ron::error::SpannedError)->Self { ConfigError::ParseError( e.to_string()) }
}

/// deserialize a config value from a RON file
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = fs::read( path.as_ref())?;
    from_ron_bytes( data.as_slice())
}

pub fn from_ron_bytes<C> (data: &[u8]) -> Result<C> where C: for <'a> Deserialize<'a> {
    Ok( ron::de::from_bytes( data)? )
}

/// get a non-empty environment variable value
pub fn env_value (key: &str) -> Option<String> {
    std::env::var( key).ok().filter( |v| !v.trim().is_empty())
}
