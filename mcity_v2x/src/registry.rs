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

use std::fmt;
use async_trait::async_trait;
use reqwest::{Client, header::HeaderValue};
use serde::{Serialize, Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use tracing::{info, debug};

use crate::{OctaneConfig, API_KEY_HEADER, api_key_header};
use crate::profile::MessageProfile;
use crate::errors::{Result, no_compatible_receiver};

/* #region receiver types  ***********************************************************************************/

/// what a receiver (RSU) can do. We match protocol and message type case-insensitive
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Capability {
    pub protocol: String,

    #[serde(alias="msgType", alias="messageType", alias="type")]
    pub msg_type: String,

    #[serde(alias="txEnabled", alias="tx", default)]
    pub tx_enabled: bool,
}

impl Capability {
    pub fn new (protocol: impl ToString, msg_type: impl ToString, tx_enabled: bool)->Self {
        Capability { protocol: protocol.to_string(), msg_type: msg_type.to_string(), tx_enabled }
    }

    pub fn supports (&self, profile: &dyn MessageProfile)->bool {
        self.tx_enabled
            && self.protocol.eq_ignore_ascii_case( profile.protocol())
            && self.msg_type.eq_ignore_ascii_case( profile.msg_type())
    }
}

/// a road side unit we can send messages to
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Receiver {
    #[serde(deserialize_with="deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl Receiver {
    pub fn new (id: impl ToString, name: impl ToString, capabilities: Vec<Capability>)->Self {
        Receiver { id: id.to_string(), name: name.to_string(), capabilities }
    }

    pub fn supports (&self, profile: &dyn MessageProfile)->bool {
        self.capabilities.iter().any( |c| c.supports( profile))
    }
}

impl fmt::Display for Receiver {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{:>6}  {:<32}", self.id, self.name)?;
        for c in &self.capabilities {
            write!(f, " {}/{}{}", c.protocol, c.msg_type, if c.tx_enabled {"(tx)"} else {""})?;
        }
        Ok(())
    }
}

/// ids come as numbers or strings
fn deserialize_id<'de,D> (deserializer: D)->std::result::Result<String,D::Error> where D: Deserializer<'de> {
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) => Ok(n.to_string()),
        v => Err( serde::de::Error::custom( format!("invalid receiver id: {v}")))
    }
}

#[derive(Deserialize,Debug)]
#[serde(untagged)]
enum ReceiverList {
    Bare(Vec<Receiver>),
    Wrapped { rsus: Vec<Receiver> }
}

impl From<ReceiverList> for Vec<Receiver> {
    fn from (list: ReceiverList)->Self {
        match list {
            ReceiverList::Bare(v) => v,
            ReceiverList::Wrapped { rsus } => rsus
        }
    }
}

/// parse a registry response, which is either a bare array of receivers or a `{"rsus": [..]}` object
pub fn parse_receivers (json: &str)->Result<Vec<Receiver>> {
    let list: ReceiverList = serde_json::from_str( json)?;
    Ok( list.into())
}

/* #endregion receiver types */

/* #region registries  ***************************************************************************************/

#[async_trait]
pub trait ReceiverRegistry: Send + Sync {
    async fn receivers (&self)->Result<Vec<Receiver>>;
}

/// the receivers known to an OCTANE server
pub struct OctaneReceiverRegistry {
    client: Client,
    base_uri: String,
    api_key: HeaderValue,
}

impl OctaneReceiverRegistry {
    pub fn new (client: Client, config: &OctaneConfig)->Result<Self> {
        let api_key = api_key_header( config)?;
        Ok( OctaneReceiverRegistry { client, base_uri: config.base_uri.clone(), api_key })
    }
}

#[async_trait]
impl ReceiverRegistry for OctaneReceiverRegistry {
    async fn receivers (&self)->Result<Vec<Receiver>> {
        let uri = format!("{}/v2x/rsu", self.base_uri);
        debug!("GET {uri}");

        let response = self.client.get( uri.as_str())
            .header( API_KEY_HEADER, self.api_key.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        parse_receivers( &body)
    }
}

/// a fixed set of receivers
#[derive(Debug,Clone,Default)]
pub struct StaticReceiverRegistry {
    receivers: Vec<Receiver>
}

impl StaticReceiverRegistry {
    pub fn new (receivers: Vec<Receiver>)->Self {
        StaticReceiverRegistry { receivers }
    }
}

#[async_trait]
impl ReceiverRegistry for StaticReceiverRegistry {
    async fn receivers (&self)->Result<Vec<Receiver>> {
        Ok( self.receivers.clone())
    }
}

/* #endregion registries */

/// get the endpoint to send profile messages to. An explicit receiver id takes precedence, otherwise
/// we use the first receiver of the registry that can transmit messages of the profile type
pub async fn resolve_endpoint (profile: &dyn MessageProfile, receiver_id: Option<&str>, registry: Option<&dyn ReceiverRegistry>)->Result<String> {
    if let Some(id) = receiver_id {
        return Ok( profile.endpoint( id))
    }

    let Some(registry) = registry else {
        return Err( no_compatible_receiver( "no receiver id and no registry"))
    };

    let receivers = registry.receivers().await?;
    match receivers.iter().find( |r| r.supports( profile)) {
        Some(receiver) => {
            info!("using receiver {} ({}) for {}", receiver.id, receiver.name, profile.name());
            Ok( profile.endpoint( &receiver.id))
        }
        None => Err( no_compatible_receiver( format!("none of {} receivers supports {}/{}",
                                                     receivers.len(), profile.protocol(), profile.msg_type())))
    }
}
