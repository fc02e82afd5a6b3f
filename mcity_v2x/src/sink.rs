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

use async_trait::async_trait;
use reqwest::{Client, header::HeaderValue};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokio::sync::mpsc;
use tracing::{info, debug};

use crate::{OctaneConfig, API_KEY_HEADER, api_key_header};
use crate::errors::{Result, sink_failure};

/// where we send the messages to. Sends are awaited, i.e. an implementation should only return once
/// the message was accepted (or rejected) by the receiver
#[async_trait]
pub trait V2xSink: Send {
    async fn send (&mut self, endpoint: &str, msg: &JsonValue)->Result<()>;
}

/// POSTs messages as JSON to the OCTANE REST API
pub struct OctaneRestSink {
    client: Client,
    base_uri: String,
    api_key: HeaderValue,
}

impl OctaneRestSink {
    pub fn new (client: Client, config: &OctaneConfig)->Result<Self> {
        let api_key = api_key_header( config)?;
        Ok( OctaneRestSink { client, base_uri: config.base_uri.clone(), api_key })
    }
}

#[async_trait]
impl V2xSink for OctaneRestSink {
    async fn send (&mut self, endpoint: &str, msg: &JsonValue)->Result<()> {
        let uri = format!("{}{}", self.base_uri, endpoint);
        debug!("POST {uri}");

        self.client.post( uri.as_str())
            .header( API_KEY_HEADER, self.api_key.clone())
            .json( msg)
            .send()
            .await
            .and_then( |response| response.error_for_status())
            .map_err( |e| sink_failure( format!("POST {uri} failed: {e}")))?;
        Ok(())
    }
}

/// what we send to in-process consumers
#[derive(Serialize,Debug,Clone,PartialEq)]
pub struct V2xFrame {
    pub endpoint: String,
    pub payload: JsonValue
}

/// forwards messages over a tokio channel, e.g. to feed them into other components of the same process
pub struct ChannelSink {
    tx: mpsc::Sender<V2xFrame>
}

impl ChannelSink {
    pub fn new (tx: mpsc::Sender<V2xFrame>)->Self {
        ChannelSink { tx }
    }
}

#[async_trait]
impl V2xSink for ChannelSink {
    async fn send (&mut self, endpoint: &str, msg: &JsonValue)->Result<()> {
        let frame = V2xFrame { endpoint: endpoint.to_string(), payload: msg.clone() };
        self.tx.send( frame).await.map_err( |_| sink_failure("receiver channel closed"))
    }
}

/// dry-run sink that only logs messages
#[derive(Debug,Default)]
pub struct LogSink {
    n_frames: usize
}

impl LogSink {
    pub fn new ()->Self { LogSink { n_frames: 0 } }

    pub fn n_frames (&self)->usize { self.n_frames }
}

#[async_trait]
impl V2xSink for LogSink {
    async fn send (&mut self, endpoint: &str, msg: &JsonValue)->Result<()> {
        self.n_frames += 1;
        info!("frame {} -> {}: {}", self.n_frames, endpoint, msg);
        Ok(())
    }
}
