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

use std::{net::SocketAddr, sync::{Arc, Mutex}};
use axum::{Router, Json, routing::{get, post}, extract::{State, Path as UriPath}, http::{HeaderMap, StatusCode}};
use serde_json::{json, Value as JsonValue};
use uom::si::{f64::Velocity, velocity::meter_per_second};
use mcity_v2x::{*, errors::V2xError};

// run with "cargo test -p mcity_v2x --test test_octane -- --nocapture"

const API_KEY: &str = "reticulatingsplines";

#[derive(Clone,Default)]
struct ServerState {
    posts: Arc<Mutex<Vec<(String,JsonValue)>>>
}

fn authorized (headers: &HeaderMap)->bool {
    headers.get( API_KEY_HEADER).and_then( |v| v.to_str().ok()) == Some(API_KEY)
}

async fn list_rsus (headers: HeaderMap)->Result<Json<JsonValue>,StatusCode> {
    if !authorized( &headers) { return Err(StatusCode::UNAUTHORIZED) }

    Ok( Json( json!({
        "rsus": [
            { "id": 1, "name": "Pontiac Trail", "capabilities": [ { "protocol": "J2735", "msgType": "SPAT", "txEnabled": true } ] },
            { "id": 2, "name": "Roundabout", "capabilities": [ { "protocol": "J2735", "msgType": "BSM", "txEnabled": true } ] }
        ]
    })))
}

async fn post_bsm (State(state): State<ServerState>, UriPath(id): UriPath<String>, headers: HeaderMap, Json(msg): Json<JsonValue>)->StatusCode {
    if !authorized( &headers) { return StatusCode::UNAUTHORIZED }

    if let Ok(mut posts) = state.posts.lock() {
        posts.push( (id, msg));
    }
    StatusCode::CREATED
}

async fn spawn_server (state: ServerState)->SocketAddr {
    let app = Router::new()
        .route( "/api/v2x/rsu", get( list_rsus))
        .route( "/api/v2x/rsu/{id}/bsm", post( post_bsm))
        .with_state( state);

    let listener = tokio::net::TcpListener::bind( "127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn( async move { axum::serve( listener, app).await.unwrap() });
    addr
}

fn short_path ()->Path {
    Path::from_lon_lat_degrees( &[(-83.6983, 42.3005), (-83.69825, 42.3005)]).unwrap() // ~4m
}

#[tokio::test]
async fn test_follow_octane() {
    let state = ServerState::default();
    let addr = spawn_server( state.clone()).await;

    let config = OctaneConfig::new( format!("http://{addr}/api"), API_KEY);
    let client = get_http_client( &config).unwrap();
    let mut sink = OctaneRestSink::new( client.clone(), &config).unwrap();
    let registry = OctaneReceiverRegistry::new( client, &config).unwrap();

    let receivers = registry.receivers().await.unwrap();
    for r in &receivers { println!("{r}") }
    assert_eq!( receivers.len(), 2);

    let mut pacer = PathPacer::new( short_path(), Velocity::new::<meter_per_second>(5.0), Box::new( BsmProfile::default())).unwrap();
    let stats = pacer.follow( &mut sink, None, Some(&registry)).await.unwrap();
    println!("{stats}");

    assert_eq!( stats.endpoint, "/v2x/rsu/2/bsm");
    assert!( stats.n_emitted > 0);

    let posts = state.posts.lock().unwrap();
    assert_eq!( posts.len(), stats.n_emitted);
    for (i, (id, msg)) in posts.iter().enumerate() {
        assert_eq!( id, "2");
        assert_eq!( msg["idTemporary"].as_u64(), Some( i as u64 + 1));
        assert_eq!( msg["speed"], 5.0);
    }
}

#[tokio::test]
async fn test_rejected_key() {
    let state = ServerState::default();
    let addr = spawn_server( state.clone()).await;

    let config = OctaneConfig::new( format!("http://{addr}/api/"), "wrong-key");
    let client = get_http_client( &config).unwrap();

    let registry = OctaneReceiverRegistry::new( client.clone(), &config).unwrap();
    assert!( matches!( registry.receivers().await, Err(V2xError::Http(_))));

    let mut sink = OctaneRestSink::new( client, &config).unwrap();
    let mut pacer = PathPacer::new( short_path(), Velocity::new::<meter_per_second>(5.0), Box::new( BsmProfile::default())).unwrap();
    let res = pacer.follow( &mut sink, Some("2"), None).await;
    println!("result: {res:?}");

    assert!( matches!( res, Err(V2xError::SinkFailure(_))));
    assert_eq!( pacer.state(), PacerState::Failed);
    assert!( state.posts.lock().unwrap().is_empty());
}

#[test]
fn test_config() {
    let config = OctaneConfig::new( "http://localhost:8080/api/", "secret");
    assert_eq!( config.base_uri, "http://localhost:8080/api");
    assert_eq!( config.api_key(), "secret");
    assert_eq!( config.timeout().as_secs(), 5);
    assert_eq!( config.bsm, BsmConfig::default());

    let ron = r#"OctaneConfig(
        base_uri: "https://octane.example.org/api",
        api_key: "k",
        bsm: BsmConfig( id: "Test 1.0", vehicleLength: 5.2 ),
    )"#;
    let config: OctaneConfig = mcity_common::config::from_ron_bytes( ron.as_bytes()).unwrap();
    println!("{config:?}");
    assert_eq!( config.timeout_secs, 5);
    assert_eq!( config.bsm.id, "Test 1.0");
    assert_eq!( config.bsm.vehicle_length, 5.2);
    assert_eq!( config.bsm.id_fixed, "1212");
}
