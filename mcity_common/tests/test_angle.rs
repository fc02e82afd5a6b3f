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

use mcity_common::angle::*;
use mcity_common::MinMaxAvg;

#[test]
fn test_normalize_360() {
    assert_eq!( normalize_360( 0.0), 0.0);
    assert_eq!( normalize_360( 360.0), 0.0);
    assert_eq!( normalize_360( -90.0), 270.0);
    assert_eq!( normalize_360( 450.0), 90.0);

    // these would round to 360.0 or yield -0.0 with a naive 360+x
    let x = normalize_360( -1e-15);
    println!("normalize_360(-1e-15) = {x}");
    assert!( x >= 0.0 && x < 360.0);
    assert!( normalize_360( -0.0).is_sign_positive());
}

#[test]
fn test_angle360() {
    let a = Angle360::from_degrees( -10.0);
    assert_eq!( a.degrees(), 350.0);
    println!("display: {a}, debug: {a:?}");

    let b = Angle360::from_degrees( 5.0);
    assert_eq!( a.abs_diff( &b), 15.0);
    assert_eq!( (a + b).degrees(), 355.0);
    assert_eq!( (b - a).degrees(), 15.0);

    let h: Angle360 = serde_json::from_str("359.5").unwrap();
    assert_eq!( h.degrees(), 359.5);
    assert!( serde_json::from_str::<Angle360>("361.0").is_err());

    assert_eq!( Angle360::from_degrees( 360.0), Angle360::default());
}

#[test]
fn test_normalize_lon_lat() {
    assert_eq!( normalize_180( 200.0), -160.0);
    assert_eq!( normalize_180( -190.0), 170.0);
    assert_eq!( normalize_180( 180.0), 180.0);

    assert_eq!( normalize_90( 100.0), 80.0);
    assert_eq!( normalize_90( -95.0), -85.0);
    assert_eq!( normalize_90( 42.3), 42.3);
}

#[test]
fn test_min_max_avg() {
    let mut mma = MinMaxAvg::new();
    assert!( mma.is_empty());

    for x in [2.0, 4.0, 6.0] { mma.add(x) }
    println!("{mma}");
    assert_eq!( mma.n, 3);
    assert_eq!( mma.min, 2.0);
    assert_eq!( mma.max, 6.0);
    assert!( (mma.avg() - 4.0).abs() < 1e-12);
    assert!( MinMaxAvg::new().avg().is_nan());
}
