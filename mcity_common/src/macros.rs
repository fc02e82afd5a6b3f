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

//! error handling macros shared by the mcity crates

/// implement `From<E>` for one of our error enums by storing the message of `E` in a `String` variant.
/// This keeps our errors `Clone` even if the source is not
/// ```ignore
/// map_to_opaque_error!{ reqwest::Error => V2xError::Http }
/// ```
#[macro_export]
macro_rules! map_to_opaque_error {
    ($src:ty => $target:ident :: $variant:ident) => {
        impl From<$src> for $target {
            fn from (e: $src)->Self { $target::$variant( e.to_string()) }
        }
    };
}
pub use map_to_opaque_error;

/// shorthand for a `thiserror` enum where each variant is followed by its message format
/// ```ignore
/// define_error!{ pub ConfigError =
///   IOError( #[from] std::io::Error ) : "config IO error: {0}",
///   ParseError(String) : "config parse error: {0}"
/// }
/// ```
#[macro_export]
macro_rules! define_error {
    ($vis:vis $name:ident = $( $variant:ident ( $( $( #[$attr:meta] )? $ty:ty ),* ) : $fmt:literal ),* $(,)?) => {
        #[derive(thiserror::Error,Debug)]
        $vis enum $name {
            $( #[error($fmt)] $variant ( $( $(#[$attr])? $ty ),* ) ),*
        }
    }
}
pub use define_error;

/// return `Err(err)` from the enclosing function unless `cond` holds
/// ```ignore
/// ensure!( v > 0.0, invalid_argument!("velocity {v} <= 0"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) { return Err( $err.into()) }
    };
}
pub use ensure;
