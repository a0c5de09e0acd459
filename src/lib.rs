// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod categorize;
pub mod cli;
pub mod commands;
pub mod loader;
pub mod models;
pub mod utils;
