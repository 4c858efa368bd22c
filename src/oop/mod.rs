// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Entities built from a fixed schema plus open-ended extension attributes.

mod race_car;

pub use race_car::RaceCar;
