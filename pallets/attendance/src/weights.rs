// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Weights for `pallet_attendance`.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

/// Weight functions needed for `pallet_attendance`.
pub trait WeightInfo {
	fn register_student() -> Weight;
	fn deactivate_student() -> Weight;
	fn mark_present() -> Weight;
	fn mark_absent() -> Weight;
}

/// Weights for `pallet_attendance` using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `Attendance::Admin` (r:1 w:0)
	/// Storage: `Attendance::TagToAccount` (r:1 w:1)
	/// Storage: `Attendance::Students` (r:1 w:1)
	fn register_student() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `76`
		//  Estimated: `3655`
		// Minimum execution time: 12_000_000 picoseconds.
		Weight::from_parts(13_000_000, 3655)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `Attendance::Admin` (r:1 w:0)
	/// Storage: `Attendance::Students` (r:1 w:1)
	fn deactivate_student() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `141`
		//  Estimated: `3655`
		// Minimum execution time: 10_000_000 picoseconds.
		Weight::from_parts(11_000_000, 3655)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	/// Storage: `Attendance::TagToAccount` (r:1 w:0)
	/// Storage: `Attendance::Students` (r:1 w:0)
	/// Storage: `Attendance::RecordCount` (r:1 w:1)
	/// Storage: `Attendance::Records` (r:0 w:1)
	fn mark_present() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `172`
		//  Estimated: `3655`
		// Minimum execution time: 14_000_000 picoseconds.
		Weight::from_parts(15_000_000, 3655)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
	/// Storage: `Attendance::Admin` (r:1 w:0)
	/// Storage: `Attendance::RecordCount` (r:1 w:1)
	/// Storage: `Attendance::Records` (r:0 w:1)
	fn mark_absent() -> Weight {
		// Proof Size summary in bytes:
		//  Measured:  `42`
		//  Estimated: `3497`
		// Minimum execution time: 11_000_000 picoseconds.
		Weight::from_parts(12_000_000, 3497)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(2_u64))
	}
}

// For backwards compatibility and tests.
impl WeightInfo for () {
	fn register_student() -> Weight {
		Weight::from_parts(13_000_000, 3655)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn deactivate_student() -> Weight {
		Weight::from_parts(11_000_000, 3655)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn mark_present() -> Weight {
		Weight::from_parts(15_000_000, 3655)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
	fn mark_absent() -> Weight {
		Weight::from_parts(12_000_000, 3497)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(2_u64))
	}
}
