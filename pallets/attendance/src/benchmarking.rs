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

//! Benchmarks for the attendance pallet.

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use alloc::vec;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

use crate::Pallet as Attendance;

fn setup_admin<T: Config>() -> T::AccountId {
	let admin: T::AccountId = whitelisted_caller();
	Admin::<T>::put(&admin);
	admin
}

/// A bounded byte string of worst-case length.
fn filled<S: Get<u32>>(byte: u8) -> BoundedVec<u8, S> {
	BoundedVec::truncate_from(vec![byte; S::get() as usize])
}

#[benchmarks]
mod benchmarks {
	use super::*;

	#[benchmark]
	fn register_student() {
		let admin = setup_admin::<T>();
		let who: T::AccountId = account("student", 0, 0);

		#[extrinsic_call]
		_(
			RawOrigin::Signed(admin),
			who.clone(),
			filled::<T::MaxIdLength>(1),
			filled::<T::MaxNameLength>(2),
			filled::<T::MaxIdLength>(3),
		);

		assert!(Students::<T>::contains_key(&who));
	}

	#[benchmark]
	fn deactivate_student() {
		let admin = setup_admin::<T>();
		let who: T::AccountId = account("student", 0, 0);
		Attendance::<T>::register_student(
			RawOrigin::Signed(admin.clone()).into(),
			who.clone(),
			filled::<T::MaxIdLength>(1),
			filled::<T::MaxNameLength>(2),
			filled::<T::MaxIdLength>(3),
		)
		.unwrap();

		#[extrinsic_call]
		_(RawOrigin::Signed(admin), who.clone());

		assert!(!Students::<T>::get(&who).unwrap().is_active);
	}

	#[benchmark]
	fn mark_present() {
		let admin = setup_admin::<T>();
		let who: T::AccountId = account("student", 0, 0);
		let tag = filled::<T::MaxIdLength>(3);
		Attendance::<T>::register_student(
			RawOrigin::Signed(admin).into(),
			who,
			filled::<T::MaxIdLength>(1),
			filled::<T::MaxNameLength>(2),
			tag.clone(),
		)
		.unwrap();
		let caller: T::AccountId = account("caller", 0, 0);

		#[extrinsic_call]
		_(RawOrigin::Signed(caller), tag, filled::<T::MaxSubjectLength>(4), 1_700_000_000);

		assert_eq!(RecordCount::<T>::get(), 1);
	}

	#[benchmark]
	fn mark_absent() {
		let admin = setup_admin::<T>();

		#[extrinsic_call]
		_(
			RawOrigin::Signed(admin),
			filled::<T::MaxIdLength>(1),
			filled::<T::MaxSubjectLength>(4),
			1_700_000_000,
		);

		assert_eq!(RecordCount::<T>::get(), 1);
		assert!(!Records::<T>::get(0).unwrap().is_present);
	}

	impl_benchmark_test_suite!(Attendance, crate::mock::new_test_ext(), crate::mock::Test);
}
