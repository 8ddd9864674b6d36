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

//! # Attendance Pallet
//!
//! A pallet tracking student attendance on chain: an identity directory
//! binding accounts and physical tags to student records, and an append-only
//! ledger of attendance entries.
//!
//! ## Overview
//!
//! A single administrator, fixed at genesis, registers students and may record
//! absences on their behalf. A registered student is identified two ways: by
//! the account that owns the record and by a physical tag (for example an NFC
//! token) bound one-to-one with that account. Anyone holding a valid tag may
//! record a presence; identity is asserted by the tag itself, so presence
//! marking deliberately performs no admin check.
//!
//! Attendance entries are written to an append-only log addressed by a zero
//! based index. Entries are never modified or removed, and the index of a new
//! entry is reported in the [`Event::AttendanceMarked`] event.
//!
//! Deactivating a student flips `is_active` and nothing else: the record and
//! its tag binding stay in place, and a fresh registration is the only way to
//! reactivate. Re-registering an account overwrites its record and releases
//! the previously bound tag.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use codec::MaxEncodedLen;
use frame_support::{
	traits::Get, BoundedVec, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use scale_info::TypeInfo;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
pub mod weights;
pub use weights::WeightInfo;

const LOG_TARGET: &str = "runtime::attendance";

/// An opaque identifier (student id or tag id), bounded by the pallet's
/// identifier length limit.
pub type IdOf<T> = BoundedVec<u8, <T as Config>::MaxIdLength>;
/// A student's display name.
pub type NameOf<T> = BoundedVec<u8, <T as Config>::MaxNameLength>;
/// A subject an attendance entry is recorded against.
pub type SubjectOf<T> = BoundedVec<u8, <T as Config>::MaxSubjectLength>;
/// The [`Student`] type as configured for the runtime.
pub type StudentOf<T> = Student<<T as Config>::MaxIdLength, <T as Config>::MaxNameLength>;
/// The [`AttendanceRecord`] type as configured for the runtime.
pub type AttendanceRecordOf<T> =
	AttendanceRecord<<T as Config>::MaxIdLength, <T as Config>::MaxSubjectLength>;

/// A registered student.
///
/// Owned exclusively by the directory; lookups hand out decoded copies.
#[derive(
	CloneNoBound,
	codec::Encode,
	codec::Decode,
	EqNoBound,
	PartialEqNoBound,
	RuntimeDebugNoBound,
	TypeInfo,
	MaxEncodedLen,
)]
#[codec(mel_bound())]
#[scale_info(skip_type_params(IdLimit, NameLimit))]
pub struct Student<IdLimit: Get<u32>, NameLimit: Get<u32>> {
	/// External student identifier, e.g. a matriculation number.
	pub student_id: BoundedVec<u8, IdLimit>,
	/// Display name.
	pub name: BoundedVec<u8, NameLimit>,
	/// The physical tag bound to this student's account.
	pub tag_id: BoundedVec<u8, IdLimit>,
	/// Cleared on deactivation; set again only by re-registration.
	pub is_active: bool,
}

/// A single entry in the attendance ledger. Immutable once written.
#[derive(
	CloneNoBound,
	codec::Encode,
	codec::Decode,
	EqNoBound,
	PartialEqNoBound,
	RuntimeDebugNoBound,
	TypeInfo,
	MaxEncodedLen,
)]
#[codec(mel_bound())]
#[scale_info(skip_type_params(IdLimit, SubjectLimit))]
pub struct AttendanceRecord<IdLimit: Get<u32>, SubjectLimit: Get<u32>> {
	/// The student this entry is recorded for.
	pub student_id: BoundedVec<u8, IdLimit>,
	/// The subject the entry was recorded against.
	pub subject: BoundedVec<u8, SubjectLimit>,
	/// Seconds since the unix epoch, as asserted by the caller.
	pub timestamp: u64,
	/// `true` for a presence recorded via tag, `false` for an admin-recorded
	/// absence.
	pub is_present: bool,
}

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// The overarching event type.
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Maximum byte length of student and tag identifiers.
		#[pallet::constant]
		type MaxIdLength: Get<u32>;

		/// Maximum byte length of a student's name.
		#[pallet::constant]
		type MaxNameLength: Get<u32>;

		/// Maximum byte length of a subject.
		#[pallet::constant]
		type MaxSubjectLength: Get<u32>;

		/// Weight information for this pallet's dispatchables.
		type WeightInfo: WeightInfo;
	}

	/// The administrator account, fixed at genesis.
	///
	/// Guards registration, deactivation and absence marking. There is no
	/// dispatchable to change it.
	#[pallet::storage]
	pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

	/// The identity directory: student records keyed by owning account.
	#[pallet::storage]
	pub type Students<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, StudentOf<T>, OptionQuery>;

	/// Reverse index from physical tag to owning account.
	///
	/// Invariant: every entry points at an account present in [`Students`],
	/// and that record's `tag_id` equals the key here.
	#[pallet::storage]
	pub type TagToAccount<T: Config> =
		StorageMap<_, Blake2_128Concat, IdOf<T>, T::AccountId, OptionQuery>;

	/// The attendance ledger, an arena of records addressed by insertion
	/// index. Only ever appended to.
	#[pallet::storage]
	pub type Records<T: Config> =
		StorageMap<_, Twox64Concat, u64, AttendanceRecordOf<T>, OptionQuery>;

	/// Total number of records ever appended; also the next free index.
	#[pallet::storage]
	pub type RecordCount<T: Config> = StorageValue<_, u64, ValueQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A student was registered (or re-registered) by the admin.
		StudentRegistered {
			/// The account the record is keyed by.
			who: T::AccountId,
		},
		/// A student was deactivated by the admin.
		StudentDeactivated {
			/// The account whose record was deactivated.
			who: T::AccountId,
		},
		/// An entry was appended to the attendance ledger.
		AttendanceMarked {
			/// Index of the new entry.
			index: u64,
			/// The student the entry was recorded for.
			student_id: IdOf<T>,
			/// Presence or absence.
			is_present: bool,
		},
	}

	#[pallet::error]
	pub enum Error<T> {
		/// The caller is not the administrator.
		Unauthorized,
		/// No student record exists for the given account.
		NotFound,
		/// No account is bound to the given tag.
		TagNotFound,
		/// The tag is already bound to a different account.
		DuplicateTag,
		/// The requested ledger index has not been written yet.
		IndexOutOfRange,
	}

	#[pallet::genesis_config]
	#[derive(frame_support::DefaultNoBound)]
	pub struct GenesisConfig<T: Config> {
		/// The administrator account.
		pub admin: Option<T::AccountId>,
	}

	#[pallet::genesis_build]
	impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
		fn build(&self) {
			if let Some(ref admin) = self.admin {
				Admin::<T>::put(admin);
			}
		}
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Register a student, binding `tag_id` to `who`.
		///
		/// Only the admin may call this. Fails with [`Error::DuplicateTag`] if
		/// the tag is already bound to a different account. Re-registering an
		/// existing account overwrites its record, releases its old tag
		/// binding and resets `is_active` to `true`.
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::register_student())]
		pub fn register_student(
			origin: OriginFor<T>,
			who: T::AccountId,
			student_id: IdOf<T>,
			name: NameOf<T>,
			tag_id: IdOf<T>,
		) -> DispatchResult {
			Self::ensure_admin(origin)?;

			if let Some(bound_to) = TagToAccount::<T>::get(&tag_id) {
				ensure!(bound_to == who, Error::<T>::DuplicateTag);
			}
			// Release the account's previous tag so the reverse index never
			// holds a stale binding.
			if let Some(old) = Students::<T>::get(&who) {
				if old.tag_id != tag_id {
					TagToAccount::<T>::remove(&old.tag_id);
				}
			}

			Students::<T>::insert(
				&who,
				Student { student_id, name, tag_id: tag_id.clone(), is_active: true },
			);
			TagToAccount::<T>::insert(&tag_id, &who);

			log::info!(target: LOG_TARGET, "registered student account {:?}", who);
			Self::deposit_event(Event::StudentRegistered { who });
			Ok(())
		}

		/// Deactivate the student registered under `who`.
		///
		/// Only the admin may call this. The record and its tag binding are
		/// kept; only `is_active` is cleared.
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::deactivate_student())]
		pub fn deactivate_student(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
			Self::ensure_admin(origin)?;

			Students::<T>::try_mutate(&who, |maybe_student| -> DispatchResult {
				let student = maybe_student.as_mut().ok_or(Error::<T>::NotFound)?;
				student.is_active = false;
				Ok(())
			})?;

			Self::deposit_event(Event::StudentDeactivated { who });
			Ok(())
		}

		/// Record a presence for the student bound to `tag_id`.
		///
		/// Callable by any signed account: identity is asserted by the
		/// physical tag, not the calling account. The new entry's index is
		/// reported via [`Event::AttendanceMarked`].
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::mark_present())]
		pub fn mark_present(
			origin: OriginFor<T>,
			tag_id: IdOf<T>,
			subject: SubjectOf<T>,
			timestamp: u64,
		) -> DispatchResult {
			ensure_signed(origin)?;

			let student = Self::resolve_by_tag(&tag_id)?;
			let index = Self::append_record(student.student_id, subject, timestamp, true);
			log::debug!(target: LOG_TARGET, "presence recorded at index {}", index);
			Ok(())
		}

		/// Record an absence for `student_id` directly.
		///
		/// Only the admin may call this. The admin asserts the identity, so no
		/// directory lookup is performed and the student need not be
		/// registered.
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::mark_absent())]
		pub fn mark_absent(
			origin: OriginFor<T>,
			student_id: IdOf<T>,
			subject: SubjectOf<T>,
			timestamp: u64,
		) -> DispatchResult {
			Self::ensure_admin(origin)?;

			Self::append_record(student_id, subject, timestamp, false);
			Ok(())
		}
	}

	impl<T: Config> Pallet<T> {
		/// The administrator account, if one was set at genesis.
		pub fn admin() -> Option<T::AccountId> {
			Admin::<T>::get()
		}

		/// Look up a student by owning account.
		pub fn resolve_by_account(who: &T::AccountId) -> Result<StudentOf<T>, DispatchError> {
			Ok(Students::<T>::get(who).ok_or(Error::<T>::NotFound)?)
		}

		/// Look up a student by bound tag, irrespective of active status.
		pub fn resolve_by_tag(tag_id: &IdOf<T>) -> Result<StudentOf<T>, DispatchError> {
			let who = TagToAccount::<T>::get(tag_id).ok_or(Error::<T>::TagNotFound)?;
			Ok(Students::<T>::get(&who).ok_or(Error::<T>::TagNotFound)?)
		}

		/// The ledger entry at `index`, if it has been written.
		pub fn record_at(index: u64) -> Result<AttendanceRecordOf<T>, DispatchError> {
			ensure!(index < RecordCount::<T>::get(), Error::<T>::IndexOutOfRange);
			Ok(Records::<T>::get(index).ok_or(Error::<T>::IndexOutOfRange)?)
		}

		/// Total number of ledger entries.
		pub fn record_count() -> u64 {
			RecordCount::<T>::get()
		}

		/// Number of ledger entries recorded for `student_id`, presences and
		/// absences both counted.
		pub fn count_for_student(student_id: &IdOf<T>) -> u64 {
			Records::<T>::iter_values().filter(|r| &r.student_id == student_id).count() as u64
		}

		/// Ensure `origin` is signed by the admin account.
		fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
			let who = ensure_signed(origin)?;
			ensure!(Admin::<T>::get().map_or(false, |admin| who == admin), Error::<T>::Unauthorized);
			Ok(who)
		}

		/// Append an entry to the ledger and return its index.
		fn append_record(
			student_id: IdOf<T>,
			subject: SubjectOf<T>,
			timestamp: u64,
			is_present: bool,
		) -> u64 {
			let index = RecordCount::<T>::get();
			Records::<T>::insert(
				index,
				AttendanceRecord { student_id: student_id.clone(), subject, timestamp, is_present },
			);
			RecordCount::<T>::put(index.saturating_add(1));
			Self::deposit_event(Event::AttendanceMarked { index, student_id, is_present });
			index
		}
	}
}
