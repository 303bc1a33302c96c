// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! flashcards-core: Core library for the flashcards trainer.
//!
//! This library provides the terminal-independent parts of the trainer:
//! - The card type and the ordered card store
//! - The comma-delimited record format used for import and export
//! - Quiz answer grading and hardest-card lookup
//! - A small seedable PRNG for picking quiz cards

pub mod error;
pub mod quiz;
pub mod record;
pub mod rng;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible};
pub use quiz::{Hardest, Verdict, grade, hardest};
pub use record::{RecordError, format_record, format_records, parse_record, parse_records};
pub use rng::TinyRng;
pub use store::{CardStore, StoreError};
pub use types::card::Card;
