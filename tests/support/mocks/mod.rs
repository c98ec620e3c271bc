// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod generation;
pub mod repos;
pub mod time;

pub use generation::{CountingSynthesizer, ProviderBehavior, StubProvider};
pub use repos::{ConflictingWriteRepo, EventuallyFreeWriteRepo, FailingReadRepo, FailingWriteRepo};
pub use time::{FIXED_MILLIS, FixedClock, fixed_now};
