//! # BedBet core
//!
//! Pure building blocks of the BedBet client: the half-hour slot codec, the
//! room filter, form input rules, the wire models exchanged with the REST
//! server and the shared error type. Nothing here performs I/O.

pub mod errors;
pub mod filter;
pub mod input;
pub mod models;
pub mod signup;
pub mod slot;

pub use errors::{BetError, BetResult};
pub use filter::{filter_rooms, HasWindow, SlotSelection};
pub use slot::{decode, encode, try_encode, BookingWindow, SlotIndex};
