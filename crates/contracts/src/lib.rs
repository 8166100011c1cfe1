//! Types shared between the stats frontend and the activities API.

pub mod activities;
pub mod shared;
