//! Data models for the crowd lobbying application.
//!
//! Entities mirror the database tables; view types are what pages and the
//! admin API serialize.

mod argument;
mod campaign;
mod entry;
mod form;
mod person;
mod politician;
mod region;
mod wip;

pub use argument::*;
pub use campaign::*;
pub use entry::*;
pub use form::*;
pub use person::*;
pub use politician::*;
pub use region::*;
pub use wip::*;
