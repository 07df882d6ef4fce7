//! Session, storage and access-control services.

pub mod guard;
pub mod session;
pub mod storage;
