//! Real-time notification gateway.
//!
//! `hub` tracks live sockets and their rooms, `session` drives one socket, and `event` /
//! `message` define the JSON frames in each direction.

pub mod event;
pub mod hub;
pub mod message;
pub mod session;

#[cfg(test)]
mod test;
