//! Shared data-transfer types between the PDAM admin frontend and the API
//! server. The server owns the semantics of every record; the frontend only
//! renders and submits them.

pub mod domain;
pub mod system;
