//! Admin session authentication: signed tokens, cookie transport, and the
//! credential directory behind login.

pub mod claims;
pub mod cookie;
pub mod directory;
pub mod middleware;
pub mod password;
pub mod token;
