#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod postgrest;
pub mod rest;
pub mod wger;

pub use postgrest::PostgREST;
pub use rest::{ConfigError, ReqwestSendRequest, SendRequest};
pub use wger::WgerREST;

#[cfg(test)]
mod tests {
    pub mod data;
}
