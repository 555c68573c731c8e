#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod name;
mod service;
mod source;

pub use error::*;
pub use exercise::*;
pub use name::*;
pub use service::*;
pub use source::*;
