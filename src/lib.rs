mod bounded;
mod error;
mod pcg32;
mod pcg32x2;

pub use self::{
    error::Error,
    pcg32::{Pcg32, MULTIPLIER},
    pcg32x2::Pcg32x2,
};
