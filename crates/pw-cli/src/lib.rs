//! Library side of the `pagewire` binary: logging setup and fixture loading.

pub mod fixture;
pub mod logging;
