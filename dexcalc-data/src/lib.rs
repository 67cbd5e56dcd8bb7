extern crate alloc;

mod mons;

#[cfg(test)]
pub mod test_util;

pub use mons::*;
