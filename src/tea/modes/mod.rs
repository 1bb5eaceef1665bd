mod ecb;
mod util;

pub use ecb::{ecb_core_dec, ecb_core_enc};
pub use util::{BLOCK_SIZE, strip_trailing_zeros};

#[cfg(test)]
pub(crate) use util::test_util;
