mod setup;
mod synergy_assert;

pub use setup::setup_test_environment;
pub use synergy_assert::{
    assert_shared_weakness,
    assert_uncovered,
};
