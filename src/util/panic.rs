/// Asserts that running `$run` panics, catching the unwind so the test can carry on.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "expected a panic")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
