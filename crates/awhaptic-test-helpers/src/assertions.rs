//! Assertion macros for timing and register journals.

/// Assert that a [`Duration`](std::time::Duration) lies within `[min, max]`.
///
/// ```rust
/// use std::time::Duration;
/// use awhaptic_test_helpers::assert_elapsed_between;
///
/// assert_elapsed_between!(
///     Duration::from_millis(130),
///     Duration::from_millis(120),
///     Duration::from_millis(400)
/// );
/// ```
#[macro_export]
macro_rules! assert_elapsed_between {
    ($elapsed:expr, $min:expr, $max:expr $(,)?) => {
        let elapsed: ::std::time::Duration = $elapsed;
        let min: ::std::time::Duration = $min;
        let max: ::std::time::Duration = $max;
        if elapsed < min || elapsed > max {
            panic!(
                "assertion failed: elapsed time out of range\n  elapsed: `{:?}`,\n      min: `{:?}`,\n      max: `{:?}`",
                elapsed, min, max
            );
        }
    };
    ($elapsed:expr, $min:expr, $max:expr, $($arg:tt)+) => {
        let elapsed: ::std::time::Duration = $elapsed;
        let min: ::std::time::Duration = $min;
        let max: ::std::time::Duration = $max;
        if elapsed < min || elapsed > max {
            panic!(
                "assertion failed: elapsed time out of range\n  elapsed: `{:?}`,\n      min: `{:?}`,\n      max: `{:?}`: {}",
                elapsed, min, max, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a memory port's integer write journal equals the given
/// `(Node, value)` pairs, in order.
///
/// ```rust
/// use awhaptic_registers::{MemoryRegisterPort, Node, RegisterPort};
/// use awhaptic_test_helpers::assert_writes;
///
/// let port = MemoryRegisterPort::with_all_nodes();
/// port.write_int(Node::Activate, 0).unwrap();
/// assert_writes!(port, [(Node::Activate, 0)]);
/// ```
#[macro_export]
macro_rules! assert_writes {
    ($port:expr, [$(($node:expr, $value:expr)),* $(,)?] $(,)?) => {
        let actual: ::std::vec::Vec<($crate::__private::Node, i32)> = $port.int_writes();
        let expected: ::std::vec::Vec<($crate::__private::Node, i32)> = vec![$(($node, $value)),*];
        if actual != expected {
            panic!(
                "assertion failed: register writes differ\n  actual: `{:?}`,\nexpected: `{:?}`",
                actual, expected
            );
        }
    };
}
