/// A ternary expression handler.  Rust's `if` is already an
/// expression, but once `cargo fmt` is done with a nest of them the
/// table of border-handling rules in the per-pixel loops becomes
/// unreadable.  One line per rule is worth a macro.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
