//! Two-arm dispatch over an `Outcome`.

/// Runs exactly one of two blocks depending on which slot of an outcome is
/// populated.
///
/// Each arm binds the payload by shared reference to a caller-chosen pattern
/// that is only in scope inside its own block. The outcome is borrowed, not
/// consumed. The macro evaluates to the value of the block that ran.
///
/// ```
/// use ignotus_core::match_outcome;
/// use ignotus_core::outcome::Outcome;
///
/// let loaded = Outcome::<u32, String>::ok(4);
/// let mut players = 0;
///
/// match_outcome!(loaded,
///     ok(count) => { players += *count; },
///     error(reason) => { eprintln!("load failed: {reason}"); },
/// );
///
/// assert_eq!(players, 4);
/// ```
#[macro_export]
macro_rules! match_outcome {
    (
        $outcome:expr,
        ok($ok:pat) => $ok_block:block,
        error($error:pat) => $error_block:block $(,)?
    ) => {
        match $crate::outcome::Outcome::branch(&$outcome) {
            $crate::outcome::Branch::Ok($ok) => $ok_block,
            $crate::outcome::Branch::Error($error) => $error_block,
        }
    };
}
