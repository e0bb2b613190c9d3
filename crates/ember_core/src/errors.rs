//! Growth failures and the fatal path taken when generated code cannot continue.

/// Diagnostics printed before a fatal exit. Generated programs and their test
/// harnesses match on these exact strings.
pub mod messages {
    pub const ALLOC_FAILED: &str = "Error allocating memory";
    pub const RESIZE_FAILED: &str = "Error resizing array";
}

/// Exit status of a process terminated by [`fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// Doubling the capacity would overflow `usize`.
    #[error("capacity overflow while doubling {capacity} slots")]
    CapacityOverflow { capacity: usize },

    /// The configured ceiling refuses the requested capacity.
    #[error("requested capacity {requested} exceeds limit {limit}")]
    CapacityLimit { requested: usize, limit: usize },

    /// The allocator could not provide the backing store.
    #[error("allocator refused {requested} slots")]
    Alloc { requested: usize },
}

/// Reports `err` under `context` and terminates the process.
///
/// This is the policy behind [`GrowSeq::make`](crate::GrowSeq::make) and
/// [`GrowSeq::push`](crate::GrowSeq::push): there is no caller to hand the
/// error back to.
#[cold]
pub fn fatal(context: &str, err: &SeqError) -> ! {
    tracing::error!(%err, context, "fatal allocation failure");
    eprintln!("{context}: {err}");
    std::process::exit(FATAL_EXIT_CODE)
}
