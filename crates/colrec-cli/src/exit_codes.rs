//! CLI exit code registry.
//!
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | code | meaning                                  |
//! |------|------------------------------------------|
//! | 0    | success                                  |
//! | 1    | general error (logging bootstrap, etc.)  |
//! | 2    | CLI usage error (clap)                   |
//! | 3    | load error (spreadsheet/JSON input)      |
//! | 4    | matching/embedding error                 |
//! | 5    | output serialization/write error         |

use colrec_model::ColrecError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure. Prefer a specific code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments (emitted by clap itself).
pub const EXIT_USAGE: u8 = 2;

/// Input could not be loaded (missing/corrupt spreadsheet or records file).
pub const EXIT_LOAD: u8 = 3;

/// Column matching or embedding failed.
pub const EXIT_MATCH: u8 = 4;

/// Output could not be rendered or written.
pub const EXIT_OUTPUT: u8 = 5;

/// Maps the error taxonomy onto the exit code registry.
#[must_use]
pub fn error_exit_code(error: &ColrecError) -> u8 {
    match error {
        ColrecError::Load(_) => EXIT_LOAD,
        ColrecError::Embed(_) | ColrecError::Match(_) => EXIT_MATCH,
        ColrecError::Output(_) => EXIT_OUTPUT,
    }
}
