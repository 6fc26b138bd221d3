//! Exit code constants for the blogspark CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing API key, invalid input)
//! - 2: API failure (diagnostic probe or model listing failed)
//! - 3: State failure (persisted state could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing credential, or invalid input.
pub const USER_ERROR: i32 = 1;

/// API failure: the generation endpoint could not be reached or misbehaved
/// in a way an operator-facing command must report.
pub const API_FAILURE: i32 = 2;

/// State failure: the persisted agent state could not be written.
pub const STATE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, API_FAILURE, STATE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
