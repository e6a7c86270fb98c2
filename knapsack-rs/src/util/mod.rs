/// Various checks to verify the correctness of solutions
pub mod assertions;

/// Exhaustive reference solver for small instances
pub mod brute_force;
