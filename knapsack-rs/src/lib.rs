//! Solvers for the 0/1 knapsack problem: two greedy heuristics and an exact dynamic program.

/// Entities to model a 0/1 knapsack problem instance and its solutions
pub mod entities;

/// Importing problem instances from their plain-text representation
pub mod io;

/// The greedy and exact solvers
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;
