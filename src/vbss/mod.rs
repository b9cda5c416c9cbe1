//! Value-Biased Stochastic Sampling (VBSS).
//!
//! A greedy-randomized construction heuristic. Each tour is built one city
//! at a time; the next city is drawn with probability proportional to
//! `1 / distance^b`, so a larger bias exponent `b` makes the construction
//! behave more like nearest neighbor and `b = 0` like uniform random choice.
//! [`VbssRunner`] repeats the construction and keeps the best tour.
//!
//! # References
//!
//! - Bresina (1996), "Heuristic-Biased Stochastic Sampling"
//! - Cicirello & Smith (2005), "Enhancing Stochastic Search Performance by
//!   Value-Biased Randomization of Heuristics"

mod config;
mod construct;
mod runner;

pub use config::VbssConfig;
pub use construct::construct_tour;
pub use runner::VbssRunner;
