//! Outcome analysis for evolutionary game simulations.
//!
//! Repeated runs of an evolutionary game (strategies like tit-for-tat,
//! majority-response, and always-defect competing in a population) each leave
//! behind a per-run summary file. This crate scans those files for two
//! experimental conditions, tallies which strategy dominated the population
//! at the end of every run, computes win rates, and compares the two
//! conditions with a two-sided Fisher's exact test.

pub mod report;
