//! List-to-map conversions

pub mod strict;

pub mod merge;

pub mod collector;
