//! Ready-made asset plumbing: the `.terra` map format parser

pub mod parse;
