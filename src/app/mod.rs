// Application layer: one pipeline per batch tool, built on the core algorithms.

pub mod pipelines;
