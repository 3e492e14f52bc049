//! Dependency tracking domain: the reverse-dependency index and the
//! transitive closure over it. Pure logic, no I/O.
pub mod domain;
pub mod services;
