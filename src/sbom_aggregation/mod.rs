/// Domain layer for consolidated SBOM generation
///
/// Pure logic with no I/O: value objects, the aggregation services and the
/// collection selection policy.
pub mod domain;
pub mod policies;
pub mod services;
