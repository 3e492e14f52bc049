/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the manifest-backed host
/// database, console progress, report formatters and presenters.
pub mod outbound;
