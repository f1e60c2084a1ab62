/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the Veracode APIs, the
/// terminal and the file system.
pub mod outbound;
