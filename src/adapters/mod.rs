/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the file system, external
/// processes and the console. The CLI itself is the only inbound adapter.
pub mod outbound;
