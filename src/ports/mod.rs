/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports only: the application core is driven directly by the CLI
/// through `FindUsagesUseCase`.
pub mod outbound;
