/// Use cases module containing application business logic orchestration
mod find_usages;

pub use find_usages::FindUsagesUseCase;
