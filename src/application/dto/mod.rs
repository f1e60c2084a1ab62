/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod consolidation_request;
mod consolidation_response;

pub use consolidation_request::ConsolidationRequest;
pub use consolidation_response::ConsolidationResponse;
