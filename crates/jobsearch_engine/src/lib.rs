//! Job search engine: gateway IO, background execution and description rendering.
mod describe;
mod engine;
mod gateway;
mod types;
mod wire;

pub use describe::{decode_entities, DescriptionRenderer, MarkdownDescriptionRenderer};
pub use engine::{EngineEvents, EngineHandle};
pub use gateway::{GatewaySettings, ReqwestGateway, SearchGateway, DEFAULT_ENDPOINT, RESULT_CAP};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError, RequestId, SearchOutput};
pub use wire::{
    ApplicationContact, ApplicationDetails, Description, Employer, JobHit, SearchResponse,
    TotalCount, WorkplaceAddress,
};
