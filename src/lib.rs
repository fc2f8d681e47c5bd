pub mod constants;
mod context;
pub mod env;
mod headers;
mod options;
mod origin;
mod policy;
mod proxy;
mod request;
mod response;
mod result;
pub mod server;
mod upstream;

pub use context::RequestContext;
pub use env::EnvError;
pub use headers::Headers;
pub use options::{ProxyOptions, ValidationError};
pub use origin::{Origin, OriginDecision};
pub use policy::CorsPolicy;
pub use proxy::ForwardingProxy;
pub use request::{InboundRequest, OutboundRequest, QueryParams, decode_query, encode_query};
pub use response::ProxyResponse;
pub use result::CorsDecision;
pub use upstream::{HttpUpstream, Upstream, UpstreamError, UpstreamResponse};
