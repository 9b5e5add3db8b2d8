mod resolve;
mod service;

pub use resolve::ResolveTagsCommand;
pub use service::TagCommandService;
