mod content_store;
mod ids;
mod topic;

pub use content_store::{ContentError, ContentStore};
pub use ids::TopicId;
pub use topic::Topic;
