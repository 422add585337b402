mod de;
pub mod event_record;
pub mod event_type;
pub mod node_resource;
pub mod repo_event;

pub use event_record::EventRecord;
pub use event_type::EventType;
pub use node_resource::{ContentInfo, NodeResource, UserInfo};
pub use repo_event::{EnterpriseEventData, EventData, RepoEvent};
