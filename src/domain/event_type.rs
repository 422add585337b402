/// Alfresco repository event types, as carried in the envelope `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    NodeCreated,
    NodeUpdated,
    NodeDeleted,
    ChildAssocCreated,
    ChildAssocDeleted,
    PeerAssocCreated,
    PeerAssocDeleted,
    PermissionUpdated,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::NodeCreated,
        EventType::NodeUpdated,
        EventType::NodeDeleted,
        EventType::ChildAssocCreated,
        EventType::ChildAssocDeleted,
        EventType::PeerAssocCreated,
        EventType::PeerAssocDeleted,
        EventType::PermissionUpdated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::NodeCreated => "org.alfresco.event.node.Created",
            EventType::NodeUpdated => "org.alfresco.event.node.Updated",
            EventType::NodeDeleted => "org.alfresco.event.node.Deleted",
            EventType::ChildAssocCreated => "org.alfresco.event.assoc.child.Created",
            EventType::ChildAssocDeleted => "org.alfresco.event.assoc.child.Deleted",
            EventType::PeerAssocCreated => "org.alfresco.event.assoc.peer.Created",
            EventType::PeerAssocDeleted => "org.alfresco.event.assoc.peer.Deleted",
            EventType::PermissionUpdated => "org.alfresco.event.permission.Updated",
        }
    }

    /// Unknown type strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
