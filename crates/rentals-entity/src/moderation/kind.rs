//! Kinds of items that reach the moderation queue.

string_enum! {
    /// What an admin is asked to moderate.
    pub enum ModerationKind {
        /// A new or edited listing.
        Property => "property",
        /// A user account (identity verification, reports).
        User => "user",
        /// A service provider application.
        ServiceProvider => "service_provider",
        /// A tenant review of a property.
        Review => "review",
    }
}

impl ModerationKind {
    /// Human-readable label for filters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Property => "Property",
            Self::User => "User",
            Self::ServiceProvider => "Service Provider",
            Self::Review => "Review",
        }
    }
}
