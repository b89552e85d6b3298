//! User role enumeration.

string_enum! {
    /// Which dashboard a user sees.
    pub enum UserRole {
        /// Searches and rents properties.
        Tenant => "tenant",
        /// Lists properties and reviews applications.
        Landlord => "landlord",
        /// Manages hotel rooms and bookings.
        HotelManager => "hotel_manager",
        /// Offers cleaning, repairs, moving, and similar services.
        ServiceProvider => "service_provider",
        /// Moderates the marketplace.
        Admin => "admin",
    }
}

impl UserRole {
    /// Human-readable label for filters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Landlord => "Landlord",
            Self::HotelManager => "Hotel Manager",
            Self::ServiceProvider => "Service Provider",
            Self::Admin => "Admin",
        }
    }

    /// Whether this role publishes listings.
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Landlord | Self::HotelManager)
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("landlord".parse::<UserRole>().unwrap(), UserRole::Landlord);
        assert_eq!("HOTEL_MANAGER".parse::<UserRole>().unwrap(), UserRole::HotelManager);
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_hosts() {
        assert!(UserRole::Landlord.is_host());
        assert!(UserRole::HotelManager.is_host());
        assert!(!UserRole::Tenant.is_host());
    }
}
