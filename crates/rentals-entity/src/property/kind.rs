//! Property type enumeration.

string_enum! {
    /// What kind of space a listing offers.
    pub enum PropertyKind {
        /// Flat in a multi-unit building.
        Apartment => "apartment",
        /// Detached or terraced house.
        House => "house",
        /// Two-storey house.
        Duplex => "duplex",
        /// Single-room self-contained unit.
        Studio => "studio",
        /// Single-storey house.
        Bungalow => "bungalow",
        /// Room managed by a hotel.
        HotelRoom => "hotel_room",
        /// Furnished short-let.
        Shortlet => "shortlet",
    }
}

impl PropertyKind {
    /// Human-readable label for filters and cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Duplex => "Duplex",
            Self::Studio => "Studio",
            Self::Bungalow => "Bungalow",
            Self::HotelRoom => "Hotel Room",
            Self::Shortlet => "Shortlet",
        }
    }

    /// Whether the listing is booked per night rather than rented yearly.
    pub fn is_nightly(&self) -> bool {
        matches!(self, Self::HotelRoom | Self::Shortlet)
    }
}
