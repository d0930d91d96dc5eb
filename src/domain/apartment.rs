// src/domain/apartment.rs

use crate::domain::availability::UnitId;

/// A rentable apartment. Its `id` doubles as the calendar unit id.
#[derive(Debug)]
pub struct Apartment {
    pub id: UnitId,
    pub name: &'static str,
    pub description: &'static str,
    /// Nightly price in whole dollars.
    pub price: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub guests: u8,
    pub images: &'static [&'static str],
    pub amenities: &'static [&'static str],
}

#[derive(Debug)]
pub struct BuildingAmenity {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static APARTMENTS: &[Apartment] = &[
    Apartment {
        id: 1,
        name: "Luxury Urban Suite",
        description: "A modern, spacious apartment with stunning city views, perfect for couples or business travelers. Featuring contemporary design and all the amenities you need for a comfortable stay.",
        price: 129,
        bedrooms: 1,
        bathrooms: 1,
        guests: 2,
        images: &[
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&w=2070&q=80",
            "https://images.unsplash.com/photo-1584622781564-1d987f7333c1?auto=format&fit=crop&w=2070&q=80",
            "https://images.unsplash.com/photo-1564078516393-cf04bd966897?auto=format&fit=crop&w=2070&q=80",
        ],
        amenities: &["WiFi", "TV", "King Bed", "Air Conditioning"],
    },
    Apartment {
        id: 2,
        name: "Family Comfort Haven",
        description: "Spacious and thoughtfully designed apartment ideal for families. This cozy retreat features two bedrooms, a fully-equipped kitchen, and a comfortable living space perfect for relaxing after exploring the city.",
        price: 189,
        bedrooms: 2,
        bathrooms: 2,
        guests: 4,
        images: &[
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=2070&q=80",
            "https://images.unsplash.com/photo-1560185007-c5ca9d2c014d?auto=format&fit=crop&w=2070&q=80",
            "https://images.unsplash.com/photo-1617098474202-5c7f9760c422?auto=format&fit=crop&w=2070&q=80",
        ],
        amenities: &["WiFi", "TV", "Queen Bed", "Kitchen"],
    },
    Apartment {
        id: 3,
        name: "Executive Penthouse",
        description: "Experience luxury living in our stunning penthouse apartment. With panoramic city views, premium finishes, and expansive living spaces, this upscale accommodation is perfect for those seeking an extraordinary stay.",
        price: 259,
        bedrooms: 2,
        bathrooms: 2,
        guests: 4,
        images: &[
            "https://images.unsplash.com/photo-1566665797739-1674de7a421a?auto=format&fit=crop&w=2074&q=80",
            "https://images.unsplash.com/photo-1628624747186-a941c476b7ef?auto=format&fit=crop&w=2070&q=80",
            "https://images.unsplash.com/photo-1565183997392-2f6f122e5912?auto=format&fit=crop&w=2070&q=80",
        ],
        amenities: &["WiFi", "TV", "King Bed", "Balcony"],
    },
];

pub static BUILDING_AMENITIES: &[BuildingAmenity] = &[
    BuildingAmenity {
        icon: "📶",
        title: "High-Speed WiFi",
        description: "Stay connected with complimentary high-speed internet throughout the property.",
    },
    BuildingAmenity {
        icon: "🔒",
        title: "Secure Access",
        description: "Enjoy peace of mind with our modern secure entry system and 24/7 monitored security.",
    },
    BuildingAmenity {
        icon: "🚗",
        title: "Free Parking",
        description: "Convenient free parking available for all guests during their stay.",
    },
    BuildingAmenity {
        icon: "❄️",
        title: "Air Conditioning",
        description: "Climate-controlled environments in all apartments for year-round comfort.",
    },
    BuildingAmenity {
        icon: "🍳",
        title: "Fully Equipped Kitchen",
        description: "Modern kitchens with high-end appliances, perfect for preparing home-cooked meals.",
    },
    BuildingAmenity {
        icon: "📺",
        title: "Smart Entertainment",
        description: "Smart TVs with streaming services and high-quality sound systems.",
    },
];

pub fn find_apartment(id: UnitId) -> Option<&'static Apartment> {
    APARTMENTS.iter().find(|a| a.id == id)
}

/// Number of calendar units, one per catalog apartment.
pub fn unit_count() -> UnitId {
    UnitId::try_from(APARTMENTS.len()).unwrap_or(UnitId::MAX)
}

/// Icon for an apartment-level amenity label, falling back to a star.
pub fn amenity_icon(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "wifi" => "📶",
        "tv" => "📺",
        "king bed" | "queen bed" => "🛏️",
        _ => "⭐",
    }
}

/// "1 bedroom", "2 bedrooms".
pub fn plural(n: u8, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
