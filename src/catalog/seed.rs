//! Seed catalog data
//!
//! Six listings and four agents used by the demo/offline configuration.
//! Listings are ordered newest-first; seed timestamps are spaced a day
//! apart so the default sort is stable and meaningful.

use chrono::{Duration, Utc};

use crate::domain::{Agent, Property, PropertyStatus};

pub fn seed_properties() -> Vec<Property> {
    let now = Utc::now();
    let at = |days_ago: i64| now - Duration::days(days_ago);

    vec![
        Property {
            id: "prop1".to_string(),
            title: "Modern Downtown Apartment".to_string(),
            address: "123 Main St, San Francisco, CA".to_string(),
            price: 750_000,
            bedrooms: 2,
            bathrooms: 2.0,
            square_feet: 1200,
            image_url: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750".to_string(),
            property_type: "Apartment".to_string(),
            status: PropertyStatus::Available,
            description: "Beautiful modern apartment in the heart of downtown with stunning \
                          city views. Features include hardwood floors, stainless steel \
                          appliances, and floor-to-ceiling windows."
                .to_string(),
            features: vec![
                "Central Air".to_string(),
                "In-unit Laundry".to_string(),
                "Fitness Center".to_string(),
                "Rooftop Deck".to_string(),
                "Pet Friendly".to_string(),
            ],
            agent_id: "agent1".to_string(),
            created_at: at(0),
        },
        Property {
            id: "prop2".to_string(),
            title: "Luxury Waterfront Villa".to_string(),
            address: "456 Ocean Ave, Malibu, CA".to_string(),
            price: 2_500_000,
            bedrooms: 5,
            bathrooms: 4.0,
            square_feet: 3800,
            image_url: "https://images.unsplash.com/photo-1580587771525-78b9dba3b914".to_string(),
            property_type: "Villa".to_string(),
            status: PropertyStatus::Available,
            description: "Stunning waterfront villa with panoramic ocean views. This luxurious \
                          property features a private beach, infinity pool, and gourmet kitchen."
                .to_string(),
            features: vec![
                "Ocean View".to_string(),
                "Private Pool".to_string(),
                "Home Theatre".to_string(),
                "Wine Cellar".to_string(),
                "Smart Home System".to_string(),
            ],
            agent_id: "agent2".to_string(),
            created_at: at(1),
        },
        Property {
            id: "prop3".to_string(),
            title: "Cozy Suburban Home".to_string(),
            address: "789 Maple Dr, Pasadena, CA".to_string(),
            price: 950_000,
            bedrooms: 4,
            bathrooms: 3.0,
            square_feet: 2400,
            image_url: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9".to_string(),
            property_type: "House".to_string(),
            status: PropertyStatus::Pending,
            description: "Charming family home in a quiet suburban neighborhood with a \
                          spacious backyard and updated kitchen. Perfect for families looking \
                          for great schools and community."
                .to_string(),
            features: vec![
                "Renovated Kitchen".to_string(),
                "Backyard".to_string(),
                "Garage".to_string(),
                "Fireplace".to_string(),
                "Finished Basement".to_string(),
            ],
            agent_id: "agent3".to_string(),
            created_at: at(2),
        },
        Property {
            id: "prop4".to_string(),
            title: "Urban Loft Apartment".to_string(),
            address: "101 Arts District, Los Angeles, CA".to_string(),
            price: 650_000,
            bedrooms: 1,
            bathrooms: 1.5,
            square_feet: 1050,
            image_url: "https://images.unsplash.com/photo-1493809842364-78817add7ffb".to_string(),
            property_type: "Loft".to_string(),
            status: PropertyStatus::Available,
            description: "Industrial-style loft in the vibrant Arts District featuring exposed \
                          brick, high ceilings, and large windows. Perfect for creative \
                          professionals."
                .to_string(),
            features: vec![
                "High Ceilings".to_string(),
                "Exposed Brick".to_string(),
                "Open Floor Plan".to_string(),
                "Common Roof Deck".to_string(),
                "Bike Storage".to_string(),
            ],
            agent_id: "agent1".to_string(),
            created_at: at(3),
        },
        Property {
            id: "prop5".to_string(),
            title: "Mountain View Cabin".to_string(),
            address: "555 Pine Trail, Lake Tahoe, CA".to_string(),
            price: 875_000,
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1800,
            image_url: "https://images.unsplash.com/photo-1518780664697-55e3ad937233".to_string(),
            property_type: "Cabin".to_string(),
            status: PropertyStatus::Available,
            description: "Rustic log cabin with stunning mountain views. Features include a \
                          stone fireplace, wraparound deck, and easy access to hiking trails \
                          and ski resorts."
                .to_string(),
            features: vec![
                "Mountain View".to_string(),
                "Wraparound Deck".to_string(),
                "Stone Fireplace".to_string(),
                "Hot Tub".to_string(),
                "Ski Storage".to_string(),
            ],
            agent_id: "agent4".to_string(),
            created_at: at(4),
        },
        Property {
            id: "prop6".to_string(),
            title: "Historic Brownstone".to_string(),
            address: "222 Heritage Row, Boston, MA".to_string(),
            price: 1_250_000,
            bedrooms: 3,
            bathrooms: 2.5,
            square_feet: 2200,
            image_url: "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6".to_string(),
            property_type: "Townhouse".to_string(),
            status: PropertyStatus::Sold,
            description: "Classic brownstone with original architectural details. Recently \
                          renovated to blend historic charm with modern amenities in a prime \
                          location."
                .to_string(),
            features: vec![
                "Original Hardwood Floors".to_string(),
                "Crown Molding".to_string(),
                "Updated Kitchen".to_string(),
                "Garden Patio".to_string(),
                "Subway Access".to_string(),
            ],
            agent_id: "agent2".to_string(),
            created_at: at(5),
        },
    ]
}

pub fn seed_agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "agent1".to_string(),
            name: "Sarah Johnson".to_string(),
            profile_image: "https://randomuser.me/api/portraits/women/44.jpg".to_string(),
            rating: 4.8,
            review_count: 124,
            years_experience: 8,
            location: "San Francisco, CA".to_string(),
            specializations: vec![
                "Luxury".to_string(),
                "Residential".to_string(),
                "Condos".to_string(),
            ],
            phone_number: "(415) 555-1234".to_string(),
            email: "sarah.johnson@propertymatch.com".to_string(),
            bio: "Sarah specializes in luxury properties throughout San Francisco. With 8 \
                  years of experience, she has helped hundreds of clients find their perfect \
                  home. Her expertise in market trends and negotiation skills ensure her \
                  clients always get the best deal."
                .to_string(),
            listings: 24,
            transactions: 150,
            languages: vec!["English".to_string(), "Spanish".to_string()],
        },
        Agent {
            id: "agent2".to_string(),
            name: "Michael Chen".to_string(),
            profile_image: "https://randomuser.me/api/portraits/men/22.jpg".to_string(),
            rating: 4.9,
            review_count: 98,
            years_experience: 12,
            location: "Los Angeles, CA".to_string(),
            specializations: vec![
                "Waterfront".to_string(),
                "Luxury".to_string(),
                "International".to_string(),
            ],
            phone_number: "(310) 555-5678".to_string(),
            email: "michael.chen@propertymatch.com".to_string(),
            bio: "Michael is an award-winning agent with over 12 years of experience in \
                  luxury and international real estate. He provides personalized service to \
                  each client and has extensive knowledge of Los Angeles' most desirable \
                  neighborhoods."
                .to_string(),
            listings: 18,
            transactions: 220,
            languages: vec![
                "English".to_string(),
                "Mandarin".to_string(),
                "Cantonese".to_string(),
            ],
        },
        Agent {
            id: "agent3".to_string(),
            name: "Jessica Rodriguez".to_string(),
            profile_image: "https://randomuser.me/api/portraits/women/29.jpg".to_string(),
            rating: 4.7,
            review_count: 87,
            years_experience: 5,
            location: "Pasadena, CA".to_string(),
            specializations: vec![
                "Residential".to_string(),
                "First-Time Buyers".to_string(),
                "Family Homes".to_string(),
            ],
            phone_number: "(626) 555-9012".to_string(),
            email: "jessica.rodriguez@propertymatch.com".to_string(),
            bio: "Jessica is passionate about helping first-time homebuyers navigate the \
                  real estate market. She takes pride in finding perfect family homes and \
                  guiding clients through every step of the buying process with patience and \
                  expertise."
                .to_string(),
            listings: 15,
            transactions: 85,
            languages: vec!["English".to_string(), "Spanish".to_string()],
        },
        Agent {
            id: "agent4".to_string(),
            name: "David Wilson".to_string(),
            profile_image: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            rating: 4.6,
            review_count: 76,
            years_experience: 10,
            location: "Lake Tahoe, CA".to_string(),
            specializations: vec![
                "Vacation Homes".to_string(),
                "Investment Properties".to_string(),
                "Cabins".to_string(),
            ],
            phone_number: "(530) 555-3456".to_string(),
            email: "david.wilson@propertymatch.com".to_string(),
            bio: "David specializes in vacation properties and investment opportunities in \
                  the Lake Tahoe region. His deep knowledge of the local market helps \
                  investors maximize returns while finding beautiful properties in scenic \
                  locations."
                .to_string(),
            listings: 22,
            transactions: 130,
            languages: vec!["English".to_string()],
        },
    ]
}
