// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::model::{City, Stat};

pub static CITIES: &[City] = &[
    City {
        slug: "chicago",
        name: "Chicago",
        state: "Illinois",
        state_code: "IL",
        population: 2_746_388,
        description: "Chicago's businesses run on the phone, from Loop law firms to \
                      West Loop restaurants.\n\nLocal teams use AI agents to keep up \
                      with demand **without adding headcount**.",
        neighborhoods: &["The Loop", "River North", "Lincoln Park", "Wicker Park", "Hyde Park"],
        industries: &["restaurants", "legal", "financial-services", "healthcare"],
        keywords: &["AI receptionist Chicago", "Chicago chatbot agency", "AI automation Illinois"],
        stats: &[
            Stat { value: "2.7M", label: "residents" },
            Stat { value: "120K+", label: "small businesses" },
            Stat { value: "#3", label: "largest US metro" },
        ],
        lat: 41.8781,
        lng: -87.6298,
    },
    City {
        slug: "new-york",
        name: "New York",
        state: "New York",
        state_code: "NY",
        population: 8_804_190,
        description: "New York customers expect an answer now.\n\nFrom Midtown \
                      brokerages to Brooklyn clinics, AI agents help local businesses \
                      respond at New York speed.",
        neighborhoods: &["Midtown", "Financial District", "Williamsburg", "Astoria", "Harlem"],
        industries: &["financial-services", "real-estate", "hospitality", "legal"],
        keywords: &["AI voice agent NYC", "New York AI chatbot", "NYC business automation"],
        stats: &[
            Stat { value: "8.8M", label: "residents" },
            Stat { value: "220K+", label: "small businesses" },
            Stat { value: "#1", label: "largest US city" },
        ],
        lat: 40.7128,
        lng: -74.0060,
    },
    City {
        slug: "los-angeles",
        name: "Los Angeles",
        state: "California",
        state_code: "CA",
        population: 3_898_747,
        description: "Los Angeles businesses serve customers across a sprawling metro \
                      and many languages.\n\nMultilingual AI agents keep every caller \
                      covered.",
        neighborhoods: &["Downtown", "Santa Monica", "Silver Lake", "Koreatown", "Westwood"],
        industries: &["automotive", "hospitality", "real-estate", "retail"],
        keywords: &["AI receptionist Los Angeles", "LA chatbot", "AI video agent California"],
        stats: &[
            Stat { value: "3.9M", label: "residents" },
            Stat { value: "185+", label: "languages spoken" },
            Stat { value: "#2", label: "largest US city" },
        ],
        lat: 34.0522,
        lng: -118.2437,
    },
    City {
        slug: "houston",
        name: "Houston",
        state: "Texas",
        state_code: "TX",
        population: 2_304_580,
        description: "Houston's growth keeps local service companies booked solid.\n\n\
                      AI agents answer the overflow so crews stay on the job.",
        neighborhoods: &["Downtown", "The Heights", "Montrose", "Midtown", "Galleria"],
        industries: &["home-services", "healthcare", "automotive", "insurance"],
        keywords: &["Houston AI answering service", "AI chatbot Houston", "Texas AI automation"],
        stats: &[
            Stat { value: "2.3M", label: "residents" },
            Stat { value: "#1", label: "US metro for population growth" },
            Stat { value: "145+", label: "languages spoken" },
        ],
        lat: 29.7604,
        lng: -95.3698,
    },
    City {
        slug: "phoenix",
        name: "Phoenix",
        state: "Arizona",
        state_code: "AZ",
        population: 1_608_139,
        description: "Phoenix summers mean surging HVAC calls and packed service \
                      schedules.\n\nAI agents triage emergencies and keep the calendar \
                      full year-round.",
        neighborhoods: &["Downtown", "Arcadia", "Ahwatukee", "Desert Ridge", "Encanto"],
        industries: &["home-services", "real-estate", "healthcare"],
        keywords: &["Phoenix AI receptionist", "AI voice agent Arizona", "Phoenix chatbot"],
        stats: &[
            Stat { value: "1.6M", label: "residents" },
            Stat { value: "300+", label: "days of sunshine" },
            Stat { value: "#5", label: "largest US city" },
        ],
        lat: 33.4484,
        lng: -112.0740,
    },
    City {
        slug: "dallas",
        name: "Dallas",
        state: "Texas",
        state_code: "TX",
        population: 1_304_379,
        description: "Dallas is home to dealerships, insurers and a booming \
                      professional services scene.\n\nAI agents help them respond first \
                      and close faster.",
        neighborhoods: &["Uptown", "Deep Ellum", "Bishop Arts", "Oak Lawn", "Lakewood"],
        industries: &["automotive", "insurance", "financial-services", "retail"],
        keywords: &["Dallas AI chatbot", "AI automation Dallas", "DFW AI voice agent"],
        stats: &[
            Stat { value: "1.3M", label: "residents" },
            Stat { value: "24", label: "Fortune 500 headquarters in the metro" },
            Stat { value: "#4", label: "largest US metro" },
        ],
        lat: 32.7767,
        lng: -96.7970,
    },
    City {
        slug: "miami",
        name: "Miami",
        state: "Florida",
        state_code: "FL",
        population: 442_241,
        description: "Miami's hospitality and real estate markets never sleep.\n\n\
                      Bilingual AI agents answer in **English and Spanish** at any hour.",
        neighborhoods: &["Brickell", "Wynwood", "Little Havana", "Coconut Grove", "Miami Beach"],
        industries: &["hospitality", "real-estate", "restaurants"],
        keywords: &["Miami AI receptionist", "bilingual AI chatbot Miami", "Florida AI agency"],
        stats: &[
            Stat { value: "440K", label: "residents" },
            Stat { value: "70%", label: "of residents speak Spanish" },
            Stat { value: "27M", label: "annual visitors" },
        ],
        lat: 25.7617,
        lng: -80.1918,
    },
    City {
        slug: "seattle",
        name: "Seattle",
        state: "Washington",
        state_code: "WA",
        population: 737_015,
        description: "Seattle customers are quick to adopt new technology and quick to \
                      notice slow service.\n\nLocal businesses use AI agents to match \
                      their expectations.",
        neighborhoods: &["Capitol Hill", "Ballard", "Fremont", "South Lake Union", "Queen Anne"],
        industries: &["retail", "healthcare", "restaurants"],
        keywords: &["Seattle AI chatbot", "AI voice agent Seattle", "Washington AI automation"],
        stats: &[
            Stat { value: "737K", label: "residents" },
            Stat { value: "#1", label: "US city for tech adoption" },
            Stat { value: "45K+", label: "small businesses" },
        ],
        lat: 47.6062,
        lng: -122.3321,
    },
];
