//! Static sugarcane pest, disease and weed catalogs
//!
//! Loaded once into read-only memory; every assessment borrows them.

use crate::models::{DetectionCategory, DiseaseRecord, PestRecord, WeedRecord};
use crate::types::{DayRange, MONTH_NAMES};

/// The only diseases the imagery fungal signal is evaluated against
pub const FUNGAL_DISEASES: [&str; 2] = ["Red Rot", "Rust"];

const fn days(min_days: i64, max_days: i64) -> Option<DayRange> {
    Some(DayRange::new(min_days, max_days))
}

pub static PESTS: &[PestRecord] = &[
    PestRecord {
        name: "Early shoot borer",
        months: &["April", "May", "June", "July"],
        stage: days(0, 120),
        category: DetectionCategory::Chewing,
    },
    PestRecord {
        name: "Top shoot borer",
        months: &["January", "February", "March", "April"],
        stage: days(46, 210),
        category: DetectionCategory::Chewing,
    },
    PestRecord {
        name: "Root borer",
        months: &["April", "May", "June", "July", "August", "September", "October"],
        stage: days(0, 45),
        category: DetectionCategory::Chewing,
    },
    PestRecord {
        name: "Internode borer",
        months: &["October", "November", "December"],
        stage: days(121, 365),
        category: DetectionCategory::Chewing,
    },
    PestRecord {
        name: "White grub",
        months: &["May", "June", "July", "August", "September"],
        stage: days(46, 365),
        category: DetectionCategory::SoilBorne,
    },
    PestRecord {
        name: "Termites",
        months: &[
            "September", "October", "November", "December", "January", "February", "March", "April",
            "May",
        ],
        stage: days(0, 365),
        category: DetectionCategory::SoilBorne,
    },
    PestRecord {
        name: "Whitefly",
        months: &["May", "June", "July", "August", "September", "October"],
        stage: days(121, 210),
        category: DetectionCategory::Sucking,
    },
    PestRecord {
        name: "Sugarcane woolly aphids",
        months: &MONTH_NAMES,
        stage: days(121, 365),
        category: DetectionCategory::Sucking,
    },
    PestRecord {
        name: "Sugarcane pyrilla",
        months: &["February", "March"],
        stage: days(121, 365),
        category: DetectionCategory::Sucking,
    },
    PestRecord {
        name: "Mealy bug",
        months: &["February", "March", "September", "October", "November", "December"],
        stage: days(121, 365),
        category: DetectionCategory::Sucking,
    },
    PestRecord {
        name: "Sugarcane scale insect",
        months: &["March", "April", "May", "June", "July", "August", "September", "October"],
        stage: days(46, 365),
        category: DetectionCategory::Sucking,
    },
];

/// Holds more diseases than are ever risk-evaluated; see [`FUNGAL_DISEASES`]
pub static DISEASES: &[DiseaseRecord] = &[
    DiseaseRecord {
        name: "Red Rot",
        months: &["July", "August", "September", "October", "November"],
        stage: days(121, 365),
    },
    DiseaseRecord {
        name: "Rust",
        months: &["August", "September", "October", "November", "December"],
        stage: days(46, 365),
    },
    DiseaseRecord {
        name: "Smut",
        months: &["February", "March", "April", "May", "June"],
        stage: days(0, 120),
    },
    DiseaseRecord {
        name: "Grassy Shoot",
        months: &["February", "March", "April", "May"],
        stage: days(90, 120),
    },
    DiseaseRecord {
        name: "Wilt",
        months: &["July", "August", "September", "October"],
        stage: days(121, 365),
    },
    DiseaseRecord {
        name: "Ratoon Stunting Disease (RSD)",
        months: &[
            "February", "March", "April", "May", "June", "July", "August", "September", "October",
            "November",
        ],
        stage: days(0, 365),
    },
    DiseaseRecord {
        name: "Leaf Scald",
        months: &["March", "April", "May", "June", "July", "August"],
        stage: days(90, 300),
    },
    DiseaseRecord {
        name: "Downy Mildew",
        months: &["June", "July", "August"],
        stage: days(121, 210),
    },
];

pub static WEEDS: &[WeedRecord] = &[
    WeedRecord {
        name: "Hariali (Cynodon dactylon)",
        months: &["February", "March", "April", "May"],
        when: "Perennial, flushes in warm months",
        where_found: "Irrigated fields, bunds, canals",
        why: "Aggressive competitor, spreads via stolons & rhizomes, hard to control",
        image: "/Image/hariyali.jpg",
        chemical: &["Fenoxaprop-p-ethyl 9.3% EC - 400 ml/acre in 150–200 l water"],
    },
    WeedRecord {
        name: "Congress Grass (Parthenium hysterophorus)",
        months: &["February", "March", "April", "May"],
        when: "Germinates with first rains",
        where_found: "Roadsides, waste lands, also in cane fields",
        why: "Allelopathic, fast spreading, causes worker allergies",
        image: "/Image/congress grass.jpg",
        chemical: &["2,4-D Sodium Salt 80% WP - 500–750 gm/acre in 150–200 l water"],
    },
    WeedRecord {
        name: "Rajgira (Amaranthus spp.)",
        months: &["June", "July", "August", "September"],
        when: "Emerges in rainy season",
        where_found: "Fertile, irrigated cane fields",
        why: "Fast-growing broadleaf, competes for light & nutrients",
        image: "/Image/Amaranthus spp.jpg",
        chemical: &["Atrazine 50% WP - 500 gm/acre in 150–200 l water"],
    },
    WeedRecord {
        name: "Bathua (Chenopodium album)",
        months: &["October", "November", "December", "January"],
        when: "Germinates in winter (low temp)",
        where_found: "Northern India, fertile irrigated lands",
        why: "Competes during early cane growth, reduces tillering",
        image: "/Image/bathua.jpg",
        chemical: &["2,4-D Sodium Salt 80% WP - 600–700 gm/acre in 150–200 l water"],
    },
];
