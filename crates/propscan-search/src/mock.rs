//! Built-in sample properties served when the live API yields nothing.

use propscan_core::{is_placeholder_area, PropertyRecord};

/// Records returned for a placeholder area ("Anywhere in the UK").
const MIXED_SAMPLE_SIZE: usize = 6;

struct SampleProperty {
    address: &'static str,
    postcode: &'static str,
    price: i64,
    score: u8,
}

const fn sample(
    address: &'static str,
    postcode: &'static str,
    price: i64,
    score: u8,
) -> SampleProperty {
    SampleProperty {
        address,
        postcode,
        price,
        score,
    }
}

struct MockCity {
    name: &'static str,
    properties: &'static [SampleProperty],
}

static MOCK_CITIES: &[MockCity] = &[
    MockCity {
        name: "London",
        properties: &[
            sample("42 Baker Street, W1U 3BW", "W1U 3BW", 850_000, 85),
            sample("15 Abbey Road, NW8 9AY", "NW8 9AY", 720_000, 78),
            sample("221B Baker Street, NW1 6XE", "NW1 6XE", 1_200_000, 92),
        ],
    },
    MockCity {
        name: "Manchester",
        properties: &[
            sample("12 Deansgate, M3 2BY", "M3 2BY", 450_000, 73),
            sample("88 Oxford Road, M1 5NH", "M1 5NH", 380_000, 68),
            sample("5 Piccadilly, M1 1RG", "M1 1RG", 520_000, 81),
        ],
    },
    MockCity {
        name: "Birmingham",
        properties: &[
            sample("34 New Street, B2 4RH", "B2 4RH", 320_000, 70),
            sample("19 Broad Street, B1 2HF", "B1 2HF", 290_000, 65),
            sample("7 Corporation Street, B4 6QB", "B4 6QB", 410_000, 77),
        ],
    },
    MockCity {
        name: "Leeds",
        properties: &[
            sample("25 Briggate, LS1 6HD", "LS1 6HD", 340_000, 74),
            sample("10 The Headrow, LS1 8TL", "LS1 8TL", 295_000, 69),
            sample("18 Park Row, LS1 5HN", "LS1 5HN", 420_000, 80),
        ],
    },
    MockCity {
        name: "Glasgow",
        properties: &[
            sample("45 Buchanan Street, G1 3HL", "G1 3HL", 310_000, 76),
            sample("8 Sauchiehall Street, G2 3JD", "G2 3JD", 275_000, 71),
            sample("22 George Square, G2 1DS", "G2 1DS", 480_000, 83),
        ],
    },
    MockCity {
        name: "Edinburgh",
        properties: &[
            sample("101 Princes Street, EH2 3AA", "EH2 3AA", 650_000, 88),
            sample("12 Royal Mile, EH1 1TB", "EH1 1TB", 780_000, 90),
            sample("7 Grassmarket, EH1 2HS", "EH1 2HS", 520_000, 79),
        ],
    },
    MockCity {
        name: "Bristol",
        properties: &[
            sample("33 Park Street, BS1 5NH", "BS1 5NH", 385_000, 75),
            sample("14 Clifton Down, BS8 3LT", "BS8 3LT", 490_000, 82),
            sample("9 Whiteladies Road, BS8 2PH", "BS8 2PH", 355_000, 72),
        ],
    },
    MockCity {
        name: "Liverpool",
        properties: &[
            sample("21 Bold Street, L1 4DJ", "L1 4DJ", 285_000, 73),
            sample("16 Lime Street, L1 1JQ", "L1 1JQ", 240_000, 68),
            sample("5 Hope Street, L1 9BQ", "L1 9BQ", 365_000, 80),
        ],
    },
    MockCity {
        name: "Cardiff",
        properties: &[
            sample("18 Queen Street, CF10 2BU", "CF10 2BU", 295_000, 74),
            sample("7 St Mary Street, CF10 1AT", "CF10 1AT", 260_000, 69),
            sample("25 Cathedral Road, CF11 9LL", "CF11 9LL", 420_000, 81),
        ],
    },
    MockCity {
        name: "Belfast",
        properties: &[
            sample("12 Royal Avenue, BT1 1DA", "BT1 1DA", 245_000, 72),
            sample("8 Donegall Place, BT1 5AJ", "BT1 5AJ", 215_000, 67),
            sample("31 Botanic Avenue, BT7 1JG", "BT7 1JG", 310_000, 78),
        ],
    },
];

/// Serves sample records for `area_label`, filtered by `text_filter`.
///
/// A known city yields its own samples; a placeholder label yields the first
/// few samples across all cities; any other label yields nothing. A non-blank
/// `text_filter` keeps only records whose address contains it,
/// case-insensitively.
#[must_use]
pub fn mock_resolve(area_label: &str, text_filter: &str) -> Vec<PropertyRecord> {
    let label = area_label.trim();
    let mut records: Vec<PropertyRecord> = if let Some(city) =
        MOCK_CITIES.iter().find(|c| c.name == label)
    {
        city.properties.iter().map(|p| to_record(p, city.name)).collect()
    } else if is_placeholder_area(label) {
        MOCK_CITIES
            .iter()
            .flat_map(|c| c.properties.iter().map(move |p| to_record(p, c.name)))
            .take(MIXED_SAMPLE_SIZE)
            .collect()
    } else {
        Vec::new()
    };

    let needle = text_filter.trim().to_lowercase();
    if !needle.is_empty() {
        records.retain(|r| r.address.to_lowercase().contains(&needle));
    }
    records
}

fn to_record(sample: &SampleProperty, city: &str) -> PropertyRecord {
    let mut record = PropertyRecord::new(sample.address, sample.postcode, city);
    record.current_price = Some(sample.price);
    record.sustainability_score = Some(sample.score);
    record
}
