//! Fixed catalog of UK region, city and borough names offered by the area
//! selector.

/// Label shown first in the selector; means "no particular area".
pub const DEFAULT_AREA: &str = "Anywhere in the UK";

static UK_AREAS: &[&str] = &[
    "Anywhere in the UK",
    "Aberdeen",
    "Aberdeenshire",
    "Anglesey",
    "Angus",
    "Antrim and Newtownabbey",
    "Ards and North Down",
    "Argyll and Bute",
    "Armagh City, Banbridge and Craigavon",
    "Bangor",
    "Barnet",
    "Bath",
    "Bedfordshire",
    "Belfast",
    "Berkshire",
    "Bexley",
    "Birmingham",
    "Blackburn",
    "Blackpool",
    "Blaenau Gwent",
    "Bolton",
    "Bournemouth",
    "Bracknell Forest",
    "Bradford",
    "Brent",
    "Bridgend",
    "Bristol",
    "Bromley",
    "Buckinghamshire",
    "Bury",
    "Caerphilly",
    "Cambridgeshire",
    "Cambridge",
    "Camden",
    "Cardiff",
    "Carmarthenshire",
    "Causeway Coast and Glens",
    "Ceredigion",
    "Cheshire",
    "Chelmsford",
    "Cheltenham",
    "Chester",
    "Clackmannanshire",
    "Colchester",
    "Conwy",
    "Cornwall",
    "Coventry",
    "Croydon",
    "Cumbria",
    "Darlington",
    "Denbighshire",
    "Derby",
    "Derbyshire",
    "Derry",
    "Devon",
    "Doncaster",
    "Dorset",
    "Dudley",
    "Dumfries and Galloway",
    "Dundee",
    "Durham",
    "Ealing",
    "East Ayrshire",
    "East Dunbartonshire",
    "East Lothian",
    "East Midlands",
    "East of England",
    "East Renfrewshire",
    "East Sussex",
    "Edinburgh",
    "Enfield",
    "England",
    "Essex",
    "Exeter",
    "Falkirk",
    "Fermanagh and Omagh",
    "Fife",
    "Flintshire",
    "Gateshead",
    "Glasgow",
    "Gloucester",
    "Gloucestershire",
    "Greater London",
    "Greater Manchester",
    "Greenwich",
    "Gwynedd",
    "Hackney",
    "Halifax",
    "Hammersmith and Fulham",
    "Hampshire",
    "Haringey",
    "Harrow",
    "Hartlepool",
    "Havering",
    "Hereford",
    "Herefordshire",
    "Hertfordshire",
    "Highland",
    "Hillingdon",
    "Hounslow",
    "Hove",
    "Huddersfield",
    "Inverness",
    "Ipswich",
    "Isle of Wight",
    "Islington",
    "Kensington and Chelsea",
    "Kent",
    "Kingston upon Thames",
    "Lambeth",
    "Lancashire",
    "Leeds",
    "Leicester",
    "Leicestershire",
    "Lewisham",
    "Lincolnshire",
    "Lisburn",
    "Liverpool",
    "London",
    "Luton",
    "Manchester",
    "Medway",
    "Merseyside",
    "Merthyr Tydfil",
    "Midlothian",
    "Milton Keynes",
    "Monmouthshire",
    "Moray",
    "Merton",
    "Middlesbrough",
    "Na h-Eileanan Siar",
    "Neath Port Talbot",
    "Newcastle upon Tyne",
    "Newham",
    "Newport",
    "Newry",
    "Norfolk",
    "North Ayrshire",
    "North East England",
    "North Lanarkshire",
    "North Northamptonshire",
    "North Somerset",
    "North Tyneside",
    "North West England",
    "North Yorkshire",
    "Northamptonshire",
    "Northumberland",
    "Northern Ireland",
    "Nottingham",
    "Nottinghamshire",
    "Norwich",
    "Oldham",
    "Orkney Islands",
    "Oxfordshire",
    "Pembrokeshire",
    "Perth",
    "Peterborough",
    "Plymouth",
    "Poole",
    "Portsmouth",
    "Powys",
    "Preston",
    "Reading",
    "Redbridge",
    "Renfrewshire",
    "Rhondda Cynon Taf",
    "Richmond upon Thames",
    "Rochdale",
    "Rutland",
    "Salford",
    "Scarborough",
    "Scotland",
    "Scottish Borders",
    "Sefton",
    "Sheffield",
    "Shetland Islands",
    "Shropshire",
    "Slough",
    "Solihull",
    "Somerset",
    "South Ayrshire",
    "South East England",
    "South Gloucestershire",
    "South Lanarkshire",
    "South Shields",
    "South Tyneside",
    "South West England",
    "Southampton",
    "Southend-on-Sea",
    "Southwark",
    "St Helens",
    "Staffordshire",
    "Stirling",
    "Stockport",
    "Stoke-on-Trent",
    "Suffolk",
    "Sunderland",
    "Surrey",
    "Sutton",
    "Swansea",
    "Swindon",
    "Telford",
    "Thurrock",
    "Torfaen",
    "Torquay",
    "Tower Hamlets",
    "Trafford",
    "Tyne and Wear",
    "Vale of Glamorgan",
    "Wakefield",
    "Wales",
    "Waltham Forest",
    "Wandsworth",
    "Warrington",
    "Warwickshire",
    "West Dunbartonshire",
    "West Lothian",
    "West Midlands",
    "West Sussex",
    "Westminster",
    "Wigan",
    "Wiltshire",
    "Wokingham",
    "Wolverhampton",
    "Worcester",
    "Worcestershire",
    "Wrexham",
    "York",
    "Yorkshire and the Humber",
];

/// Area labels for a selector, [`DEFAULT_AREA`] first.
#[must_use]
pub fn uk_areas() -> &'static [&'static str] {
    UK_AREAS
}

/// Returns `true` for labels that select no specific area.
#[must_use]
pub fn is_placeholder_area(label: &str) -> bool {
    matches!(label.trim(), "" | "Any" | DEFAULT_AREA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_starts_with_default_label() {
        assert_eq!(uk_areas().first().copied(), Some(DEFAULT_AREA));
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for area in uk_areas() {
            assert!(seen.insert(*area), "duplicate area label: {area}");
        }
    }

    #[test]
    fn placeholder_labels() {
        assert!(is_placeholder_area(DEFAULT_AREA));
        assert!(is_placeholder_area("Any"));
        assert!(is_placeholder_area("  "));
        assert!(!is_placeholder_area("Brixton"));
        assert!(!is_placeholder_area("London"));
    }
}
