//! Travel package data shown in the gallery

/// A bookable travel package
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub destination: String,
    pub nights: u8,
    pub price_usd: u32,
}

impl Package {
    pub fn new(name: &str, destination: &str, nights: u8, price_usd: u32) -> Self {
        Self {
            name: name.to_string(),
            destination: destination.to_string(),
            nights,
            price_usd,
        }
    }
}

/// The featured packages for the demo gallery
pub fn featured() -> Vec<Package> {
    vec![
        Package::new("Caribbean Escape", "Cancún, Mexico", 7, 1299),
        Package::new("City of Light", "Paris, France", 5, 1580),
        Package::new("Tango Weekend", "Buenos Aires, Argentina", 4, 890),
        Package::new("Island Hopper", "Santorini, Greece", 6, 1740),
        Package::new("Andes Trek", "Cusco, Peru", 8, 1120),
        Package::new("Old Town Stroll", "Prague, Czechia", 5, 980),
        Package::new("Desert Nights", "Marrakech, Morocco", 6, 1040),
        Package::new("Harbor Lights", "Sydney, Australia", 9, 2310),
        Package::new("Northern Glow", "Reykjavik, Iceland", 5, 1690),
        Package::new("Temple Trail", "Kyoto, Japan", 7, 2150),
        Package::new("Coastal Drive", "Lisbon, Portugal", 6, 1210),
        Package::new("Safari Sunrise", "Nairobi, Kenya", 8, 2480),
    ]
}
