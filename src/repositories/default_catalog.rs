use time::OffsetDateTime;
use crate::models::snapshot::StoreSnapshot;
use crate::models::suggestion::{format_submission_date, Suggestion};

// (id, place name, category, description, submitted by, votes)
const CATALOG: [(u64, &str, &str, &str, &str, u64); 17] = [
    (1, "Bellagio Fountains", "attraction", "Iconic water show with music and lights. Free spectacular display every 15-30 minutes on the Strip.", "Vegas Veteran", 24),
    (2, "The Sphere", "show", "Revolutionary entertainment venue with immersive experiences. Check out U2 or other amazing shows here.", "Tech Enthusiast", 19),
    (3, "Top of the World Restaurant", "restaurant", "Revolving restaurant 800+ feet above the Strip at Stratosphere. Incredible 360° views while dining.", "Foodie Guide", 16),
    (4, "Fremont Street Experience", "attraction", "Downtown Vegas pedestrian mall with LED canopy shows, street performers, and vintage Vegas vibes.", "Old Vegas Fan", 14),
    (5, "Omnia Nightclub", "bar", "Premier nightclub at Caesars Palace with world-class DJs and stunning terrace overlooking the Strip.", "Night Owl", 12),
    (6, "Forum Shops at Caesars", "shopping", "Luxury shopping with over 160 stores and restaurants in Roman-themed mall. Great for souvenirs or high-end shopping.", "Shopaholic", 11),
    (7, "Blue Man Group", "show", "Unique multimedia theatrical experience combining music, comedy, and technology. Perfect entertainment after conference days.", "Show Lover", 10),
    (8, "Red Rock Canyon", "attraction", "Stunning natural landscapes just 17 miles from the Strip. Great for hiking, scenic drives, and escaping the city.", "Nature Explorer", 9),
    (9, "Bacchanal Buffet", "restaurant", "Award-winning buffet at Caesars Palace with over 500 dishes from around the world. Worth the splurge!", "Buffet King", 8),
    (10, "SkyPod at Stratosphere", "attraction", "Observation deck with thrill rides 1,149 feet above ground. Amazing views and adrenaline rush.", "Thrill Seeker", 7),
    (11, "Chandelier Bar", "bar", "Three-story bar inside the Cosmopolitan with unique cocktails and stunning crystal chandelier design.", "Cocktail Connoisseur", 6),
    (12, "High Roller Observation Wheel", "attraction", "World's largest observation wheel with 30-minute rides offering 360° Strip views. Great for photos!", "Photo Enthusiast", 6),
    (13, "Cirque du Soleil", "show", "Multiple shows available (O, KÀ, Mystère, etc.). World-class acrobatics and artistic performances.", "Art Lover", 5),
    (14, "Publicus", "coffee", "Trendy coffee shop and eatery in downtown with artisanal coffee, great food, and hip atmosphere.", "Coffee Addict", 4),
    (15, "Neon Museum", "attraction", "Outdoor museum showcasing iconic Vegas neon signs. Perfect for history buffs and unique photo ops.", "History Buff", 3),
    (16, "Hell's Kitchen", "restaurant", "Gordon Ramsay's flagship restaurant at Caesars Palace. Experience the TV show atmosphere with exceptional food.", "Reality TV Fan", 2),
    (17, "Container Park", "attraction", "Unique shopping and dining area in downtown made from shipping containers. Family-friendly with playground.", "Urban Explorer", 1),
];

/// The places every fresh store starts with. Their vote counts are
/// carried-over tallies with no ledger entries behind them.
pub fn default_catalog(seeded_at: OffsetDateTime) -> StoreSnapshot {
    let timestamp = format_submission_date(seeded_at);
    let suggestions = CATALOG
        .iter()
        .map(|&(id, place_name, category, description, your_name, votes)| Suggestion {
            id,
            place_name: place_name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            your_name: your_name.to_string(),
            timestamp: timestamp.clone(),
            votes,
        })
        .collect();

    StoreSnapshot {
        suggestions,
        ..StoreSnapshot::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_and_ranked_by_votes() {
        let snapshot = default_catalog(OffsetDateTime::now_utc());
        let ids: HashSet<u64> = snapshot.suggestions.iter().map(|s| s.id).collect();

        assert_eq!(ids.len(), 17);
        assert!(snapshot.suggestions.windows(2).all(|pair| pair[0].votes >= pair[1].votes));
        assert_eq!(snapshot.suggestions[0].place_name, "Bellagio Fountains");
    }
}
