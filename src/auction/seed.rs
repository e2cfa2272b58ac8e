/// 우가디 축제 경매 초기 상품
/// 세션 시작 시 고정된 값으로 생성된다.
// region:    --- Imports
use crate::bidding::model::{AuctionItem, Bidder, Category};
// endregion: --- Imports

// region:    --- Seed
/// 세션 시작 시 참가자 코인 잔액
pub const DEFAULT_BALANCE: u64 = 200;

struct SeedItem {
    id: &'static str,
    name: &'static str,
    telugu_name: &'static str,
    description: &'static str,
    icon: &'static str,
    starting_bid: u64,
    current_bid: u64,
    highest_bidder: &'static str,
    remaining_time: u64,
    category: Category,
}

const FESTIVAL_ITEMS: [SeedItem; 4] = [
    SeedItem {
        id: "ugadi-theme",
        name: "Ugadi Festival Theme",
        telugu_name: "ఉగాది పండుగ థీమ్",
        description: "Beautiful Telugu New Year theme with traditional colors",
        icon: "🎊",
        starting_bid: 50,
        current_bid: 75,
        highest_bidder: "TeluguFan123",
        remaining_time: 300,
        category: Category::Theme,
    },
    SeedItem {
        id: "premium-storage",
        name: "Premium Cloud Storage",
        telugu_name: "ప్రీమియం క్లౌడ్ స్టోరేజ్",
        description: "Extra 10GB cloud storage for 1 month",
        icon: "☁️",
        starting_bid: 30,
        current_bid: 45,
        highest_bidder: "TechGuru",
        remaining_time: 180,
        category: Category::Feature,
    },
    SeedItem {
        id: "ad-free-week",
        name: "Ad-Free Week",
        telugu_name: "విజ్ఞాపనలు లేని వారం",
        description: "Complete ad-free browsing experience for 7 days",
        icon: "🚫",
        starting_bid: 20,
        current_bid: 35,
        highest_bidder: "PrivacyLover",
        remaining_time: 120,
        category: Category::Bonus,
    },
    SeedItem {
        id: "exclusive-wallpaper",
        name: "Exclusive Telugu Wallpaper",
        telugu_name: "ప్రత్యేక తెలుగు వాల్‌పేపర్",
        description: "Limited edition Telugu cultural wallpaper pack",
        icon: "🖼️",
        starting_bid: 15,
        current_bid: 25,
        highest_bidder: "ArtCollector",
        remaining_time: 60,
        category: Category::Exclusive,
    },
];

/// 축제 경매 상품 목록 생성
pub fn festival_items() -> Vec<AuctionItem> {
    FESTIVAL_ITEMS
        .iter()
        .map(|seed| AuctionItem {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            telugu_name: seed.telugu_name.to_string(),
            description: seed.description.to_string(),
            icon: seed.icon.to_string(),
            starting_bid: seed.starting_bid,
            current_bid: seed.current_bid,
            highest_bidder: Bidder::Other(seed.highest_bidder.to_string()),
            remaining_time: seed.remaining_time,
            category: seed.category,
        })
        .collect()
}
// endregion: --- Seed

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_order_and_invariants() {
        let items = festival_items();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            ["ugadi-theme", "premium-storage", "ad-free-week", "exclusive-wallpaper"]
        );
        assert!(items.iter().all(|i| i.current_bid >= i.starting_bid));
        assert!(items.iter().all(|i| !i.is_ended()));
    }
}
