use serde::{Deserialize, Serialize};
use std::fmt;

// 상품 카테고리
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Theme,
    Feature,
    Bonus,
    Exclusive,
}

impl Category {
    /// 화면 표시용 라벨
    pub fn label(self) -> &'static str {
        match self {
            Category::Theme => "THEME",
            Category::Feature => "FEATURE",
            Category::Bonus => "BONUS",
            Category::Exclusive => "EXCLUSIVE",
        }
    }

    /// 화면 표시용 아이콘
    pub fn icon(self) -> &'static str {
        match self {
            Category::Theme => "🎨",
            Category::Feature => "⚡",
            Category::Bonus => "🎁",
            Category::Exclusive => "👑",
        }
    }
}

// 최고 입찰자
// 로컬 참가자 이외의 입찰자는 시드 데이터에만 존재한다.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum Bidder {
    Local,
    Other(String),
}

impl fmt::Display for Bidder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bidder::Local => f.write_str("You"),
            Bidder::Other(name) => f.write_str(name),
        }
    }
}

// 경매 상품 모델
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuctionItem {
    pub id: String,
    pub name: String,
    pub telugu_name: String,
    pub description: String,
    pub icon: String,
    pub starting_bid: u64,
    pub current_bid: u64,
    pub highest_bidder: Bidder,
    pub remaining_time: u64,
    pub category: Category,
}

impl AuctionItem {
    /// 경매 종료 여부
    pub fn is_ended(&self) -> bool {
        self.remaining_time == 0
    }

    /// 다음 입찰 최소 금액
    pub fn min_next_bid(&self) -> u64 {
        self.current_bid.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bidder_display() {
        assert_eq!(Bidder::Local.to_string(), "You");
        assert_eq!(Bidder::Other("TechGuru".into()).to_string(), "TechGuru");
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Exclusive).unwrap();
        assert_eq!(json, "\"exclusive\"");
        assert_eq!(Category::Exclusive.label(), "EXCLUSIVE");
    }

    #[test]
    fn bidder_serializes_tagged() {
        let json = serde_json::to_value(Bidder::Other("ArtCollector".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "other", "name": "ArtCollector"}));
        let json = serde_json::to_value(Bidder::Local).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "local"}));
    }
}
