// region:    --- Imports
use crate::bidding::model::{AuctionItem, Bidder, Category};
use serde::Serialize;
// endregion: --- Imports

// 남은 시간 경고 기준 (초)
const CRITICAL_SECS: u64 = 60;
const WARNING_SECS: u64 = 120;

// region:    --- View Model
/// 남은 시간 긴급도
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Warning,
    Critical,
}

impl Urgency {
    pub fn from_remaining(secs: u64) -> Self {
        if secs < CRITICAL_SECS {
            Urgency::Critical
        } else if secs < WARNING_SECS {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

/// 입찰 폼 범위
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct BidBounds {
    pub min: u64,
    pub max: u64,
}

/// 상품 표시 모델
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub telugu_name: String,
    pub description: String,
    pub icon: String,
    pub category: Category,
    pub category_label: &'static str,
    pub category_icon: &'static str,
    pub starting_bid: u64,
    pub current_bid: u64,
    pub highest_bidder: Bidder,
    pub highest_bidder_name: String,
    pub remaining_time: u64,
    pub time_left: String,
    pub urgency: Urgency,
    pub ended: bool,
    pub winner: Option<String>,
    pub bid_bounds: Option<BidBounds>,
}

impl ItemView {
    pub fn new(item: &AuctionItem, balance: u64) -> Self {
        let ended = item.is_ended();
        let bidder_name = item.highest_bidder.to_string();
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            telugu_name: item.telugu_name.clone(),
            description: item.description.clone(),
            icon: item.icon.clone(),
            category: item.category,
            category_label: item.category.label(),
            category_icon: item.category.icon(),
            starting_bid: item.starting_bid,
            current_bid: item.current_bid,
            highest_bidder: item.highest_bidder.clone(),
            highest_bidder_name: bidder_name.clone(),
            remaining_time: item.remaining_time,
            time_left: format_time(item.remaining_time),
            urgency: Urgency::from_remaining(item.remaining_time),
            ended,
            winner: ended.then_some(bidder_name),
            // 종료됐거나 잔액으로 최소 금액을 낼 수 없으면 폼을 막는다
            bid_bounds: (!ended && item.min_next_bid() <= balance).then(|| BidBounds {
                min: item.min_next_bid(),
                max: balance,
            }),
        }
    }
}

/// 경매 화면 스냅샷
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AuctionSnapshot {
    pub balance: u64,
    pub items: Vec<ItemView>,
}

impl AuctionSnapshot {
    pub fn new(items: &[AuctionItem], balance: u64) -> Self {
        Self {
            balance,
            items: items.iter().map(|item| ItemView::new(item, balance)).collect(),
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&ItemView> {
        self.items.iter().find(|item| item.id == item_id)
    }
}
// endregion: --- View Model

/// 남은 시간을 `m:ss` 형식으로 변환
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::seed::festival_items;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(300), "5:00");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(61), "1:01");
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(Urgency::from_remaining(59), Urgency::Critical);
        assert_eq!(Urgency::from_remaining(60), Urgency::Warning);
        assert_eq!(Urgency::from_remaining(119), Urgency::Warning);
        assert_eq!(Urgency::from_remaining(120), Urgency::Normal);
    }

    #[test]
    fn open_item_view() {
        let items = festival_items();
        let view = ItemView::new(&items[0], 200);
        assert_eq!(view.time_left, "5:00");
        assert_eq!(view.highest_bidder_name, "TeluguFan123");
        assert_eq!(view.winner, None);
        assert_eq!(view.bid_bounds, Some(BidBounds { min: 76, max: 200 }));
    }

    #[test]
    fn ended_item_shows_winner() {
        let mut item = festival_items().remove(3);
        item.remaining_time = 0;
        let view = ItemView::new(&item, 200);
        assert!(view.ended);
        assert_eq!(view.winner.as_deref(), Some("ArtCollector"));
        assert_eq!(view.bid_bounds, None);
    }

    #[test]
    fn bounds_hidden_when_balance_too_small() {
        let items = festival_items();
        let view = ItemView::new(&items[0], 75);
        assert_eq!(view.bid_bounds, None);
    }
}
// endregion: --- Tests
