use crate::bidding::model::Bidder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum AuctionEvent {
    // 입찰 이벤트
    BidPlaced {
        item_id: String,
        bid_amount: u64,
        balance_after: u64,
        timestamp: DateTime<Utc>,
    },
    // 경매 종료 이벤트
    AuctionEnded {
        item_id: String,
        winner: Bidder,
        final_bid: u64,
        timestamp: DateTime<Utc>,
    },
}

impl AuctionEvent {
    /// 이벤트 대상 상품 id
    pub fn item_id(&self) -> &str {
        match self {
            AuctionEvent::BidPlaced { item_id, .. } => item_id,
            AuctionEvent::AuctionEnded { item_id, .. } => item_id,
        }
    }
}
