use thiserror::Error;

/// 입찰 검증 실패
/// 모든 실패는 상태를 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BidError {
    #[error("상품을 찾을 수 없습니다: {0}")]
    ItemNotFound(String),

    #[error("경매가 이미 종료되었습니다: {0}")]
    AuctionEnded(String),

    #[error("입찰 금액이 현재 가격보다 낮습니다. 입찰: {amount}, 현재: {current_bid}")]
    BidTooLow { amount: u64, current_bid: u64 },

    #[error("보유 코인이 부족합니다. 입찰: {amount}, 잔액: {balance}")]
    InsufficientBalance { amount: u64, balance: u64 },
}

impl BidError {
    /// 응답에 포함되는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            BidError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            BidError::AuctionEnded(_) => "AUCTION_ENDED",
            BidError::BidTooLow { .. } => "LOW_BID",
            BidError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
        }
    }
}
