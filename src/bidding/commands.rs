/// 입찰 관련 커맨드 처리
/// 1. 입찰
/// 2. 입찰 가능 여부 확인
// region:    --- Imports
use super::error::BidError;
use crate::query::view::ItemView;
use crate::store::StoreHandle;
use serde::{Deserialize, Serialize};
use tracing::info;
// endregion: --- Imports

// region:    --- Commands
/// 입찰 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaceBidCommand {
    pub item_id: String,
    pub amount: u64,
}

/// 입찰 결과
#[derive(Debug, Serialize, Clone)]
pub struct BidReceipt {
    pub item: ItemView,
    pub balance: u64,
}

/// 1. 입찰
/// 검증, 적용, 결과 조회가 하나의 락 안에서 처리된다.
pub async fn handle_place_bid(
    cmd: PlaceBidCommand,
    store: &StoreHandle,
) -> Result<BidReceipt, BidError> {
    info!("{:<12} --> 입찰 요청 처리 시작: {:?}", "Command", cmd);
    let mut store = store.lock().await;
    store.apply_bid(&cmd.item_id, cmd.amount)?;

    let balance = store.balance();
    let item = store
        .item(&cmd.item_id)
        .map(|item| ItemView::new(item, balance))
        .ok_or_else(|| BidError::ItemNotFound(cmd.item_id.clone()))?;
    Ok(BidReceipt { item, balance })
}

/// 2. 입찰 가능 여부 확인
pub async fn handle_check_bid(cmd: &PlaceBidCommand, store: &StoreHandle) -> Result<(), BidError> {
    store.check_bid(&cmd.item_id, cmd.amount).await
}

// endregion: --- Commands

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::seed::{festival_items, DEFAULT_BALANCE};
    use crate::bidding::model::Bidder;
    use crate::store::AuctionStore;

    fn handle() -> StoreHandle {
        StoreHandle::new(AuctionStore::new(festival_items(), DEFAULT_BALANCE).unwrap())
    }

    fn cmd(item_id: &str, amount: u64) -> PlaceBidCommand {
        PlaceBidCommand {
            item_id: item_id.to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn place_bid_returns_receipt() {
        let store = handle();
        let receipt = handle_place_bid(cmd("ugadi-theme", 80), &store).await.unwrap();
        assert_eq!(receipt.balance, 120);
        assert_eq!(receipt.item.current_bid, 80);
        assert_eq!(receipt.item.highest_bidder, Bidder::Local);
        assert_eq!(receipt.item.highest_bidder_name, "You");
    }

    #[tokio::test]
    async fn check_does_not_mutate() {
        let store = handle();
        handle_check_bid(&cmd("ugadi-theme", 80), &store).await.unwrap();
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.balance, 200);
        assert_eq!(snapshot.item("ugadi-theme").unwrap().current_bid, 75);
    }
}
