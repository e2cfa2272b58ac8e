// region:    --- Imports
use super::view::{AuctionSnapshot, ItemView};
use crate::bidding::error::BidError;
use crate::store::StoreHandle;
use tracing::info;

// endregion: --- Imports

// region:    --- Query Handlers

/// 경매 전체 스냅샷 조회
pub async fn get_auction_state(store: &StoreHandle) -> AuctionSnapshot {
    info!("{:<12} --> 경매 스냅샷 조회", "Query");
    store.snapshot().await
}

/// 상품 조회
pub async fn get_item(store: &StoreHandle, item_id: &str) -> Result<ItemView, BidError> {
    info!("{:<12} --> 상품 조회 id: {}", "Query", item_id);
    let store = store.lock().await;
    store
        .item(item_id)
        .map(|item| ItemView::new(item, store.balance()))
        .ok_or_else(|| BidError::ItemNotFound(item_id.to_string()))
}

/// 잔액 조회
pub async fn get_balance(store: &StoreHandle) -> u64 {
    store.lock().await.balance()
}

// endregion: --- Query Handlers

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::seed::{festival_items, DEFAULT_BALANCE};
    use crate::store::AuctionStore;

    fn handle() -> StoreHandle {
        StoreHandle::new(AuctionStore::new(festival_items(), DEFAULT_BALANCE).unwrap())
    }

    #[tokio::test]
    async fn snapshot_keeps_creation_order() {
        let snapshot = get_auction_state(&handle()).await;
        assert_eq!(snapshot.balance, 200);
        assert_eq!(snapshot.items.len(), 4);
        assert_eq!(snapshot.items[0].id, "ugadi-theme");
        assert_eq!(snapshot.items[3].id, "exclusive-wallpaper");
    }

    #[tokio::test]
    async fn missing_item() {
        let err = get_item(&handle(), "nope").await.unwrap_err();
        assert_eq!(err.code(), "ITEM_NOT_FOUND");
    }

    #[tokio::test]
    async fn balance_after_bid() {
        let store = handle();
        store.apply_bid("premium-storage", 50).await.unwrap();
        assert_eq!(get_balance(&store).await, 150);
        assert_eq!(get_item(&store, "premium-storage").await.unwrap().current_bid, 50);
    }
}
