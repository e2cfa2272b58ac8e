// region:    --- Imports
use crate::auction::events::AuctionEvent;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Event Consumer
/// 경매 이벤트 소비자
/// 저장소가 발행한 이벤트를 받아 기록한다.
pub struct EventConsumer {
    receiver: broadcast::Receiver<AuctionEvent>,
}

impl EventConsumer {
    pub fn new(receiver: broadcast::Receiver<AuctionEvent>) -> Self {
        EventConsumer { receiver }
    }

    /// 이벤트 소비 시작
    /// 저장소가 사라져 채널이 닫히면 종료하며, 처리한 이벤트 수를 반환한다.
    pub async fn start(mut self) -> usize {
        let mut processed = 0;
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    Self::process_event(&event);
                    processed += 1;
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(
                        "{:<12} --> 처리하지 못한 이벤트 {}개 건너뜀",
                        "Events", skipped
                    );
                }
                Err(RecvError::Closed) => {
                    info!("{:<12} --> 이벤트 채널 종료", "Events");
                    return processed;
                }
            }
        }
    }

    /// 이벤트 처리
    fn process_event(event: &AuctionEvent) {
        match event {
            AuctionEvent::BidPlaced {
                item_id,
                bid_amount,
                balance_after,
                timestamp,
            } => info!(
                "{:<12} --> 입찰(BidPlaced) {} 금액 {} 잔액 {} at {}",
                "Events", item_id, bid_amount, balance_after, timestamp
            ),
            AuctionEvent::AuctionEnded {
                item_id,
                winner,
                final_bid,
                timestamp,
            } => info!(
                "{:<12} --> 경매 종료(AuctionEnded) {} 낙찰자 {} 최종 가격 {} at {}",
                "Events", item_id, winner, final_bid, timestamp
            ),
        }
    }
}
// endregion: --- Event Consumer

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::seed::{festival_items, DEFAULT_BALANCE};
    use crate::store::AuctionStore;

    #[tokio::test]
    async fn consumes_until_store_is_dropped() {
        let mut store = AuctionStore::new(festival_items(), DEFAULT_BALANCE).unwrap();
        let consumer = EventConsumer::new(store.subscribe());

        store.apply_bid("ugadi-theme", 80).unwrap();
        store.apply_bid("premium-storage", 50).unwrap();
        for _ in 0..60 {
            store.tick();
        }
        drop(store);

        // 입찰 2건 + exclusive-wallpaper 종료 1건
        assert_eq!(consumer.start().await, 3);
    }
}
