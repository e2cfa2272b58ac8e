/// 경매 저장소
/// 상품 목록과 참가자 잔액을 보유하며 모든 상태 변경은 이 모듈을 통해서만 일어난다.
/// 1. 입찰 적용
/// 2. 카운트다운 틱
// region:    --- Imports
use crate::auction::events::AuctionEvent;
use crate::bidding::error::BidError;
use crate::bidding::model::{AuctionItem, Bidder};
use crate::bidding::validator::validate_bid;
use crate::query::view::AuctionSnapshot;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, Mutex, MutexGuard};
use tracing::{debug, info, warn};
// endregion: --- Imports

// 이벤트 채널 버퍼 크기
const EVENT_CHANNEL_CAPACITY: usize = 64;

// region:    --- Store Error
/// 저장소 생성 실패
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("중복된 상품 id: {0}")]
    DuplicateItem(String),

    #[error("현재 가격이 시작 가격보다 낮습니다: {id} (현재: {current_bid}, 시작: {starting_bid})")]
    CurrentBelowStarting {
        id: String,
        current_bid: u64,
        starting_bid: u64,
    },
}
// endregion: --- Store Error

// region:    --- Auction Store
pub struct AuctionStore {
    items: Vec<AuctionItem>,
    balance: u64,
    events: broadcast::Sender<AuctionEvent>,
}

impl AuctionStore {
    /// 경매 저장소 생성
    pub fn new(items: Vec<AuctionItem>, balance: u64) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(StoreError::DuplicateItem(item.id.clone()));
            }
            if item.current_bid < item.starting_bid {
                return Err(StoreError::CurrentBelowStarting {
                    id: item.id.clone(),
                    current_bid: item.current_bid,
                    starting_bid: item.starting_bid,
                });
            }
        }

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            items,
            balance,
            events,
        })
    }

    /// 상품 목록 (생성 순서)
    pub fn list_items(&self) -> &[AuctionItem] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&AuctionItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// 상태 변경 없이 입찰 가능 여부만 검증
    pub fn check_bid(&self, item_id: &str, amount: u64) -> Result<(), BidError> {
        validate_bid(&self.items, self.balance, item_id, amount).map(|_| ())
    }

    /// 입찰 적용
    /// 검증에 실패하면 어떤 상태도 변경하지 않는다.
    pub fn apply_bid(&mut self, item_id: &str, amount: u64) -> Result<(), BidError> {
        let index = match validate_bid(&self.items, self.balance, item_id, amount) {
            Ok(index) => index,
            Err(e) => {
                warn!("{:<12} --> 입찰 거절: {} ({})", "Store", e, e.code());
                return Err(e);
            }
        };

        let item = &mut self.items[index];
        item.current_bid = amount;
        item.highest_bidder = Bidder::Local;
        self.balance -= amount;

        info!(
            "{:<12} --> 입찰 성공: {} 현재 가격 {}, 잔액 {}",
            "Store", item.id, amount, self.balance
        );

        self.publish(AuctionEvent::BidPlaced {
            item_id: item_id.to_string(),
            bid_amount: amount,
            balance_after: self.balance,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// 모든 상품의 남은 시간을 1 감소 (0 에서 멈춤)
    pub fn tick(&mut self) {
        let mut ended = Vec::new();
        for item in self.items.iter_mut() {
            if item.remaining_time == 0 {
                continue;
            }
            item.remaining_time -= 1;
            if item.remaining_time == 0 {
                ended.push(AuctionEvent::AuctionEnded {
                    item_id: item.id.clone(),
                    winner: item.highest_bidder.clone(),
                    final_bid: item.current_bid,
                    timestamp: Utc::now(),
                });
            }
        }

        debug!(
            "{:<12} --> 틱 처리 완료, 진행 중인 경매 {}개",
            "Store",
            self.items.iter().filter(|item| !item.is_ended()).count()
        );

        for event in ended {
            info!("{:<12} --> 경매 종료: {}", "Store", event.item_id());
            self.publish(event);
        }
    }

    /// 표시용 스냅샷
    pub fn snapshot(&self) -> AuctionSnapshot {
        AuctionSnapshot::new(&self.items, self.balance)
    }

    /// 이벤트 구독
    pub fn subscribe(&self) -> broadcast::Receiver<AuctionEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: AuctionEvent) {
        // 구독자가 없으면 전송 실패는 무시한다
        let _ = self.events.send(event);
    }
}
// endregion: --- Auction Store

// region:    --- Store Handle
/// 저장소 공유 핸들
/// 락을 잡은 동안 하나의 변경이 끝까지 실행된다.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<AuctionStore>>,
}

impl StoreHandle {
    pub fn new(store: AuctionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, AuctionStore> {
        self.inner.lock().await
    }

    pub async fn apply_bid(&self, item_id: &str, amount: u64) -> Result<(), BidError> {
        self.lock().await.apply_bid(item_id, amount)
    }

    pub async fn check_bid(&self, item_id: &str, amount: u64) -> Result<(), BidError> {
        self.lock().await.check_bid(item_id, amount)
    }

    pub async fn tick(&self) {
        self.lock().await.tick()
    }

    pub async fn snapshot(&self) -> AuctionSnapshot {
        self.lock().await.snapshot()
    }

    pub async fn subscribe(&self) -> broadcast::Receiver<AuctionEvent> {
        self.lock().await.subscribe()
    }
}
// endregion: --- Store Handle

// endregion: --- Tests
