/// 경매 카운트다운 스케줄러
/// 일정 주기마다 모든 상품의 남은 시간을 감소시킨다.
/// 반환된 가드가 중지되거나 drop 되면 타이머 태스크도 함께 중단된다.
// region:    --- Imports
use crate::store::StoreHandle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant};
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- Countdown Scheduler
/// 카운트다운 스케줄러
pub struct CountdownScheduler {
    store: StoreHandle,
    period: Duration,
}

/// 카운트다운 스케줄러 생성
impl CountdownScheduler {
    pub fn new(store: StoreHandle, period: Duration) -> Self {
        Self { store, period }
    }

    /// 카운트다운 시작
    /// 첫 틱은 시작 후 한 주기가 지난 뒤에 실행된다.
    pub fn start(&self) -> CountdownGuard {
        let store = self.store.clone();
        let period = self.period;
        info!("{:<12} --> 카운트다운 시작: {:?} 주기", "Countdown", period);

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                store.tick().await;
                debug!("{:<12} --> 틱", "Countdown");
            }
        });

        CountdownGuard { task: Some(task) }
    }
}
// endregion: --- Countdown Scheduler

// region:    --- Countdown Guard
/// 실행 중인 카운트다운
pub struct CountdownGuard {
    task: Option<JoinHandle<()>>,
}

impl CountdownGuard {
    /// 카운트다운 중지
    pub fn stop(mut self) {
        self.abort();
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn abort(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("{:<12} --> 카운트다운 중지", "Countdown");
        }
    }
}

impl Drop for CountdownGuard {
    fn drop(&mut self) {
        self.abort();
    }
}
// endregion: --- Countdown Guard

// endregion: --- Tests
