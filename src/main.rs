// region:    --- Imports
use festival_auction::auction::seed::festival_items;
use festival_auction::config::Config;
use festival_auction::event_consumer::EventConsumer;
use festival_auction::handlers;
use festival_auction::query;
use festival_auction::scheduler::CountdownScheduler;
use festival_auction::store::{AuctionStore, StoreHandle};
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 경매 저장소 생성
    let store = match AuctionStore::new(festival_items(), config.starting_balance) {
        Ok(store) => StoreHandle::new(store),
        Err(e) => {
            error!("{:<12} --> 경매 상품 초기화 실패: {}", "Main", e);
            return Err(e.into());
        }
    };
    info!(
        "{:<12} --> 경매 저장소 초기화 성공, 잔액 {}",
        "Main",
        query::handlers::get_balance(&store).await
    );

    // 이벤트 소비 시작
    let event_consumer = EventConsumer::new(store.subscribe().await);
    tokio::spawn(event_consumer.start());

    // 카운트다운 시작 (서버 종료 시 함께 중지)
    let countdown = CountdownScheduler::new(store.clone(), config.tick_interval).start();

    // 리스너 생성
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    let result = axum::serve(listener, handlers::router(store).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;
    countdown.stop();

    if let Err(err) = result {
        error!("{:<12} --> Server error: {}", "Main", err);
        return Err(err.into());
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{:<12} --> 종료 신호 대기 실패: {}", "Main", e);
        std::future::pending::<()>().await;
    }
    info!("{:<12} --> 종료 신호 수신", "Main");
}
// endregion: --- Main
