// region:    --- Imports
use crate::bidding::commands::{handle_check_bid, handle_place_bid, PlaceBidCommand};
use crate::bidding::error::BidError;
use crate::query;
use crate::store::StoreHandle;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

// region:    --- Router

/// 경매 라우터 생성
pub fn router(store: StoreHandle) -> Router {
    // 브라우저 화면에서 호출하기 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auction", get(handle_get_auction_state))
        .route("/auction/items/:id", get(handle_get_item))
        .route("/auction/bid", post(handle_bid))
        .route("/auction/bid/check", post(handle_check))
        .layer(cors)
        .with_state(store)
}

// endregion: --- Router

// region:    --- Error Response

impl IntoResponse for BidError {
    fn into_response(self) -> Response {
        let status = match self {
            BidError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(serde_json::json!({
                "error": self.to_string(),
                "code": self.code(),
            })),
        )
            .into_response()
    }
}

// endregion: --- Error Response

// region:    --- Command Handlers

/// 입찰 요청 처리
pub async fn handle_bid(
    State(store): State<StoreHandle>,
    Json(cmd): Json<PlaceBidCommand>,
) -> Result<impl IntoResponse, BidError> {
    info!("{:<12} --> 입찰 요청: {:?}", "Handler", cmd);
    let receipt = handle_place_bid(cmd, &store).await?;
    Ok(Json(serde_json::json!({
        "message": "입찰이 성공적으로 처리되었습니다.",
        "item": receipt.item,
        "balance": receipt.balance,
    })))
}

/// 입찰 가능 여부 확인
/// 입찰 버튼 활성화 여부를 결정하기 위해 사용한다.
pub async fn handle_check(
    State(store): State<StoreHandle>,
    Json(cmd): Json<PlaceBidCommand>,
) -> impl IntoResponse {
    let body = match handle_check_bid(&cmd, &store).await {
        Ok(()) => serde_json::json!({ "allowed": true }),
        Err(e) => serde_json::json!({ "allowed": false, "code": e.code() }),
    };
    Json(body)
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

/// 경매 상태 조회
pub async fn handle_get_auction_state(State(store): State<StoreHandle>) -> impl IntoResponse {
    info!("{:<12} --> 경매 상태 조회", "Handler");
    Json(query::handlers::get_auction_state(&store).await)
}

/// 상품 조회
pub async fn handle_get_item(
    State(store): State<StoreHandle>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, BidError> {
    info!("{:<12} --> 상품 조회 id: {}", "Handler", item_id);
    let item = query::handlers::get_item(&store, &item_id).await?;
    Ok(Json(item))
}

// endregion: --- Query Handlers
