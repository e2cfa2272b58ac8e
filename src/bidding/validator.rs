/// 입찰 검증
/// 상태를 변경하지 않는 순수 함수. 검증 순서는 다음과 같다.
/// 1. 상품 존재 여부
/// 2. 경매 종료 여부
/// 3. 현재 가격 초과 여부
/// 4. 잔액 충분 여부
// region:    --- Imports
use super::error::BidError;
use super::model::AuctionItem;
// endregion: --- Imports

// region:    --- Validator
/// 입찰을 검증하고 대상 상품의 인덱스를 반환
pub fn validate_bid(
    items: &[AuctionItem],
    balance: u64,
    item_id: &str,
    amount: u64,
) -> Result<usize, BidError> {
    let index = items
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| BidError::ItemNotFound(item_id.to_string()))?;
    let item = &items[index];

    if item.is_ended() {
        return Err(BidError::AuctionEnded(item.id.clone()));
    }

    if amount <= item.current_bid {
        return Err(BidError::BidTooLow {
            amount,
            current_bid: item.current_bid,
        });
    }

    if amount > balance {
        return Err(BidError::InsufficientBalance { amount, balance });
    }

    Ok(index)
}
// endregion: --- Validator

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidding::model::{Bidder, Category};

    fn item(id: &str, current_bid: u64, remaining_time: u64) -> AuctionItem {
        AuctionItem {
            id: id.to_string(),
            name: id.to_string(),
            telugu_name: String::new(),
            description: String::new(),
            icon: String::new(),
            starting_bid: 10,
            current_bid,
            highest_bidder: Bidder::Other("Rival".into()),
            remaining_time,
            category: Category::Bonus,
        }
    }

    #[test]
    fn accepts_valid_bid() {
        let items = vec![item("a", 20, 5), item("b", 75, 5)];
        assert_eq!(validate_bid(&items, 200, "b", 80), Ok(1));
    }

    #[test]
    fn unknown_item() {
        let items = vec![item("a", 20, 5)];
        assert_eq!(
            validate_bid(&items, 200, "missing", 30),
            Err(BidError::ItemNotFound("missing".into()))
        );
    }

    #[test]
    fn ended_takes_precedence_over_amount_checks() {
        let items = vec![item("a", 20, 0)];
        // 금액이 낮고 잔액도 부족하지만 종료 에러가 먼저 반환된다
        assert_eq!(
            validate_bid(&items, 5, "a", 10),
            Err(BidError::AuctionEnded("a".into()))
        );
    }

    #[test]
    fn equal_bid_is_too_low() {
        let items = vec![item("a", 75, 5)];
        assert_eq!(
            validate_bid(&items, 200, "a", 75),
            Err(BidError::BidTooLow {
                amount: 75,
                current_bid: 75
            })
        );
    }

    #[test]
    fn low_bid_checked_before_balance() {
        let items = vec![item("a", 75, 5)];
        assert_eq!(validate_bid(&items, 10, "a", 50).unwrap_err().code(), "LOW_BID");
    }

    #[test]
    fn bid_may_spend_entire_balance() {
        let items = vec![item("a", 75, 5)];
        assert_eq!(validate_bid(&items, 200, "a", 200), Ok(0));
        assert_eq!(
            validate_bid(&items, 200, "a", 201),
            Err(BidError::InsufficientBalance {
                amount: 201,
                balance: 200
            })
        );
    }
}
// endregion: --- Tests
