/// 실행 설정
/// 환경 변수에서 읽으며 값이 없으면 기본값을 사용한다.
// region:    --- Imports
use crate::auction::seed::DEFAULT_BALANCE;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
// endregion: --- Imports

pub const BIND_ADDR_VAR: &str = "AUCTION_BIND_ADDR";
pub const TICK_MILLIS_VAR: &str = "AUCTION_TICK_MILLIS";
pub const STARTING_BALANCE_VAR: &str = "AUCTION_STARTING_BALANCE";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);
const DEFAULT_TICK_MILLIS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} 값을 해석할 수 없습니다: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("{0} 값은 0보다 커야 합니다")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub tick_interval: Duration,
    pub starting_balance: u64,
}

impl Config {
    /// 환경 변수에서 설정 생성
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// 주어진 조회 함수로 설정 생성
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr: SocketAddr =
            parse_var(&lookup, BIND_ADDR_VAR)?.unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND_ADDR));

        let tick_millis = parse_var(&lookup, TICK_MILLIS_VAR)?.unwrap_or(DEFAULT_TICK_MILLIS);
        if tick_millis == 0 {
            return Err(ConfigError::Zero(TICK_MILLIS_VAR));
        }

        let starting_balance =
            parse_var(&lookup, STARTING_BALANCE_VAR)?.unwrap_or(DEFAULT_BALANCE);

        Ok(Self {
            bind_addr,
            tick_interval: Duration::from_millis(tick_millis),
            starting_balance,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
