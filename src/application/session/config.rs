// セッション設定のValue Objects

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_PARTICIPANT_LIMIT, DEFAULT_ROWS, DEFAULT_STEP_DELAY, MAX_LANES, MAX_STEP_DELAY_MS,
    MIN_LANES, MIN_ROWS,
};
use crate::error::{LadderError, LadderResult};

const MAX_ROWS: usize = 100;

/// 梯子の行数を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RowCount(usize);

impl RowCount {
    pub fn new(count: usize) -> LadderResult<Self> {
        if count < MIN_ROWS {
            return Err(LadderError::invalid(format!(
                "行数は{}以上である必要があります: {}",
                MIN_ROWS, count
            )));
        }
        if count > MAX_ROWS {
            return Err(LadderError::invalid(format!("行数が大きすぎます: {}", count)));
        }
        Ok(Self(count))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for RowCount {
    type Error = LadderError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RowCount> for usize {
    fn from(value: RowCount) -> Self {
        value.0
    }
}

/// 参加者数の上限を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ParticipantLimit(usize);

impl ParticipantLimit {
    pub fn new(limit: usize) -> LadderResult<Self> {
        if !(MIN_LANES..=MAX_LANES).contains(&limit) {
            return Err(LadderError::invalid(format!(
                "参加者上限は{}~{}の範囲: {}",
                MIN_LANES, MAX_LANES, limit
            )));
        }
        Ok(Self(limit))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// 参加者数が範囲内か
    pub fn accepts(&self, count: usize) -> bool {
        (MIN_LANES..=self.0).contains(&count)
    }
}

impl TryFrom<usize> for ParticipantLimit {
    type Error = LadderError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantLimit> for usize {
    fn from(value: ParticipantLimit) -> Self {
        value.0
    }
}

/// アニメーション1段の待ち時間（ミリ秒）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct StepDelay(u64);

impl StepDelay {
    pub fn from_millis(ms: u64) -> LadderResult<Self> {
        if ms == 0 || ms > MAX_STEP_DELAY_MS {
            return Err(LadderError::invalid(format!(
                "待ち時間は1~{}msの範囲: {}",
                MAX_STEP_DELAY_MS, ms
            )));
        }
        Ok(Self(ms))
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl TryFrom<u64> for StepDelay {
    type Error = LadderError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_millis(value)
    }
}

impl From<StepDelay> for u64 {
    fn from(value: StepDelay) -> Self {
        value.0
    }
}

/// ゲームセッションの設定
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub row_count: RowCount,
    pub participant_limit: ParticipantLimit,
    pub step_delay: StepDelay,
    /// 明るい背景（縁取り色が変わる）
    pub light_background: bool,
}

impl SessionConfig {
    /// JSONから読み込む（省略した項目は既定値）
    pub fn from_json(json: &str) -> LadderResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LadderError::invalid(format!("設定の読み込みに失敗: {}", e)))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            row_count: RowCount(DEFAULT_ROWS),
            participant_limit: ParticipantLimit(DEFAULT_PARTICIPANT_LIMIT),
            step_delay: StepDelay(DEFAULT_STEP_DELAY.as_millis() as u64),
            light_background: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_rejects_too_small() {
        assert!(RowCount::new(2).is_err());
        assert_eq!(RowCount::new(3).unwrap().get(), 3);
    }

    #[test]
    fn participant_limit_range() {
        assert!(ParticipantLimit::new(1).is_err());
        assert!(ParticipantLimit::new(21).is_err());
        let limit = ParticipantLimit::new(10).unwrap();
        assert!(limit.accepts(2));
        assert!(limit.accepts(10));
        assert!(!limit.accepts(11));
        assert!(!limit.accepts(1));
    }

    #[test]
    fn step_delay_rejects_zero() {
        assert!(StepDelay::from_millis(0).is_err());
        assert_eq!(
            StepDelay::from_millis(80).unwrap().as_duration(),
            Duration::from_millis(80)
        );
    }

    #[test]
    fn default_config_matches_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.row_count.get(), 12);
        assert_eq!(config.participant_limit.get(), 10);
        assert_eq!(config.step_delay.as_millis(), 50);
        assert!(!config.light_background);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = SessionConfig::from_json(r#"{"row_count": 16}"#).unwrap();
        assert_eq!(config.row_count.get(), 16);
        assert_eq!(config.step_delay.as_millis(), 50);
    }

    #[test]
    fn json_rejects_invalid_values() {
        assert!(SessionConfig::from_json(r#"{"row_count": 2}"#).is_err());
        assert!(SessionConfig::from_json(r#"{"participant_limit": 50}"#).is_err());
    }

    #[test]
    fn json_round_trip() {
        let config = SessionConfig {
            light_background: true,
            ..SessionConfig::default()
        };
        let back = SessionConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
