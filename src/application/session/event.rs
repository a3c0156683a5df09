// セッションのイベント定義（UI層に依存しない）

/// 歩行開始要求の結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// 別の歩行が進行中のため無視した
    Rejected,
}

/// セッションからのイベント
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// 歩行が終点に到達
    WalkFinished {
        participant: usize,
        result_slot: usize,
    },
    /// 描画失敗などで歩行を中断（結果は記録しない）
    WalkAborted { participant: usize, message: String },
    /// 「全員の結果を見る」が完了
    AllRevealed,
}
