//! 请求序号模块
//!
//! 页面在筛选/翻页时会连续发起请求，网络层不保证响应按发起顺序返回。
//! 每次发起前取一个单调递增的序号，响应回来后只有仍是最新序号的才允许
//! 写入页面状态，过期响应直接丢弃。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// 单调递增的请求序号发生器
///
/// `Clone` 共享同一计数器，适合被 `spawn_local` 的闭包捕获。
#[derive(Clone, Default)]
pub struct RequestSeq {
    counter: Arc<AtomicU64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发起新请求：递增并返回本次请求的序号
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// 响应到达时检查：序号是否仍是最新（否则为过期响应）
    pub fn is_current(&self, seq: u64) -> bool {
        self.counter.load(Ordering::Relaxed) == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_request_invalidates_earlier_one() {
        let seq = RequestSeq::new();
        let first = seq.next();
        let second = seq.next();

        // 先发出的请求后返回：应被丢弃
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = RequestSeq::new();
        let cloned = seq.clone();
        let token = seq.next();
        assert!(cloned.is_current(token));
        cloned.next();
        assert!(!seq.is_current(token));
    }
}
