//! Block-height logical clock.

use crate::domain::BlockHeight;
use crate::ports::LogicalClock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Manually driven block height.
///
/// The host advances it as blocks are produced. `set` uses `fetch_max`, so
/// the reading never moves backwards.
#[derive(Debug, Default)]
pub struct BlockHeightClock {
    height: AtomicU64,
}

impl BlockHeightClock {
    pub fn new(genesis_height: BlockHeight) -> Self {
        Self {
            height: AtomicU64::new(genesis_height),
        }
    }

    /// Move forward by `blocks` and return the new height.
    pub fn advance(&self, blocks: u64) -> BlockHeight {
        let previous = self
            .height
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |h| {
                Some(h.saturating_add(blocks))
            })
            .unwrap_or_else(|h| h);
        previous.saturating_add(blocks)
    }

    /// Jump to `height`. Lower values are ignored. Returns the height in
    /// effect afterwards.
    pub fn set(&self, height: BlockHeight) -> BlockHeight {
        let previous = self.height.fetch_max(height, Ordering::SeqCst);
        previous.max(height)
    }
}

impl LogicalClock for BlockHeightClock {
    fn now(&self) -> BlockHeight {
        self.height.load(Ordering::SeqCst)
    }
}
