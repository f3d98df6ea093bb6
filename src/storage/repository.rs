use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::config::ChatConfig;
use crate::error::{AppError, Result};
use crate::models::contact::ContactMessage;
use crate::models::message::{ChatExchange, ReplySource};

/// 对话历史仓储 trait
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// 追加一条问答记录，返回带序号的记录
    async fn append(
        &self,
        session_id: &str,
        user_message: &str,
        bot_response: &str,
        source: ReplySource,
    ) -> Result<ChatExchange>;

    /// 按时间顺序列出会话历史
    async fn list(&self, session_id: &str) -> Result<Vec<ChatExchange>>;

    /// 清空会话历史，返回删除的条数
    async fn clear(&self, session_id: &str) -> Result<usize>;

    /// 检查会话中是否存在指定序号的记录
    async fn contains(&self, session_id: &str, message_id: u64) -> Result<bool>;
}

/// 单个会话的历史
struct SessionLog {
    entries: VecDeque<ChatExchange>,
    next_id: u64,
    last_active: u64,
}

/// 内存对话历史
///
/// 会话数和每个会话的条数都有上限：新会话超出 `max_sessions` 时淘汰最久未活动的会话，
/// 单个会话超出 `max_entries` 时丢弃最早的记录。序号在会话内单调递增，不因丢弃而复用。
pub struct InMemoryChatHistory {
    sessions: DashMap<String, SessionLog>,
    max_sessions: usize,
    max_entries: usize,
    clock: AtomicU64,
}

impl InMemoryChatHistory {
    pub fn new(max_sessions: usize, max_entries: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_sessions: max_sessions.max(1),
            max_entries: max_entries.max(1),
            clock: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.max_sessions, config.max_entries_per_session)
    }

    /// 当前保存的会话数
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// 为新会话腾出位置
    fn evict_idle_sessions(&self) {
        while self.sessions.len() >= self.max_sessions {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|entry| entry.value().last_active)
                .map(|entry| entry.key().clone());
            match oldest {
                Some(session_id) => {
                    debug!("Evicting idle chat session {}", session_id);
                    self.sessions.remove(&session_id);
                }
                None => break,
            }
        }
    }
}

#[async_trait]
impl ChatHistoryRepository for InMemoryChatHistory {
    async fn append(
        &self,
        session_id: &str,
        user_message: &str,
        bot_response: &str,
        source: ReplySource,
    ) -> Result<ChatExchange> {
        if !self.sessions.contains_key(session_id) {
            self.evict_idle_sessions();
        }

        let now = self.tick();
        let mut log = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionLog {
                entries: VecDeque::new(),
                next_id: 1,
                last_active: now,
            });

        let exchange =
            ChatExchange::new(log.next_id, session_id, user_message, bot_response, source);
        log.next_id += 1;
        log.last_active = now;
        log.entries.push_back(exchange.clone());
        while log.entries.len() > self.max_entries {
            log.entries.pop_front();
        }

        Ok(exchange)
    }

    async fn list(&self, session_id: &str) -> Result<Vec<ChatExchange>> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|log| log.entries.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn clear(&self, session_id: &str) -> Result<usize> {
        Ok(self
            .sessions
            .remove(session_id)
            .map(|(_, log)| log.entries.len())
            .unwrap_or(0))
    }

    async fn contains(&self, session_id: &str, message_id: u64) -> Result<bool> {
        Ok(self
            .sessions
            .get(session_id)
            .is_some_and(|log| log.entries.iter().any(|e| e.id == message_id)))
    }
}

/// 联系消息仓储 trait
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// 保存消息
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage>;

    /// 统计数量
    async fn count(&self) -> Result<u64>;
}

/// 有容量上限的内存收件箱，超出时丢弃最旧的消息
pub struct InMemoryContactInbox {
    capacity: usize,
    messages: Mutex<VecDeque<ContactMessage>>,
}

impl InMemoryContactInbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            messages: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactInbox {
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage> {
        let mut messages = self
            .messages
            .lock()
            .map_err(|e| AppError::Internal(format!("contact inbox lock poisoned: {}", e)))?;
        if messages.len() >= self.capacity {
            messages.pop_front();
        }
        messages.push_back(message.clone());
        Ok(message.clone())
    }

    async fn count(&self) -> Result<u64> {
        let messages = self
            .messages
            .lock()
            .map_err(|e| AppError::Internal(format!("contact inbox lock poisoned: {}", e)))?;
        Ok(messages.len() as u64)
    }
}
