//! 屏幕偏好存储
//!
//! 每个客户端以固定的四个键保存偏好，只驻留内存。
//! 客户端数有上限，满了之后淘汰最早写入的客户端；与默认值相同的偏好不占用条目。

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::preference::ScreenPreferences;

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// 读取偏好，未知客户端返回默认值
    async fn get(&self, client_id: &str) -> Result<ScreenPreferences>;

    /// 整体替换偏好
    async fn put(&self, client_id: &str, prefs: ScreenPreferences) -> Result<ScreenPreferences>;

    /// 清除偏好并返回默认值
    async fn reset(&self, client_id: &str) -> Result<ScreenPreferences>;
}

/// 未配置时的客户端上限
pub const DEFAULT_MAX_CLIENTS: usize = 10_000;

/// 基于 DashMap 的内存偏好存储
#[derive(Debug)]
pub struct MemoryPreferenceStore {
    entries: DashMap<String, HashMap<String, String>>,
    /// 写入顺序，队首最早；所有写操作都持有此锁
    order: Mutex<VecDeque<String>>,
    max_clients: usize,
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::with_max_clients(DEFAULT_MAX_CLIENTS)
    }
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定客户端上限（至少为 1）
    pub fn with_max_clients(max_clients: usize) -> Self {
        Self {
            entries: DashMap::new(),
            order: Mutex::new(VecDeque::new()),
            max_clients: max_clients.max(1),
        }
    }

    pub fn max_clients(&self) -> usize {
        self.max_clients
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn order(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.order.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn remove_locked(&self, order: &mut VecDeque<String>, client_id: &str) {
        if self.entries.remove(client_id).is_some() {
            order.retain(|id| id != client_id);
        }
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, client_id: &str) -> Result<ScreenPreferences> {
        Ok(self
            .entries
            .get(client_id)
            .map(|pairs| ScreenPreferences::from_pairs(pairs.value()))
            .unwrap_or_default())
    }

    async fn put(&self, client_id: &str, prefs: ScreenPreferences) -> Result<ScreenPreferences> {
        let mut order = self.order();

        if prefs == ScreenPreferences::default() {
            debug!(client_id, "default screen preferences, dropping entry");
            self.remove_locked(&mut order, client_id);
            return Ok(prefs);
        }

        debug!(client_id, ?prefs, "storing screen preferences");
        if let Some(mut pairs) = self.entries.get_mut(client_id) {
            *pairs = prefs.to_pairs();
            return Ok(prefs);
        }

        while order.len() >= self.max_clients {
            match order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    info!(client_id = %oldest, "preference store full, evicted oldest client");
                }
                None => break,
            }
        }
        self.entries.insert(client_id.to_string(), prefs.to_pairs());
        order.push_back(client_id.to_string());
        Ok(prefs)
    }

    async fn reset(&self, client_id: &str) -> Result<ScreenPreferences> {
        debug!(client_id, "resetting screen preferences");
        let mut order = self.order();
        self.remove_locked(&mut order, client_id);
        Ok(ScreenPreferences::default())
    }
}

pub fn create_preference_store(max_clients: usize) -> Box<dyn PreferenceStore> {
    Box::new(MemoryPreferenceStore::with_max_clients(max_clients))
}
