// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cmudict::CmuDictionary;
use crate::syllable::{FeatureTable, ARPABET};

// ============================================================================
// 输出格式
// ============================================================================

/// 命令行输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 文本（默认）：`word: N syllables: <o:..|n:..|c:..> ...`
    #[default]
    Text,
    /// JSON：每个单词一份报告
    Json,
}

// ============================================================================
// 应用配置
// ============================================================================

/// 音节切分配置
///
/// 所有字段可选，缺失时使用内置默认值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyllabifierConfig {
    /// CMU 发音词典路径
    pub dictionary_path: Option<PathBuf>,
    /// 自定义特征表（JSON），未设置时使用内置 ARPABET 表
    pub feature_table_path: Option<PathBuf>,
    /// 输出格式
    pub output_format: OutputFormat,
}

impl SyllabifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("Syllabifier").join("config.json"))
    }

    /// 从默认位置加载配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// 从指定路径加载配置，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置");
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)?;
        let config: SyllabifierConfig = serde_json::from_str(&content).map_err(|e| {
            tracing::error!("解析配置失败: {}", e);
            anyhow::anyhow!("配置文件格式错误 {:?}: {}", path, e)
        })?;
        Ok(config)
    }

    /// 保存到默认位置
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// 保存到指定路径
    ///
    /// 使用原子写入：先写临时文件，再重命名替换
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        tracing::info!("保存配置到: {:?}", path);

        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("重命名临时文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!("配置保存成功");
        Ok(())
    }

    /// 构建特征表（启动时调用一次）
    pub fn feature_table(&self) -> Result<Arc<FeatureTable>> {
        match &self.feature_table_path {
            Some(path) => Ok(Arc::new(FeatureTable::load(path)?)),
            None => Ok(Arc::clone(&ARPABET)),
        }
    }

    /// 加载发音词典，未配置路径时返回 None
    pub fn dictionary(&self) -> Result<Option<CmuDictionary>> {
        self.dictionary_path
            .as_deref()
            .map(CmuDictionary::load)
            .transpose()
    }
}
