#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # eddy-codec-text
//!
//! ## 教案目的（Why）
//! - **定位**：该 crate 提供字符集参数化的文本负载编解码实现，是连接器
//!   处理字符串消息体的缺省选择；
//! - **架构角色**：实现 `eddy-codecs` 暴露的序列化/反序列化契约，
//!   由宿主框架在写端与读端任务中直接调用；
//! - **设计策略**：把"字符集标签 + 解析句柄"封装为构造不变量，使配置
//!   持久化与行为一致性互不干扰。
//!
//! ## 交互契约（What）
//! - 出站：`String` 文本经配置字符集转换为裸字节，无封皮；
//! - 入站：字节按同一字符集解释，畸形输入遵循编码标准的替换策略；
//! - 配置：字符集标签可校验地重设，也可经 `serde` 随任务迁移。
//!
//! ## 风险提示（Trade-offs）
//! - 窄字符集读取宽字符集字节产生错配文本属预期行为，用于暴露两端
//!   字符集配置不一致的缺陷；本 crate 不做任何自动探测。

extern crate alloc;

mod charset;
mod text;

pub use charset::{Charset, DEFAULT_CHARSET};
pub use text::{TextCodecConfig, TextPayloadDeserializer, TextPayloadSerializer};
