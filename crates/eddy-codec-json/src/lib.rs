#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # eddy-codec-json
//!
//! ## 教案目的（Why）
//! - **定位**：该 crate 提供通用 JSON 树负载的编解码实现，覆盖无固定
//!   结构、按消息内容灵活处理的连接器场景；
//! - **架构角色**：实现 `eddy-codecs` 暴露的序列化/反序列化契约，
//!   业务对象为 [`serde_json::Value`]；
//! - **设计策略**：对象字段顺序按插入顺序保留，输出紧凑无多余空白，
//!   保证"解析 → 重编码"对解析器产物逐字节幂等。
//!
//! ## 交互契约（What）
//! - 出站：JSON 树渲染为紧凑文本的 UTF-8 字节，无封皮；
//! - 入站：字节解析为 JSON 树，非法输入以稳定错误码同步回传；
//! - 编码器不做任何语义变换：不排序键、不重排数字格式。
//!
//! ## 风险提示（Trade-offs）
//! - 字节级幂等只对本解析器产出的树成立；外部来源的等价但非紧凑
//!   文本（多余空白、科学计数法）经往返会落到紧凑规范形态。

extern crate alloc;

mod json;

pub use json::{JsonCodecConfig, JsonPayloadDeserializer, JsonPayloadSerializer};
