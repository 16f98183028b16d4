#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # eddy-codec-record
//!
//! ## 教案目的（Why）
//! - **定位**：该 crate 为"自带 JSON 形态的领域记录"提供泛型负载编解码
//!   实现，覆盖消息结构固定、需要强类型消费的连接器场景；
//! - **架构角色**：在 `eddy-codecs` 契约与业务记录类型之间搭桥，编解码
//!   器本身零配置，字段模式完全由记录类型静态承载；
//! - **设计策略**：JSON 形态的所有权交给记录（[`JsonRecord`] 契约），
//!   泛型编解码器只负责字节与树之间的搬运。
//!
//! ## 交互契约（What）
//! - 出站：记录的规范 JSON 形态渲染为紧凑字节；
//! - 入站：字节解析后按具名字段构造记录，任何解析或字段问题以
//!   稳定错误码同步回传；
//! - 往返保障：结构等价；来源文本的字段顺序与空白差异不影响结果。
//!
//! ## 风险提示（Trade-offs）
//! - 泛型实现假设记录的 JSON 形态是对象；若业务需要数组或标量形态，
//!   应直接实现契约层 trait 而非复用本 crate。

extern crate alloc;

mod record;
mod word_count;

pub use record::{
    JsonRecord, RecordCodecConfig, RecordPayloadDeserializer, RecordPayloadSerializer,
};
pub use word_count::{WordCount, WordCountDeserializer, WordCountSerializer};
