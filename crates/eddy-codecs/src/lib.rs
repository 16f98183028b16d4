#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # eddy-codecs
//!
//! ## 教案意图（Why）
//! - **职责定位**：为各类 `eddy-codec-*` 负载实现提供统一、稳定的契约
//!   入口，避免每个实现 crate 直接依赖核心 crate 的内部路径；
//! - **架构价值**：通过集中 re-export `eddy-core` 的契约/描述符/错误等
//!   稳定面，实现负载实现层面的插拔替换，同时维持核心 crate 的演进节奏；
//! - **团队协作**：简化实现 crate 的依赖拓扑，并行开发时仅需关注本
//!   负载类型的逻辑即可。
//!
//! ## 使用方式（How）
//! - 在实现 crate 中引入 `eddy-codecs`，即可访问 `PayloadSerializer`、
//!   `PayloadDeserializer`、`WriteContext`、`ReadContext`、`PayloadError`
//!   等核心接口；
//! - Feature `alloc`/`std` 直接透传到 `eddy-core`，保持二者行为一致。
//!
//! ## 契约说明（What）
//! - 对外暴露的所有类型均来源于 `eddy-core`，确保语义一致；
//! - 不额外引入状态或逻辑，纯粹扮演"接口整合层"。
//!
//! ## 风险提示（Trade-offs）
//! - 本 crate 为 re-export 形态，若核心层重构需同步更新此处映射。

/// 统一暴露负载错误类型。
pub use eddy_core::PayloadError;
/// 暴露完整的错误模块，便于实现引用错误码常量。
pub use eddy_core::error;
/// 暴露错误码常量命名空间。
pub use eddy_core::error::codes;

/// 便捷 re-export：直接在 crate 根访问常用契约接口。
pub use eddy_core::{
    Bytes, ContentType, Headers, PayloadDescriptor, PayloadDeserializer, PayloadSerializer,
    ReadContext, TypeDescriptor, WriteContext,
};
