#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![doc = "eddy-core: 流式连接器负载编解码的核心契约。"]
#![doc = ""]
#![doc = "本 crate 只承载契约：序列化/反序列化 trait、负载描述符、调用上下文与稳定错误域。"]
#![doc = "具体编解码实现位于 `eddy-codec-*` 系列 crate，通过 `eddy-codecs` 聚合层接入。"]
#![doc = ""]
#![doc = "== 内存分配依赖 =="]
#![doc = "`eddy-core` 定位于 `no_std + alloc` 场景：契约依赖 [`alloc`] 中的 `Box`、`String` 等类型。"]
#![doc = "纯 `no_std`（无分配器）环境不支持。"]

extern crate alloc;

mod codec;
mod context;
/// 稳定错误域：错误载体与 `payload.*` 错误码命名空间。
pub mod error;
mod metadata;

pub use bytes::Bytes;
pub use codec::{PayloadDeserializer, PayloadSerializer};
pub use context::{Headers, ReadContext, WriteContext};
pub use error::{PayloadError, codes};
pub use metadata::{ContentType, PayloadDescriptor, TypeDescriptor};
