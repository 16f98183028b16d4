use core::fmt;
use core::marker::PhantomData;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use eddy_codecs::{
    Bytes, ContentType, PayloadDescriptor, PayloadDeserializer, PayloadError, PayloadSerializer,
    ReadContext, TypeDescriptor, WriteContext, codes,
};

/// `JsonRecord` 是领域记录类型自带 JSON 形态的契约。
///
/// # 设计动机（Why）
/// - 记录类型自己最清楚声明了哪些字段、以什么顺序出现在线上；把
///   JSON 形态的所有权交给记录本身，编解码器只做字节搬运；
/// - trait 面向业务侧开放：任何满足契约的自定义记录都可以直接套用
///   泛型编解码器，无需触碰契约层。
///
/// # 契约说明（What）
/// - `to_json` 产出恰含声明字段、顺序固定的 JSON 对象；
/// - `from_json` 读取具名字段，字段缺失或类型不符时返回
///   [`codes::INVALID_RECORD`]；
/// - `from_bytes` 为提供方法：先解析再委托 `from_json`，解析失败
///   同样归入 [`codes::INVALID_RECORD`] 并携带底层原因；
/// - 相等性为结构相等（全字段相等），哈希与相等保持一致。
///
/// # 风险提示（Trade-offs）
/// - 记录的往返保障是结构等价而非字节等价：来源 JSON 的字段顺序与
///   空白差异在重编码后统一落到记录声明的规范形态。
pub trait JsonRecord: Send + Sync + Sized + 'static {
    /// 产出恰含声明字段、顺序固定的 JSON 对象。
    fn to_json(&self) -> Value;

    /// 从 JSON 树读取具名字段构造记录。
    fn from_json(value: &Value) -> Result<Self, PayloadError>;

    /// 从负载字节构造记录。
    fn from_bytes(payload: &[u8]) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_slice(payload).map_err(|err| {
            PayloadError::new(codes::INVALID_RECORD, "record payload is not valid JSON")
                .with_cause(err)
        })?;
        Self::from_json(&value)
    }
}

fn record_descriptor<T: JsonRecord>() -> PayloadDescriptor {
    PayloadDescriptor::new(
        ContentType::new("application/json"),
        TypeDescriptor::of::<T>(),
    )
}

/// 无配置编解码器的持久化表示：记录的字段模式由类型本身静态承载。
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RecordCodecConfig {}

/// 委托记录自身 JSON 形态的泛型序列化器。
///
/// # 行为概览（How）
/// - `encode`：调用 [`JsonRecord::to_json`] 后紧凑渲染为字节；
/// - 渲染失败归入 [`codes::ENCODE`]。
///
/// # 契约说明（What）
/// - **后置条件**：输出字节恰为记录规范 JSON 形态的紧凑文本。
#[derive(Deserialize, Serialize)]
#[serde(bound = "T: JsonRecord", from = "RecordCodecConfig", into = "RecordCodecConfig")]
pub struct RecordPayloadSerializer<T: JsonRecord> {
    descriptor: PayloadDescriptor,
    _record: PhantomData<T>,
}

impl<T: JsonRecord> RecordPayloadSerializer<T> {
    /// 构造记录序列化器。
    pub fn new() -> Self {
        Self {
            descriptor: record_descriptor::<T>(),
            _record: PhantomData,
        }
    }
}

impl<T: JsonRecord> Default for RecordPayloadSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JsonRecord> Clone for RecordPayloadSerializer<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: JsonRecord> fmt::Debug for RecordPayloadSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordPayloadSerializer")
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

impl<T: JsonRecord> PayloadSerializer for RecordPayloadSerializer<T> {
    type Item = T;

    fn descriptor(&self) -> &PayloadDescriptor {
        &self.descriptor
    }

    fn encode(&self, item: &Self::Item, _ctx: &WriteContext<'_>) -> Result<Bytes, PayloadError> {
        serde_json::to_vec(&item.to_json())
            .map(Bytes::from)
            .map_err(|err| {
                PayloadError::new(codes::ENCODE, "record JSON form failed to render")
                    .with_cause(err)
            })
    }
}

impl<T: JsonRecord> From<RecordCodecConfig> for RecordPayloadSerializer<T> {
    fn from(_config: RecordCodecConfig) -> Self {
        Self::new()
    }
}

impl<T: JsonRecord> From<RecordPayloadSerializer<T>> for RecordCodecConfig {
    fn from(_serializer: RecordPayloadSerializer<T>) -> Self {
        Self {}
    }
}

/// 委托记录自身构造路径的泛型反序列化器。
///
/// # 契约说明（What）
/// - `decode` 只消费原始负载字节，主题与消息头被忽略；
/// - **失败语义**：任何解析或字段问题均以 [`codes::INVALID_RECORD`]
///   同步回传；
/// - **后置条件**：`decode(encode(r))` 与 `r` 结构相等。
#[derive(Deserialize, Serialize)]
#[serde(bound = "T: JsonRecord", from = "RecordCodecConfig", into = "RecordCodecConfig")]
pub struct RecordPayloadDeserializer<T: JsonRecord> {
    descriptor: PayloadDescriptor,
    _record: PhantomData<T>,
}

impl<T: JsonRecord> RecordPayloadDeserializer<T> {
    /// 构造记录反序列化器。
    pub fn new() -> Self {
        Self {
            descriptor: record_descriptor::<T>(),
            _record: PhantomData,
        }
    }
}

impl<T: JsonRecord> Default for RecordPayloadDeserializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: JsonRecord> Clone for RecordPayloadDeserializer<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: JsonRecord> fmt::Debug for RecordPayloadDeserializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordPayloadDeserializer")
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

impl<T: JsonRecord> PayloadDeserializer for RecordPayloadDeserializer<T> {
    type Item = T;

    fn descriptor(&self) -> &PayloadDescriptor {
        &self.descriptor
    }

    fn decode(&self, payload: &[u8], _ctx: &ReadContext<'_>) -> Result<Self::Item, PayloadError> {
        T::from_bytes(payload)
    }
}

impl<T: JsonRecord> From<RecordCodecConfig> for RecordPayloadDeserializer<T> {
    fn from(_config: RecordCodecConfig) -> Self {
        Self::new()
    }
}

impl<T: JsonRecord> From<RecordPayloadDeserializer<T>> for RecordCodecConfig {
    fn from(_deserializer: RecordPayloadDeserializer<T>) -> Self {
        Self {}
    }
}
