use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use eddy_codecs::{
    Bytes, ContentType, PayloadDescriptor, PayloadDeserializer, PayloadError, PayloadSerializer,
    ReadContext, TypeDescriptor, WriteContext,
};

use crate::charset::Charset;

fn text_descriptor(charset: &Charset) -> PayloadDescriptor {
    PayloadDescriptor::new(
        ContentType::new(format!("text/plain; charset={}", charset.name())),
        TypeDescriptor::of::<String>(),
    )
}

/// 文本编解码器的持久化表示：只保留字符集标签这一项配置。
///
/// # 设计动机（Why）
/// - 编解码器实例需要随任务重新部署而序列化迁移；可持久化的只有
///   配置本身，解析出的编码句柄与描述符均为派生值；
/// - 以独立的配置结构充当序列化通道，重建时经 `TryFrom` 走正常
///   构造路径，派生值在构造期重算，未知标签在反序列化时即报错。
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TextCodecConfig {
    /// 字符集标签。
    pub charset: String,
}

/// 将业务字符串编码为指定字符集字节序列的序列化器。
///
/// # 设计动机（Why）
/// - 文本是连接器最常见的负载形态；字符集参数化使同一实现覆盖
///   UTF-8 之外的历史编码场景；
/// - 宿主框架对每条消息调用一次 [`encode`](PayloadSerializer::encode)，
///   实例在配置期构造后只读复用，天然满足多写端并发。
///
/// # 行为概览（How）
/// - `encode`：按解析出的编码句柄转换文本，输出裸字节，无封皮；
/// - `set_charset_name`：重新校验并解析标签，失败时保持原配置不变；
/// - 描述符按当前字符集拼装 `text/plain; charset=...` 内容类型。
///
/// # 契约说明（What）
/// - **输入类型**：出站业务对象为 `String`；
/// - **后置条件**：成功编码返回的字节序列恰为该字符集对文本的定义，
///   可被同字符集的反序列化器逐字恢复。
///
/// # 风险提示（Trade-offs）
/// - 无法映射的字符按编码标准的替换策略落位而非报错；若业务要求
///   严格失败，应在上游校验文本与字符集的匹配性。
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "TextCodecConfig", into = "TextCodecConfig")]
pub struct TextPayloadSerializer {
    charset: Charset,
    descriptor: PayloadDescriptor,
}

impl TextPayloadSerializer {
    /// 以缺省 UTF-8 字符集构造序列化器。
    pub fn new() -> Self {
        let charset = Charset::utf8();
        let descriptor = text_descriptor(&charset);
        Self {
            charset,
            descriptor,
        }
    }

    /// 以指定字符集标签构造序列化器。
    pub fn with_charset(name: &str) -> Result<Self, PayloadError> {
        let charset = Charset::resolve(name)?;
        let descriptor = text_descriptor(&charset);
        Ok(Self {
            charset,
            descriptor,
        })
    }

    /// 重新配置字符集标签。
    ///
    /// 先解析后替换：标签未知时返回 [`eddy_codecs::codes::UNSUPPORTED_CHARSET`]
    /// 且实例保持原有配置，"标签与句柄一致"的不变量全程成立。
    pub fn set_charset_name(&mut self, name: &str) -> Result<(), PayloadError> {
        let charset = Charset::resolve(name)?;
        self.descriptor = text_descriptor(&charset);
        self.charset = charset;
        Ok(())
    }

    /// 返回当前配置的字符集标签。
    pub fn charset_name(&self) -> &str {
        self.charset.name()
    }
}

impl Default for TextPayloadSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadSerializer for TextPayloadSerializer {
    type Item = String;

    fn descriptor(&self) -> &PayloadDescriptor {
        &self.descriptor
    }

    fn encode(&self, item: &Self::Item, _ctx: &WriteContext<'_>) -> Result<Bytes, PayloadError> {
        Ok(self.charset.encode(item))
    }
}

impl TryFrom<TextCodecConfig> for TextPayloadSerializer {
    type Error = PayloadError;

    fn try_from(config: TextCodecConfig) -> Result<Self, Self::Error> {
        Self::with_charset(&config.charset)
    }
}

impl From<TextPayloadSerializer> for TextCodecConfig {
    fn from(serializer: TextPayloadSerializer) -> Self {
        Self {
            charset: serializer.charset.name().to_owned(),
        }
    }
}

/// 按指定字符集把负载字节解释为业务字符串的反序列化器。
///
/// # 设计动机（Why）
/// - 与 [`TextPayloadSerializer`] 对称，共享同一字符集值对象；
/// - 解码遵循编码标准的替换策略：畸形字节以替换字符落位而非报错，
///   让窄字符集解宽字符集字节时产生可观测的错配文本。
///
/// # 契约说明（What）
/// - **输入**：完整负载字节；主题与消息头被忽略；
/// - **后置条件**：对字符集内可表示的文本，`decode(encode(s)) == s`。
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "TextCodecConfig", into = "TextCodecConfig")]
pub struct TextPayloadDeserializer {
    charset: Charset,
    descriptor: PayloadDescriptor,
}

impl TextPayloadDeserializer {
    /// 以缺省 UTF-8 字符集构造反序列化器。
    pub fn new() -> Self {
        let charset = Charset::utf8();
        let descriptor = text_descriptor(&charset);
        Self {
            charset,
            descriptor,
        }
    }

    /// 以指定字符集标签构造反序列化器。
    pub fn with_charset(name: &str) -> Result<Self, PayloadError> {
        let charset = Charset::resolve(name)?;
        let descriptor = text_descriptor(&charset);
        Ok(Self {
            charset,
            descriptor,
        })
    }

    /// 重新配置字符集标签，语义同
    /// [`TextPayloadSerializer::set_charset_name`]。
    pub fn set_charset_name(&mut self, name: &str) -> Result<(), PayloadError> {
        let charset = Charset::resolve(name)?;
        self.descriptor = text_descriptor(&charset);
        self.charset = charset;
        Ok(())
    }

    /// 返回当前配置的字符集标签。
    pub fn charset_name(&self) -> &str {
        self.charset.name()
    }
}

impl Default for TextPayloadDeserializer {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadDeserializer for TextPayloadDeserializer {
    type Item = String;

    fn descriptor(&self) -> &PayloadDescriptor {
        &self.descriptor
    }

    fn decode(&self, payload: &[u8], _ctx: &ReadContext<'_>) -> Result<Self::Item, PayloadError> {
        Ok(self.charset.decode(payload))
    }
}

impl TryFrom<TextCodecConfig> for TextPayloadDeserializer {
    type Error = PayloadError;

    fn try_from(config: TextCodecConfig) -> Result<Self, Self::Error> {
        Self::with_charset(&config.charset)
    }
}

impl From<TextPayloadDeserializer> for TextCodecConfig {
    fn from(deserializer: TextPayloadDeserializer) -> Self {
        Self {
            charset: deserializer.charset.name().to_owned(),
        }
    }
}
