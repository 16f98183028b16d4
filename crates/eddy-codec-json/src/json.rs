use serde::{Deserialize, Serialize};
use serde_json::Value;

use eddy_codecs::{
    Bytes, ContentType, PayloadDescriptor, PayloadDeserializer, PayloadError, PayloadSerializer,
    ReadContext, TypeDescriptor, WriteContext, codes,
};

fn json_descriptor() -> PayloadDescriptor {
    PayloadDescriptor::new(
        ContentType::new("application/json"),
        TypeDescriptor::of::<Value>(),
    )
}

/// 无配置编解码器的持久化表示：空配置，重建即重走构造路径。
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct JsonCodecConfig {}

/// 将内存中的 JSON 树渲染为紧凑文本字节的序列化器。
///
/// # 设计动机（Why）
/// - 通用 JSON 树负载让连接器无需为每种消息结构定义记录类型；
/// - 输出采用紧凑形态且字段顺序等于树的插入顺序，使"解析 → 重编码"
///   对同一解析器产出的树逐字节幂等，便于下游做字节级比对与去重。
///
/// # 行为概览（How）
/// - `encode`：紧凑渲染，无多余空白，不排序键，不重排数字格式；
/// - 渲染失败（如树中携带无法表示的数值）归入 [`codes::ENCODE`]。
///
/// # 契约说明（What）
/// - **输入类型**：出站业务对象为 [`serde_json::Value`]；
/// - **后置条件**：输出是输入树的忠实再序列化，无任何语义变换。
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(from = "JsonCodecConfig", into = "JsonCodecConfig")]
pub struct JsonPayloadSerializer {
    descriptor: PayloadDescriptor,
}

impl JsonPayloadSerializer {
    /// 构造 JSON 树序列化器。
    pub fn new() -> Self {
        Self {
            descriptor: json_descriptor(),
        }
    }
}

impl Default for JsonPayloadSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadSerializer for JsonPayloadSerializer {
    type Item = Value;

    fn descriptor(&self) -> &PayloadDescriptor {
        &self.descriptor
    }

    fn encode(&self, item: &Self::Item, _ctx: &WriteContext<'_>) -> Result<Bytes, PayloadError> {
        serde_json::to_vec(item).map(Bytes::from).map_err(|err| {
            PayloadError::new(codes::ENCODE, "JSON tree failed to render as compact text")
                .with_cause(err)
        })
    }
}

impl From<JsonCodecConfig> for JsonPayloadSerializer {
    fn from(_config: JsonCodecConfig) -> Self {
        Self::new()
    }
}

impl From<JsonPayloadSerializer> for JsonCodecConfig {
    fn from(_serializer: JsonPayloadSerializer) -> Self {
        Self {}
    }
}

/// 将负载字节解析为 JSON 树的反序列化器。
///
/// # 设计动机（Why）
/// - 与 [`JsonPayloadSerializer`] 对称；对象字段顺序在解析时按文本
///   出现顺序保留，保障往返的字节级幂等。
///
/// # 契约说明（What）
/// - **失败语义**：非法 JSON 返回 [`codes::MALFORMED_JSON`] 并携带底层
///   解析原因，同步回传调用方，不做重试；
/// - **后置条件**：`encode(decode(t)) == t` 对任意紧凑文本 `t` 成立。
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(from = "JsonCodecConfig", into = "JsonCodecConfig")]
pub struct JsonPayloadDeserializer {
    descriptor: PayloadDescriptor,
}

impl JsonPayloadDeserializer {
    /// 构造 JSON 树反序列化器。
    pub fn new() -> Self {
        Self {
            descriptor: json_descriptor(),
        }
    }
}

impl Default for JsonPayloadDeserializer {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadDeserializer for JsonPayloadDeserializer {
    type Item = Value;

    fn descriptor(&self) -> &PayloadDescriptor {
        &self.descriptor
    }

    fn decode(&self, payload: &[u8], _ctx: &ReadContext<'_>) -> Result<Self::Item, PayloadError> {
        serde_json::from_slice(payload).map_err(|err| {
            PayloadError::new(codes::MALFORMED_JSON, "payload bytes are not valid JSON")
                .with_cause(err)
        })
    }
}

impl From<JsonCodecConfig> for JsonPayloadDeserializer {
    fn from(_config: JsonCodecConfig) -> Self {
        Self::new()
    }
}

impl From<JsonPayloadDeserializer> for JsonCodecConfig {
    fn from(_deserializer: JsonPayloadDeserializer) -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn round_trip(text: &str) -> Vec<u8> {
        let deserializer = JsonPayloadDeserializer::new();
        let serializer = JsonPayloadSerializer::new();
        let tree = deserializer
            .decode(text.as_bytes(), &ReadContext::new())
            .expect("input parses");
        serializer
            .encode(&tree, &WriteContext::new())
            .expect("tree renders")
            .to_vec()
    }

    #[test]
    fn compact_text_round_trips_byte_identically() {
        // Why: "解析 → 重编码"的字节级幂等是下游比对与去重的前提。
        let samples = [
            r#"{"word":"hello","count":3}"#,
            r#"{"count":3,"word":"hello"}"#,
            r#"{"nested":{"list":[1,2,3],"flag":true},"tail":null}"#,
            r#"["héllo",0.5,-7,"✓"]"#,
            r#""just a string""#,
        ];
        for sample in samples {
            assert_eq!(round_trip(sample), sample.as_bytes());
        }
    }

    #[test]
    fn field_order_follows_insertion_order() {
        // Why: 编码器不排序键；树里字段先来后到的顺序就是线上的顺序。
        let mut tree = serde_json::Map::new();
        tree.insert("zulu".to_string(), Value::from(1));
        tree.insert("alpha".to_string(), Value::from(2));
        let payload = JsonPayloadSerializer::new()
            .encode(&Value::Object(tree), &WriteContext::new())
            .expect("tree renders");
        assert_eq!(payload.as_ref(), br#"{"zulu":1,"alpha":2}"#);
    }

    #[test]
    fn malformed_payload_surfaces_stable_code_with_cause() {
        let deserializer = JsonPayloadDeserializer::new();
        let err = deserializer
            .decode(br#"{"word":"#, &ReadContext::new())
            .expect_err("truncated JSON rejected");
        assert_eq!(err.code(), codes::MALFORMED_JSON);
        assert!(err.cause().is_some());
    }

    #[test]
    fn trailing_garbage_is_malformed() {
        let deserializer = JsonPayloadDeserializer::new();
        let err = deserializer
            .decode(br#"{"ok":true} extra"#, &ReadContext::new())
            .expect_err("trailing bytes rejected");
        assert_eq!(err.code(), codes::MALFORMED_JSON);
    }

    #[test]
    fn produced_type_reports_json_value() {
        let deserializer = JsonPayloadDeserializer::new();
        assert!(deserializer.produced_type().name().contains("Value"));
        assert_eq!(
            deserializer.descriptor().content_type().as_str(),
            "application/json"
        );
    }

    #[test]
    fn number_formatting_is_preserved_for_float_text() {
        // Why: 0.5 与 5e-1 语义相同但字节不同；编码器忠实再现解析产物，
        //      不做数字重排版。
        assert_eq!(round_trip(r#"[0.5]"#), br#"[0.5]"#.to_vec());
    }
}
