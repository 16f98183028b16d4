use alloc::borrow::ToOwned;
use alloc::string::String;

use serde_json::{Value, json};

use eddy_codecs::{PayloadError, codes};

use crate::record::{JsonRecord, RecordPayloadDeserializer, RecordPayloadSerializer};

/// 词频统计记录：一个文本字段加一个计数字段的示例领域记录。
///
/// # 设计动机（Why）
/// - 作为 [`JsonRecord`] 契约的参考实现，演示业务记录如何声明自己的
///   JSON 形态并接入泛型编解码器；
/// - 同时被集成测试用作端到端样例。
///
/// # 契约说明（What）
/// - 规范 JSON 形态为 `{"word":...,"count":...}`，字段顺序固定；
/// - 相等性为结构相等，哈希与相等一致；
/// - 计数为非负整数；来源 JSON 中的负数或小数按类型不符拒绝。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordCount {
    /// 被统计的词。
    pub word: String,
    /// 出现次数。
    pub count: u64,
}

impl WordCount {
    /// 构造词频记录。
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl JsonRecord for WordCount {
    fn to_json(&self) -> Value {
        // 插入顺序即线上字段顺序。
        json!({ "word": self.word, "count": self.count })
    }

    fn from_json(value: &Value) -> Result<Self, PayloadError> {
        let word = value.get("word").and_then(Value::as_str).ok_or_else(|| {
            PayloadError::new(
                codes::INVALID_RECORD,
                "record field `word` is missing or not a string",
            )
        })?;
        let count = value.get("count").and_then(Value::as_u64).ok_or_else(|| {
            PayloadError::new(
                codes::INVALID_RECORD,
                "record field `count` is missing or not an unsigned integer",
            )
        })?;
        Ok(Self {
            word: word.to_owned(),
            count,
        })
    }
}

/// 词频记录的序列化器别名。
pub type WordCountSerializer = RecordPayloadSerializer<WordCount>;
/// 词频记录的反序列化器别名。
pub type WordCountDeserializer = RecordPayloadDeserializer<WordCount>;

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_codecs::{PayloadDeserializer, PayloadSerializer, ReadContext, WriteContext};

    #[test]
    fn canonical_form_round_trips_byte_identically() {
        // Why: 规范形态的记录经解码再编码必须逐字节复原，下游可据此比对。
        let serializer = WordCountSerializer::new();
        let deserializer = WordCountDeserializer::new();

        let record = deserializer
            .decode(br#"{"word":"hello","count":3}"#, &ReadContext::new())
            .expect("canonical payload decodes");
        assert_eq!(record, WordCount::new("hello", 3));

        let payload = serializer
            .encode(&record, &WriteContext::new())
            .expect("record encodes");
        assert_eq!(payload.as_ref(), br#"{"word":"hello","count":3}"#);
    }

    #[test]
    fn field_order_and_whitespace_do_not_affect_equality() {
        // Why: 记录相等性是结构性的；来源文本的排版差异不产生不同记录。
        let deserializer = WordCountDeserializer::new();
        let canonical = deserializer
            .decode(br#"{"word":"hello","count":3}"#, &ReadContext::new())
            .expect("canonical decodes");
        let reordered = deserializer
            .decode(br#"{ "count": 3, "word": "hello" }"#, &ReadContext::new())
            .expect("reordered decodes");
        assert_eq!(canonical, reordered);
    }

    #[test]
    fn structural_round_trip_holds_for_any_record() {
        let serializer = WordCountSerializer::new();
        let deserializer = WordCountDeserializer::new();
        let samples = [
            WordCount::new("hello", 3),
            WordCount::new("", 0),
            WordCount::new("héllo wörld ✓", u64::MAX),
        ];
        for record in samples {
            let payload = serializer
                .encode(&record, &WriteContext::new())
                .expect("record encodes");
            let restored = deserializer
                .decode(&payload, &ReadContext::new())
                .expect("payload decodes");
            assert_eq!(restored, record);
        }
    }

    #[test]
    fn missing_count_field_is_an_invalid_record() {
        let deserializer = WordCountDeserializer::new();
        let err = deserializer
            .decode(br#"{"word":"hello"}"#, &ReadContext::new())
            .expect_err("missing field rejected");
        assert_eq!(err.code(), codes::INVALID_RECORD);
    }

    #[test]
    fn wrong_kind_count_field_is_an_invalid_record() {
        let deserializer = WordCountDeserializer::new();
        for payload in [
            br#"{"word":"hello","count":"3"}"#.as_slice(),
            br#"{"word":"hello","count":-3}"#.as_slice(),
            br#"{"word":"hello","count":3.5}"#.as_slice(),
        ] {
            let err = deserializer
                .decode(payload, &ReadContext::new())
                .expect_err("wrong kind rejected");
            assert_eq!(err.code(), codes::INVALID_RECORD);
        }
    }

    #[test]
    fn unparseable_payload_is_an_invalid_record_with_cause() {
        // Why: 记录构造把底层解析失败包装为记录错误并保留原因链路。
        let err = WordCount::from_bytes(br#"not json"#).expect_err("garbage rejected");
        assert_eq!(err.code(), codes::INVALID_RECORD);
        assert!(err.cause().is_some());
    }

    #[test]
    fn produced_type_reports_the_record_type() {
        let deserializer = WordCountDeserializer::new();
        assert!(deserializer.produced_type().name().contains("WordCount"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn hash_is_consistent_with_equality() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(WordCount::new("hello", 3));
        assert!(seen.contains(&WordCount::new("hello", 3)));
        assert!(!seen.contains(&WordCount::new("hello", 4)));
        assert!(!seen.contains(&WordCount::new("hellO", 3)));
    }
}
