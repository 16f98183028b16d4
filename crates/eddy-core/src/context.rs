use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// 消息头的多值映射表示：一个键可携带多个按序排列的值。
pub type Headers = BTreeMap<String, Vec<String>>;

/// `WriteContext` 是宿主框架在写出时刻提供的不透明元数据视图。
///
/// # 设计背景（Why）
/// - 写端任务在调用序列化器时可能携带目标主题、事件时间等旁路信息；
///   统一上下文使签名保持稳定，序列化器按需取用；
/// - 域内编解码器均不读取该上下文，但签名保留它以兼容宿主框架的
///   调用约定，并为扩展实现（如按主题分流的序列化器）留出入口。
///
/// # 契约说明（What）
/// - 上下文只持有借用，不产生分配；生命周期与单次调用绑定；
/// - **后置条件**：上下文自身不保存状态，可在多次编码之间重建。
#[derive(Clone, Copy, Debug, Default)]
pub struct WriteContext<'a> {
    subject: Option<&'a str>,
    timestamp_millis: Option<i64>,
}

impl<'a> WriteContext<'a> {
    /// 构建空上下文。
    pub fn new() -> Self {
        Self::default()
    }

    /// 附带目标主题。
    pub fn with_subject(mut self, subject: &'a str) -> Self {
        self.subject = Some(subject);
        self
    }

    /// 附带事件时间（Unix epoch 毫秒）。
    pub fn with_timestamp_millis(mut self, timestamp_millis: i64) -> Self {
        self.timestamp_millis = Some(timestamp_millis);
        self
    }

    /// 返回可选的目标主题。
    pub fn subject(&self) -> Option<&'a str> {
        self.subject
    }

    /// 返回可选的事件时间。
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp_millis
    }
}

/// `ReadContext` 是宿主框架在读入时刻提供的主题与消息头视图。
///
/// # 设计背景（Why）
/// - 读端任务拿到的消息除负载字节外还有主题与消息头；域内反序列化器
///   只消费原始字节，但扩展实现（如按头部路由的反序列化器）需要
///   完整视图，故契约层统一携带。
///
/// # 契约说明（What）
/// - 上下文只持有借用；**前置条件**：引用在本次解码调用期间有效；
/// - **后置条件**：解码器不得在调用结束后继续持有其中引用。
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadContext<'a> {
    subject: Option<&'a str>,
    headers: Option<&'a Headers>,
}

impl<'a> ReadContext<'a> {
    /// 构建空上下文。
    pub fn new() -> Self {
        Self::default()
    }

    /// 附带来源主题。
    pub fn with_subject(mut self, subject: &'a str) -> Self {
        self.subject = Some(subject);
        self
    }

    /// 附带消息头。
    pub fn with_headers(mut self, headers: &'a Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// 返回可选的来源主题。
    pub fn subject(&self) -> Option<&'a str> {
        self.subject
    }

    /// 返回可选的消息头。
    pub fn headers(&self) -> Option<&'a Headers> {
        self.headers
    }
}
