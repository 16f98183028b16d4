use alloc::{borrow::Cow, boxed::Box};
use core::error::Error;
use core::fmt;

/// `PayloadError` 表示负载编解码域内所有可观察错误的最终形态。
///
/// # 设计背景（Why）
/// - 序列化器与反序列化器在不同环节产生的故障需要合流为统一的错误码，
///   以便宿主框架的日志与告警系统执行精确分类；
/// - 契约层需兼容 `no_std + alloc` 场景，因此基于 `core::error::Error`
///   而非 `std` 专属设施。
///
/// # 逻辑解析（How）
/// - 错误码 `code` 始终为 `'static` 字符串，承载稳定语义；`message`
///   面向排障人员；`cause` 以 Builder 风格叠加底层原因并通过
///   `source()` 暴露完整链路。
///
/// # 契约说明（What）
/// - **前置条件**：调用方必须使用 [`codes`] 模块或遵循 `<域>.<语义>`
///   约定的自定义码值；
/// - **返回值**：构造函数返回拥有所有权的 `PayloadError`，可安全跨线程
///   移动（`Send + Sync + 'static`）；
/// - **后置条件**：除非显式调用 [`with_cause`](Self::with_cause)，错误
///   不包含底层原因。
///
/// # 风险提示（Trade-offs）
/// - 采用 `Cow` 保存消息，牺牲极少量堆分配换取静态与动态描述共存；
/// - 结构体仅负责承载信息，不执行任何日志或指标上报；编解码域的错误
///   一律同步回传调用方，由宿主框架决定处置。
#[derive(Debug)]
pub struct PayloadError {
    code: &'static str,
    message: Cow<'static, str>,
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl PayloadError {
    /// 构造负载编解码错误。
    ///
    /// # 契约说明（What）
    /// - `code`：遵循 `<域>.<语义>` 约定的稳定错误码，推荐取自 [`codes`]；
    /// - `message`：面向排障人员的自然语言描述，可为静态或堆分配字符串。
    pub fn new(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// 附带底层原因并返回新的错误。
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// 返回稳定错误码。
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// 返回人类可读描述。
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 访问可选的底层原因。
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

/// 负载编解码域的稳定错误码命名空间。
///
/// # 设计背景（Why）
/// - 错误码是跨进程、跨语言排障的最小共识；集中声明避免各实现
///   自造字符串导致告警维度漂移。
///
/// # 契约说明（What）
/// - 所有码值遵循 `payload.<语义>` 约定，一经发布不得变更含义。
pub mod codes {
    /// 配置的字符集名称无法解析为已知编码；配置期错误，对该实例致命，无回退。
    pub const UNSUPPORTED_CHARSET: &str = "payload.unsupported_charset";
    /// 字节序列无法解析为合法 JSON；解码期错误，同步回传调用方，不做内部重试。
    pub const MALFORMED_JSON: &str = "payload.malformed_json";
    /// 记录必备字段缺失或类型不符；`cause` 中携带底层解析原因。
    pub const INVALID_RECORD: &str = "payload.invalid_record";
    /// 内存中的 JSON 树序列化为字节失败。
    pub const ENCODE: &str = "payload.encode";
}
